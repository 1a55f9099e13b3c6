use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use unipos_auth::TokenService;

use crate::app::errors::ApiError;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
}

/// Authorization gate for all protected routes.
///
/// Fails with 401 before any downstream logic runs; verification details are
/// logged, never leaked to the caller. Role checks (403) happen inside the
/// individual handlers, after this succeeds.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;
    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthenticated("Token is missing"))?;

    let header = header
        .to_str()
        .map_err(|_| ApiError::unauthenticated("Token is missing"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthenticated("Token is missing"))?
        .trim();

    if token.is_empty() {
        return Err(ApiError::unauthenticated("Token is missing"));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn bearer_extraction_requires_the_scheme() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Bearer   ".parse().unwrap());
        assert!(extract_bearer(&headers).is_err());

        headers.insert(AUTHORIZATION, "Bearer tok123".parse().unwrap());
        assert_eq!(extract_bearer(&headers).unwrap(), "tok123");
    }
}
