use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use unipos_auth::{PasswordError, TokenError};
use unipos_core::DomainError;

/// Request-level failure, resolved at the point of detection and converted
/// immediately into an HTTP response. No retries, no aggregation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/invalid/expired token or bad credentials → 401.
    #[error("{0}")]
    Unauthenticated(String),

    /// Valid identity, insufficient role or permission → 403.
    #[error("{0}")]
    Forbidden(String),

    /// Uniqueness conflict (duplicate signup email) → 400.
    #[error("{0}")]
    Conflict(String),

    /// Unknown resource id or unmatched route → 404.
    #[error("{0}")]
    NotFound(String),

    /// Anything unexpected → 500. The cause is logged server-side; clients
    /// see a redacted message.
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let Self::Internal(ref cause) = self {
            tracing::error!("request failed: {cause:#}");
        }
        json_error(self.status(), self.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound => Self::not_found("Not found"),
            DomainError::Validation(msg) => Self::Conflict(msg),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(e) => {
                tracing::debug!("token verification failed: {e}");
                Self::unauthenticated("Token is invalid")
            }
            TokenError::Sign(e) => Self::Internal(e.into()),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(err.into())
    }
}

/// Standard error envelope: `{"error": <message>}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_standard_statuses() {
        assert_eq!(ApiError::unauthenticated("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("x").status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::conflict("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_errors_are_redacted() {
        let err = ApiError::Internal(anyhow::anyhow!("bcrypt exploded: secret detail"));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn store_conflict_keeps_the_original_wire_message() {
        let err: ApiError = DomainError::conflict("User already exists").into();
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
