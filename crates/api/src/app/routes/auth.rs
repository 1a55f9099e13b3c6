use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use unipos_auth::password;
use unipos_core::DomainError;
use unipos_store::{NewUser, UserOrigin, UserView};

use crate::app::AppState;
use crate::app::dto::{AuthResponse, LoginRequest, PasswordSetupResponse, SignupRequest};
use crate::app::errors::ApiError;

/// `POST /auth/signup` (unauthenticated).
///
/// The very first account becomes the active admin; the store enforces that
/// atomically together with the duplicate-email check.
pub async fn signup(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> Result<axum::response::Response, ApiError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(DomainError::validation("Email and password are required").into());
    }

    let password_hash = password::hash(&body.password)?;

    let user = state.store.create_user(NewUser {
        email: body.email,
        password_hash: Some(password_hash),
        name: body.name.unwrap_or_default(),
        origin: UserOrigin::SelfSignup,
    })?;

    let token = state.tokens.issue(user.id, &user.email, user.role)?;
    tracing::info!(user_id = user.id, role = %user.role, "account created");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: UserView::from(&user),
            first_login: None,
        }),
    )
        .into_response())
}

/// `POST /auth/login` (unauthenticated).
///
/// Three cases around `needsPasswordSetup`:
/// 1. flag set + `newPassword` supplied: adopt the password, clear the flag,
///    issue a token, `firstLogin: true`;
/// 2. flag set, no `newPassword`: instruct the client to collect one — no
///    token leaves the server;
/// 3. flag clear: verify the password, 401 on mismatch.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<axum::response::Response, ApiError> {
    let mut user = state
        .store
        .find_user_by_email(&body.email)
        .ok_or_else(|| ApiError::unauthenticated("Email not found"))?;

    if user.needs_password_setup {
        let Some(new_password) = body.new_password else {
            return Ok((
                StatusCode::OK,
                Json(PasswordSetupResponse {
                    needs_password_setup: true,
                    user_id: user.id,
                    email: user.email,
                    role: user.role,
                }),
            )
                .into_response());
        };

        user.password_hash = Some(password::hash(&new_password)?);
        user.needs_password_setup = false;
        state.store.put_user(user.clone())?;

        let token = state.tokens.issue(user.id, &user.email, user.role)?;
        tracing::info!(user_id = user.id, "password set on first login");

        return Ok((
            StatusCode::OK,
            Json(AuthResponse {
                token,
                user: UserView::from(&user),
                first_login: Some(true),
            }),
        )
            .into_response());
    }

    let supplied = body.password.as_deref().unwrap_or_default();
    let stored = user.password_hash.as_deref().unwrap_or_default();
    if !password::verify(supplied, stored) {
        return Err(ApiError::unauthenticated("Invalid password"));
    }

    let token = state.tokens.issue(user.id, &user.email, user.role)?;
    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            token,
            user: UserView::from(&user),
            first_login: None,
        }),
    )
        .into_response())
}
