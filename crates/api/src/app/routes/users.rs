use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use unipos_auth::password;
use unipos_store::{NewUser, UserOrigin, UserView};

use crate::app::AppState;
use crate::app::dto::{AuthResponse, CreateStaffRequest, UpdateUserRequest};
use crate::app::errors::ApiError;
use crate::app::routes::common::require_admin;
use crate::app::routes::not_found;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user).fallback(not_found))
        .route("/:id", put(update_user).delete(delete_user).fallback(not_found))
}

/// `GET /users` (admin): all accounts, credentials stripped.
pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    require_admin(&current)?;

    let users: Vec<UserView> = state.store.scan_users().iter().map(UserView::from).collect();
    Ok((StatusCode::OK, Json(users)).into_response())
}

/// `POST /users` (admin): add a staff account with no password; the cashier
/// sets one on first login.
pub async fn create_user(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateStaffRequest>,
) -> Result<axum::response::Response, ApiError> {
    require_admin(&current)?;

    let user = state.store.create_user(NewUser {
        email: body.email,
        password_hash: None,
        name: body.name.unwrap_or_default(),
        origin: UserOrigin::AdminCreated,
    })?;

    tracing::info!(user_id = user.id, by = current.id(), "staff account created");
    Ok((StatusCode::CREATED, Json(UserView::from(&user))).into_response())
}

/// `PUT /users/{id}`: allow-listed partial update.
///
/// Admins may change any listed field on any account. A cashier may change
/// only their own name and password; privileged fields or foreign targets
/// are refused outright rather than silently dropped. A fresh token is
/// issued so a role change is reflected immediately.
pub async fn update_user(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<axum::response::Response, ApiError> {
    if !current.is_admin() {
        if current.id() != id {
            return Err(ApiError::forbidden("Admin access required"));
        }
        if body.touches_privileged_fields() {
            return Err(ApiError::forbidden("Field not permitted for this role"));
        }
    }

    let mut user = state
        .store
        .get_user(id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if let Some(name) = body.name {
        user.name = name;
    }
    if let Some(plain) = body.password {
        user.password_hash = Some(password::hash(&plain)?);
        user.needs_password_setup = false;
    }
    if current.is_admin() {
        if let Some(email) = body.email {
            user.email = email;
        }
        if let Some(role) = body.role {
            user.role = role;
        }
        if let Some(plan) = body.plan {
            user.plan = Some(plan);
        }
        if let Some(price) = body.price {
            user.price = Some(price);
        }
        if let Some(active) = body.active {
            user.active = active;
        }
        if let Some(permissions) = body.permissions {
            user.permissions = permissions;
        }
    }

    state.store.put_user(user.clone())?;

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

/// `DELETE /users/{id}` (admin): idempotent, always 204.
pub async fn delete_user(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u64>,
) -> Result<axum::response::Response, ApiError> {
    require_admin(&current)?;

    state.store.delete_user(id);
    Ok(StatusCode::NO_CONTENT.into_response())
}
