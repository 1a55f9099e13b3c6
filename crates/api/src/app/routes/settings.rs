use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use unipos_store::Settings;

use crate::app::AppState;
use crate::app::errors::ApiError;
use crate::context::CurrentUser;

/// `GET /settings`: the singleton record, verbatim.
pub async fn get_settings(
    Extension(state): Extension<Arc<AppState>>,
    Extension(_current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    Ok((StatusCode::OK, Json(state.store.settings())).into_response())
}

/// `PUT /settings`: replace the singleton wholesale.
pub async fn put_settings(
    Extension(state): Extension<Arc<AppState>>,
    Extension(_current): Extension<CurrentUser>,
    Json(body): Json<Settings>,
) -> Result<axum::response::Response, ApiError> {
    state.store.put_settings(body.clone());
    Ok((StatusCode::OK, Json(body)).into_response())
}
