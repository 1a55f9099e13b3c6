use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};

use unipos_store::NewExpense;

use crate::app::AppState;
use crate::app::errors::ApiError;
use crate::app::routes::common::{require_admin, require_permission};
use crate::app::routes::not_found;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_expenses).post(record_expense).fallback(not_found))
        .route("/:id", delete(delete_expense).fallback(not_found))
}

pub async fn list_expenses(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.view_expenses, "viewExpenses")?;

    Ok((StatusCode::OK, Json(state.store.scan_expenses())).into_response())
}

pub async fn record_expense(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<NewExpense>,
) -> Result<axum::response::Response, ApiError> {
    require_admin(&current)?;

    let expense = state.store.create_expense(body);
    Ok((StatusCode::CREATED, Json(expense)).into_response())
}

pub async fn delete_expense(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u64>,
) -> Result<axum::response::Response, ApiError> {
    require_admin(&current)?;

    state.store.delete_expense(id);
    Ok(StatusCode::NO_CONTENT.into_response())
}
