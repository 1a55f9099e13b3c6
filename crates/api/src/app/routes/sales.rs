use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use unipos_store::NewSale;

use crate::app::AppState;
use crate::app::errors::ApiError;
use crate::app::routes::common::require_permission;
use crate::app::routes::not_found;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new().route("/", get(list_sales).post(record_sale).fallback(not_found))
}

pub async fn list_sales(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.view_sales, "viewSales")?;

    Ok((StatusCode::OK, Json(state.store.scan_sales())).into_response())
}

/// Recording a sale is every cashier's job; no capability flag gates it.
pub async fn record_sale(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<NewSale>,
) -> Result<axum::response::Response, ApiError> {
    let sale = state.store.create_sale(body);
    Ok((StatusCode::CREATED, Json(sale)).into_response())
}
