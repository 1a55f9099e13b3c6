use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use unipos_store::NewProduct;

use crate::app::AppState;
use crate::app::dto::UpdateProductRequest;
use crate::app::errors::ApiError;
use crate::app::routes::common::require_permission;
use crate::app::routes::not_found;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product).fallback(not_found))
        .route("/:id", put(update_product).delete(delete_product).fallback(not_found))
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.view_inventory, "viewInventory")?;

    Ok((StatusCode::OK, Json(state.store.scan_products())).into_response())
}

pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<NewProduct>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.manage_products, "manageProducts")?;

    let product = state.store.create_product(body);
    Ok((StatusCode::CREATED, Json(product)).into_response())
}

pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.manage_products, "manageProducts")?;

    let mut product = state
        .store
        .get_product(id)
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    if let Some(name) = body.name {
        product.name = name;
    }
    if let Some(price) = body.price {
        product.price = price;
    }
    if let Some(cost) = body.cost {
        product.cost = cost;
    }
    if let Some(stock) = body.stock {
        product.stock = stock;
    }

    state.store.put_product(product.clone())?;
    Ok((StatusCode::OK, Json(product)).into_response())
}

pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<u64>,
) -> Result<axum::response::Response, ApiError> {
    require_permission(&*state.store, &current, |p| p.manage_products, "manageProducts")?;

    state.store.delete_product(id);
    Ok(StatusCode::NO_CONTENT.into_response())
}
