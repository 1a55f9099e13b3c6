use axum::Router;
use axum::routing::get;

pub mod auth;
pub mod common;
pub mod expenses;
pub mod products;
pub mod reminders;
pub mod sales;
pub mod settings;
pub mod stats;
pub mod system;
pub mod users;

use crate::app::errors::ApiError;

/// Router for all authenticated endpoints.
///
/// Every method router falls back to [`not_found`] so an unregistered verb
/// on a known path answers like an unknown path, not a bare 405.
pub fn router() -> Router {
    Router::new()
        .nest("/users", users::router())
        .nest("/products", products::router())
        .nest("/sales", sales::router())
        .nest("/expenses", expenses::router())
        .nest("/reminders", reminders::router())
        .route("/stats", get(stats::get_stats).fallback(not_found))
        .route(
            "/settings",
            get(settings::get_settings)
                .put(settings::put_settings)
                .fallback(not_found),
        )
}

/// Catch-all for unmatched (path, method) pairs.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
