//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get, routing::post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use unipos_auth::{AuthConfig, TokenService};
use unipos_store::Store;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared services available to every handler.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenService>,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AuthConfig, store: Arc<dyn Store>) -> Router {
    let tokens = Arc::new(TokenService::new(&config));
    let state = Arc::new(AppState {
        store,
        tokens: tokens.clone(),
    });
    let auth_state = middleware::AuthState { tokens };

    // Protected routes: token required before anything else runs. The
    // fallback sits inside this layer so an unmatched path with no token
    // still answers 401, not 404.
    let protected = routes::router()
        .fallback(routes::not_found)
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health).fallback(routes::not_found))
        .route("/auth/signup", post(routes::auth::signup).fallback(routes::not_found))
        .route("/auth/login", post(routes::auth::login).fallback(routes::not_found))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(cors_layer()).layer(Extension(state)))
}

/// Fully open CORS: any origin, common headers/methods. Preflight `OPTIONS`
/// is answered by the layer itself with 200 and no body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
