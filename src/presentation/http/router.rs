//! Router construction for the lookup server.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::LookupAvatarsUseCase;

/// Shared state of the HTTP handlers.
#[derive(Clone)]
pub struct ApiState {
    /// Lookup use case.
    pub lookup: Arc<LookupAvatarsUseCase>,
}

/// Builds the axum router with all routes and middleware.
pub fn build_router(lookup: Arc<LookupAvatarsUseCase>) -> Router {
    Router::new()
        .route("/api/rockstar", get(handlers::lookup_avatars))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(ApiState { lookup })
}
