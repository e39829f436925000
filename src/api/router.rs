//! Router setup and configuration.

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, id};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let mut health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    if state.config.observability.metrics_enabled {
        health_routes = health_routes.route(
            &state.config.observability.metrics_path,
            get(health::metrics),
        );
    }

    let id_routes = Router::new()
        .route("/schemes", get(id::list_schemes))
        .route("/id/{scheme}", get(id::generate));

    Router::new()
        .merge(health_routes)
        .nest("/v1", id_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
