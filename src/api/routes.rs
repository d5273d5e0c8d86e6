use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{agents, system, workflows};
use crate::api::state::AppState;

/// Builds the application router with CORS and request tracing
///
/// Collection routes answer with and without a trailing slash.
pub fn router(state: AppState) -> Router {
    // Wildcard origins cannot be combined with credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health_check))
        .route("/echo", post(system::echo))
        // Agent routes
        .route(
            "/agents",
            get(agents::list_agents).post(agents::create_agent),
        )
        .route(
            "/agents/",
            get(agents::list_agents).post(agents::create_agent),
        )
        .route("/agents/:id", get(agents::get_agent))
        // Workflow routes
        .route(
            "/workflows",
            get(workflows::list_workflows).post(workflows::create_workflow),
        )
        .route(
            "/workflows/",
            get(workflows::list_workflows).post(workflows::create_workflow),
        )
        .route("/workflows/:id", get(workflows::get_workflow))
        .route("/workflows/:id/execute", post(workflows::execute_workflow))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
