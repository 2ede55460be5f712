pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assembles the service router with its standard layers. The lookup API
/// serves any origin, so the permissive CORS layer is intentional.
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
