//! Simulador Tributário - lead-capture backend
//!
//! A small web backend for a Brazilian tax-regime simulator:
//!
//! - **/calcular** quotes two fixed tax regimes from a declared monthly
//!   revenue and records the visitor as a lead in a shared CSV file
//! - **/admin/...** exposes the collected leads behind a single
//!   credential-pair login
//! - everything else falls through to the pre-built SPA bundle
//!
//! The store is the only stateful component; handlers stay thin and the
//! tax math is pure.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;
pub mod tax;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_routes = Router::new()
        .route("/calcular", post(handlers::calcular))
        .route("/api/health", get(handlers::health));

    let admin_routes = Router::new()
        .route("/admin/login", post(handlers::admin_login))
        .route("/admin/dados", get(handlers::admin_dados))
        .route("/admin/estatisticas", get(handlers::admin_estatisticas))
        .route("/admin/marcar_contato", post(handlers::marcar_contato));

    // Unmatched paths serve the SPA bundle; unknown files serve the entry
    // document so client-side routing keeps working.
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("simulador-web listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
