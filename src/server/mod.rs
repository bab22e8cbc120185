//! HTTP adapter: routing, JSON encoding, and error translation around the
//! query engine. No logic of its own beyond path parsing.

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

use crate::error::Result;
use crate::store::ClimateStore;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/:start", get(handlers::temperature_from))
        .route("/api/v1.0/:start/:end", get(handlers::temperature_range))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(store: Arc<ClimateStore>, address: SocketAddr) -> Result<()> {
    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(address).await?;

    info!(%address, "serving climate API");
    axum::serve(listener, app).await?;

    Ok(())
}
