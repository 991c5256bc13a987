//! Web server — axum API for the nearest-aircraft endpoint.
//!
//! Shared state carries the watch point, the flight-table path (reloaded
//! per request), the unseen log, and the upstream state provider behind a
//! trait so tests can stub it.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use skynear_core::geo::GeoPoint;
use skynear_core::unseen::UnseenLog;

use crate::opensky::StateProvider;

pub mod routes;

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

pub struct AppState {
    pub watch: GeoPoint,
    pub box_delta: f64,
    pub flights_csv: PathBuf,
    pub unseen: Arc<dyn UnseenLog>,
    pub provider: Arc<dyn StateProvider>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/aviao", axum::routing::get(routes::aviao_proximo))
        .with_state(state)
        .layer(cors)
}

/// Start the web server.
pub async fn serve(state: Arc<AppState>, host: String, port: u16) {
    let app = build_router(state);
    let addr = format!("{host}:{port}");

    eprintln!("skynear listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
