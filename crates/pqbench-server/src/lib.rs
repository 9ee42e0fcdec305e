//! # PQBench Server
//!
//! HTTP API for the PQBench post-quantum benchmark leaderboard:
//! algorithm submission, benchmark ingest, and category-ranked results.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod seed;
pub mod service;
pub mod state;

pub use state::{AppState, SharedState};

/// Build the API router
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & Info
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/api/v1/status", get(api::status))
        // Algorithms
        .route("/api/v1/algorithms", get(api::list_algorithms))
        .route("/api/v1/algorithms", post(api::submit_algorithm))
        .route("/api/v1/algorithms/:id", get(api::get_algorithm))
        // Benchmarks
        .route("/api/v1/benchmarks", post(api::ingest_benchmark))
        // Leaderboard
        .route("/api/v1/leaderboard", get(api::leaderboard))
        .route("/api/v1/categories", get(api::categories))
        .layer(cors)
        .with_state(state)
}
