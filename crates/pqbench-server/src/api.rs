//! HTTP route handlers
//!
//! All responses use the `{success, data?, error?, code?}` JSON envelope
//! with camelCase field names.

use crate::service;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pqbench_core::{
    format, AlgorithmId, BenchError, BenchmarkSubmission, Category, ResearcherProfile,
    SubmitAlgorithm,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Handler error wrapper mapping domain errors to HTTP statuses
pub struct ApiError(BenchError);

impl From<BenchError> for ApiError {
    fn from(err: BenchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BenchError::AlgorithmNotFound(_) => StatusCode::NOT_FOUND,
            err if err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "success": false,
            "error": self.0.to_string(),
            "code": self.0.code(),
        }));
        (status, body).into_response()
    }
}

fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// Serialize a record and splice extra fields into the resulting object
fn augmented<T: Serialize>(base: &T, extra: Vec<(&str, Value)>) -> Result<Value, BenchError> {
    let mut value = serde_json::to_value(base).map_err(|e| BenchError::Internal(e.to_string()))?;
    if let Some(map) = value.as_object_mut() {
        for (key, extra_value) in extra {
            map.insert(key.to_string(), extra_value);
        }
    }
    Ok(value)
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "PQBench API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Post-quantum cryptography benchmark leaderboard",
        "docs": "/api/v1/status"
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp()
    }))
}

pub async fn status(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "startedAt": state.started_at.to_rfc3339(),
        "counts": {
            "researchers": state.db.researchers.len(),
            "algorithms": state.db.algorithms.len(),
            "benchmarks": state.db.benchmarks.len(),
            "leaderboardEntries": state.db.leaderboard.len(),
        },
        "endpoints": {
            "algorithms": "/api/v1/algorithms",
            "algorithm": "/api/v1/algorithms/{id}",
            "benchmarks": "/api/v1/benchmarks",
            "leaderboard": "/api/v1/leaderboard",
            "categories": "/api/v1/categories"
        }
    }))
}

pub async fn list_algorithms(
    State(state): State<SharedState>,
) -> Result<Json<Value>, ApiError> {
    let mut algorithms = state.db.algorithms.all();
    algorithms.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut data = Vec::with_capacity(algorithms.len());
    for algorithm in &algorithms {
        let researcher = state
            .db
            .researchers
            .get(&algorithm.researcher_id)
            .map(|r| ResearcherProfile::from(&r));
        let latest = state
            .db
            .benchmarks
            .for_algorithm(&algorithm.id)
            .into_iter()
            .last();

        data.push(augmented(
            algorithm,
            vec![
                ("researcher", serde_json::to_value(researcher).unwrap_or(Value::Null)),
                ("latestBenchmark", serde_json::to_value(latest).unwrap_or(Value::Null)),
                (
                    "runCount",
                    json!(state.db.benchmarks.count_for(&algorithm.id)),
                ),
            ],
        )?);
    }

    Ok(envelope(Value::Array(data)))
}

pub async fn submit_algorithm(
    State(state): State<SharedState>,
    Json(input): Json<SubmitAlgorithm>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let algorithm = service::submit_algorithm(&state.db, &input)?;
    let researcher = state
        .db
        .researchers
        .get(&algorithm.researcher_id)
        .map(|r| ResearcherProfile::from(&r));

    let data = augmented(
        &algorithm,
        vec![(
            "researcher",
            serde_json::to_value(researcher).unwrap_or(Value::Null),
        )],
    )?;
    Ok((StatusCode::CREATED, envelope(data)))
}

pub async fn get_algorithm(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = AlgorithmId::parse(&id)
        .map_err(|_| BenchError::InvalidInput("malformed algorithm id".into()))?;
    let algorithm = state
        .db
        .algorithms
        .get(&id)
        .ok_or(BenchError::AlgorithmNotFound(id))?;

    let researcher = state
        .db
        .researchers
        .get(&algorithm.researcher_id)
        .map(|r| ResearcherProfile::from(&r));
    let mut benchmarks = state.db.benchmarks.for_algorithm(&id);
    benchmarks.reverse(); // newest first

    let data = augmented(
        &algorithm,
        vec![
            (
                "researcher",
                serde_json::to_value(researcher).unwrap_or(Value::Null),
            ),
            (
                "benchmarks",
                serde_json::to_value(benchmarks).unwrap_or(Value::Null),
            ),
        ],
    )?;
    Ok(envelope(data))
}

pub async fn ingest_benchmark(
    State(state): State<SharedState>,
    Json(submission): Json<BenchmarkSubmission>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let benchmark = service::ingest_benchmark(&state.db, &submission)?;
    let data = serde_json::to_value(&benchmark).map_err(|e| BenchError::Internal(e.to_string()))?;
    Ok((StatusCode::CREATED, envelope(data)))
}

pub async fn leaderboard(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let entries = state.db.leaderboard.ranked();

    let mut data = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        data.push(augmented(
            entry,
            vec![
                ("rank", json!(index + 1)),
                ("categoryLabel", json!(entry.category.label())),
                (
                    "bestKeyGenTimeFormatted",
                    json!(format::format_microseconds(entry.best_key_gen_time)),
                ),
                (
                    "lowestMemoryFormatted",
                    json!(format::format_kilobytes(entry.lowest_memory)),
                ),
                (
                    "lastUpdatedRelative",
                    json!(format::time_ago(entry.last_updated)),
                ),
            ],
        )?);
    }

    Ok(envelope(Value::Array(data)))
}

pub async fn categories() -> Json<Value> {
    let data: Vec<Value> = Category::ALL
        .iter()
        .map(|category| {
            json!({
                "id": category.as_str(),
                "label": category.label(),
            })
        })
        .collect();

    Json(json!({ "success": true, "data": data }))
}
