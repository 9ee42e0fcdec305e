//! Run fingerprinting
//!
//! Each recorded benchmark carries a BLAKE3 digest over the canonical
//! key-sorted JSON serialization of the submission plus its ingest
//! timestamp. The digest is a reproducibility fingerprint only; nothing
//! looks records up by it and collisions are not checked.

use crate::error::{BenchError, Result};
use crate::models::{BenchmarkMetrics, EnvironmentInfo};
use crate::types::{AlgorithmId, RunHash};

/// Compute the fingerprint of one benchmark submission
///
/// serde_json maps are BTree-ordered, so the serialization is key-sorted
/// at every nesting level and stable across runs.
pub fn compute_run_hash(
    algorithm_id: AlgorithmId,
    metrics: &BenchmarkMetrics,
    environment: &EnvironmentInfo,
    timestamp_ms: i64,
) -> Result<RunHash> {
    let payload = serde_json::json!({
        "algorithmId": algorithm_id,
        "metrics": metrics,
        "environment": environment,
        "timestamp": timestamp_ms,
    });
    let bytes =
        serde_json::to_vec(&payload).map_err(|e| BenchError::Internal(e.to_string()))?;
    Ok(RunHash::from_content(&bytes))
}
