//! Domain records: researchers, algorithms, benchmark runs, leaderboard rows
//!
//! Wire names are camelCase to match the JSON API. Timing values are in
//! microseconds, memory in kilobytes, key/signature/ciphertext sizes in
//! bytes.

use crate::error::{BenchError, Result};
use crate::types::{AlgorithmId, BenchmarkId, Category, EntryId, ResearcherId, RunHash};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitter identity, created on first submission
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Researcher {
    pub id: ResearcherId,
    pub name: String,
    /// Unique across all researchers
    pub email: String,
    pub affiliation: Option<String>,
    /// Provisional PBKDF2 hash; write-only, never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outward projection of a researcher (no email, no credentials)
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearcherProfile {
    pub id: ResearcherId,
    pub name: String,
    pub affiliation: Option<String>,
}

impl From<&Researcher> for ResearcherProfile {
    fn from(r: &Researcher) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            affiliation: r.affiliation.clone(),
        }
    }
}

/// One named and versioned algorithm implementation
///
/// The (name, version) pair is unique; identity fields are immutable after
/// submission.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Algorithm {
    pub id: AlgorithmId,
    pub name: String,
    pub version: String,
    pub category: Category,
    pub description: String,
    pub source_code: String,
    pub language: String,
    pub researcher_id: ResearcherId,
    /// Set by an external reviewer process, defaults to false
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw measurements of one benchmark run
///
/// Signature schemes populate sign/verify, key-encapsulation schemes
/// populate encaps/decaps; the pairs are never both meaningful on the same
/// run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkMetrics {
    /// Key generation time in microseconds
    pub key_gen_time: f64,

    /// Signing time in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_time: Option<f64>,

    /// Verification time in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_time: Option<f64>,

    /// Encapsulation time in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encaps_time: Option<f64>,

    /// Decapsulation time in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decaps_time: Option<f64>,

    /// Peak heap memory in kilobytes
    pub peak_memory: f64,

    /// Peak stack usage in kilobytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_usage: Option<f64>,

    /// Public key size in bytes
    pub public_key_size: u64,

    /// Secret key size in bytes
    pub secret_key_size: u64,

    /// Signature size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_size: Option<u64>,

    /// Ciphertext size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphertext_size: Option<u64>,
}

impl BenchmarkMetrics {
    /// Check submission-time constraints
    pub fn validate(&self) -> Result<()> {
        if !(self.key_gen_time > 0.0) {
            return Err(BenchError::InvalidInput(
                "keyGenTime must be a positive number".into(),
            ));
        }
        if !(self.peak_memory > 0.0) {
            return Err(BenchError::InvalidInput(
                "peakMemory must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

/// Hardware and toolchain descriptor of a benchmark run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub cpu_model: String,
    pub cpu_cores: u32,
    pub ram_mb: u64,
    pub os_version: String,
    pub compiler_version: String,
}

/// One immutable measurement run against an algorithm
///
/// Append-only: never mutated or deleted once recorded.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub id: BenchmarkId,
    pub algorithm_id: AlgorithmId,
    pub metrics: BenchmarkMetrics,
    pub environment: EnvironmentInfo,
    /// Reproducibility fingerprint of the run
    pub run_hash: RunHash,
    /// Optional external anchor reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Derived ranking snapshot, one per algorithm
///
/// Fully recomputed and overwritten every time a new benchmark is ingested
/// for the algorithm; a materialized view over the benchmark set, never
/// independently authoritative.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub algorithm_id: AlgorithmId,
    pub algorithm_name: String,
    pub category: Category,

    /// 0-100, normalized key generation speed within the category
    pub speed_score: f64,
    /// 0-100, normalized peak memory within the category
    pub memory_score: f64,
    /// 0-100, fixed placeholder dimension
    pub size_score: f64,
    /// Weighted composite, 0-100
    pub overall_score: f64,

    pub best_key_gen_time: f64,
    pub best_sign_time: Option<f64>,
    pub best_verify_time: Option<f64>,
    pub best_encaps_time: Option<f64>,
    pub best_decaps_time: Option<f64>,
    pub lowest_memory: f64,

    /// Total benchmark rows for the algorithm at computation time
    pub run_count: u64,
    pub last_updated: DateTime<Utc>,
}

/// Algorithm submission payload
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAlgorithm {
    pub name: String,
    pub version: String,
    pub category: Category,
    pub description: String,
    pub source_code: String,
    pub language: String,
    pub researcher_name: String,
    pub researcher_email: String,
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl SubmitAlgorithm {
    /// Check submission-time constraints
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("version", &self.version),
            ("description", &self.description),
            ("sourceCode", &self.source_code),
            ("language", &self.language),
            ("researcherName", &self.researcher_name),
            ("researcherEmail", &self.researcher_email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BenchError::InvalidInput(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

/// Benchmark ingestion payload
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSubmission {
    pub algorithm_id: AlgorithmId,
    pub metrics: BenchmarkMetrics,
    pub environment: EnvironmentInfo,
}
