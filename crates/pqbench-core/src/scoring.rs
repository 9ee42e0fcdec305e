//! # Leaderboard Scoring
//!
//! Best-of-all-runs aggregation and category-relative normalization.
//!
//! ## Score Dimensions
//!
//! | Dimension | Weight | Source |
//! |-----------|--------|--------|
//! | Speed | 40% | best key generation time vs. category |
//! | Memory | 30% | lowest peak memory vs. category |
//! | Size | 30% | fixed placeholder (50) |
//!
//! All measured dimensions are lower-is-better, so normalization inverts:
//! the category's fastest run scores 100, the slowest scores 0. Scores are
//! relative to the category population at computation time; an algorithm's
//! score can move when any sibling in its category is benchmarked.

use crate::constants::*;
use crate::models::{Benchmark, BenchmarkMetrics};
use serde::{Deserialize, Serialize};

/// Fixed weights combining the three sub-scores
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub speed: f64,
    pub memory: f64,
    pub size: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            speed: SPEED_WEIGHT,
            memory: MEMORY_WEIGHT,
            size: SIZE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Verify weights sum to 1.0
    pub fn verify(&self) -> bool {
        let sum = self.speed + self.memory + self.size;
        (sum - 1.0).abs() < 0.001
    }

    /// Weighted composite of the three sub-scores
    ///
    /// No clamping beyond the inputs' own range: sub-scores in [0, 100]
    /// yield a composite in [0, 100].
    pub fn combine(&self, speed_score: f64, memory_score: f64, size_score: f64) -> f64 {
        speed_score * self.speed + memory_score * self.memory + size_score * self.size
    }
}

/// Best observed figures across all runs of one algorithm
///
/// Optional fields are `None` iff no run populated them; key generation
/// time and peak memory are mandatory on every run, so their minima are
/// always defined once the run set is non-empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestMetrics {
    pub best_key_gen_time: f64,
    pub best_sign_time: Option<f64>,
    pub best_verify_time: Option<f64>,
    pub best_encaps_time: Option<f64>,
    pub best_decaps_time: Option<f64>,
    pub lowest_memory: f64,
}

impl BestMetrics {
    /// Reduce a run set to its per-field minima
    ///
    /// Returns `None` for an empty run set; the caller skips the
    /// leaderboard update entirely in that case.
    pub fn aggregate(benchmarks: &[Benchmark]) -> Option<Self> {
        if benchmarks.is_empty() {
            return None;
        }

        Some(Self {
            best_key_gen_time: benchmarks
                .iter()
                .map(|b| b.metrics.key_gen_time)
                .fold(f64::INFINITY, f64::min),
            best_sign_time: optional_min(benchmarks, |m| m.sign_time),
            best_verify_time: optional_min(benchmarks, |m| m.verify_time),
            best_encaps_time: optional_min(benchmarks, |m| m.encaps_time),
            best_decaps_time: optional_min(benchmarks, |m| m.decaps_time),
            lowest_memory: benchmarks
                .iter()
                .map(|b| b.metrics.peak_memory)
                .fold(f64::INFINITY, f64::min),
        })
    }
}

fn optional_min(
    benchmarks: &[Benchmark],
    field: impl Fn(&BenchmarkMetrics) -> Option<f64>,
) -> Option<f64> {
    benchmarks
        .iter()
        .filter_map(|b| field(&b.metrics))
        .reduce(f64::min)
}

/// Normalize a raw lower-is-better value to 0-100 against category bounds
///
/// A degenerate population (`max == min`, including a single entry) scores
/// 100 for every value.
pub fn normalize_score(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return MAX_SCORE;
    }
    (((max - value) / (max - min)) * MAX_SCORE).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score a value against the category population's comparison values
///
/// The population is the corresponding best-of field of every current
/// leaderboard entry in the category, stale siblings included. An empty
/// population (first entry in the category) scores the neutral 50.
pub fn score_within(value: f64, population: &[f64]) -> f64 {
    if population.is_empty() {
        return NEUTRAL_SCORE;
    }
    let min = population.iter().copied().fold(f64::INFINITY, f64::min);
    let max = population.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    normalize_score(value, min, max)
}

/// Weighted composite score with the fixed default weights
pub fn overall_score(speed_score: f64, memory_score: f64, size_score: f64) -> f64 {
    ScoreWeights::default().combine(speed_score, memory_score, size_score)
}
