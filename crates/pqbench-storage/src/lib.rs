//! # PQBench Storage
//!
//! In-process record stores guarded by `parking_lot` locks.
//!
//! ## Store Layout
//!
//! - [`ResearcherStore`] - submitter identities, unique email index
//! - [`AlgorithmStore`] - submitted implementations, unique (name, version)
//! - [`BenchmarkStore`] - append-only measurement runs, per-algorithm index
//! - [`LeaderboardStore`] - one overwritable ranking row per algorithm
//!
//! Individual store operations are serialized by their lock; the
//! benchmark-insert / leaderboard-upsert pair during ingest is two separate
//! writes by design, and a failure between them is reconciled by the next
//! ingest for the same algorithm.

pub mod algorithms;
pub mod benchmarks;
pub mod leaderboard;
pub mod researchers;

pub use algorithms::AlgorithmStore;
pub use benchmarks::BenchmarkStore;
pub use leaderboard::LeaderboardStore;
pub use researchers::ResearcherStore;

/// All stores of one service instance
#[derive(Default)]
pub struct Database {
    pub researchers: ResearcherStore,
    pub algorithms: AlgorithmStore,
    pub benchmarks: BenchmarkStore,
    pub leaderboard: LeaderboardStore,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }
}
