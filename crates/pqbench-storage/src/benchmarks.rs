//! Append-only benchmark run storage
//!
//! Runs are never mutated or deleted; the per-algorithm index preserves
//! insertion order.

use parking_lot::RwLock;
use pqbench_core::{AlgorithmId, Benchmark, BenchmarkId};
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    records: HashMap<BenchmarkId, Benchmark>,
    by_algorithm: HashMap<AlgorithmId, Vec<BenchmarkId>>,
}

/// Benchmark run store
#[derive(Default)]
pub struct BenchmarkStore {
    inner: RwLock<Inner>,
}

impl BenchmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run
    pub fn append(&self, benchmark: Benchmark) {
        let mut inner = self.inner.write();
        inner
            .by_algorithm
            .entry(benchmark.algorithm_id)
            .or_default()
            .push(benchmark.id);
        inner.records.insert(benchmark.id, benchmark);
    }

    pub fn get(&self, id: &BenchmarkId) -> Option<Benchmark> {
        self.inner.read().records.get(id).cloned()
    }

    /// All runs of one algorithm, oldest first
    pub fn for_algorithm(&self, algorithm_id: &AlgorithmId) -> Vec<Benchmark> {
        let inner = self.inner.read();
        inner
            .by_algorithm
            .get(algorithm_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.records.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn count_for(&self, algorithm_id: &AlgorithmId) -> usize {
        self.inner
            .read()
            .by_algorithm
            .get(algorithm_id)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
