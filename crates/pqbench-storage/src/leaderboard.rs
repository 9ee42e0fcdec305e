//! Leaderboard snapshot storage
//!
//! Exactly zero or one entry exists per algorithm. Entries are replaced
//! wholesale on every recompute; the row id survives replacement.

use parking_lot::RwLock;
use pqbench_core::{AlgorithmId, Category, LeaderboardEntry};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Leaderboard entry store, keyed by algorithm id
#[derive(Default)]
pub struct LeaderboardStore {
    entries: RwLock<HashMap<AlgorithmId, LeaderboardEntry>>,
}

impl LeaderboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the entry for an algorithm
    ///
    /// Every derived field is overwritten with the freshly computed value;
    /// an existing row keeps its id.
    pub fn upsert(&self, mut entry: LeaderboardEntry) {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&entry.algorithm_id) {
            entry.id = existing.id;
        }
        entries.insert(entry.algorithm_id, entry);
    }

    pub fn get(&self, algorithm_id: &AlgorithmId) -> Option<LeaderboardEntry> {
        self.entries.read().get(algorithm_id).cloned()
    }

    /// Current entries sharing a category, unordered
    ///
    /// Read fresh on every normalization pass; stale sibling entries are
    /// part of the comparison population by design.
    pub fn in_category(&self, category: Category) -> Vec<LeaderboardEntry> {
        self.entries
            .read()
            .values()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// All entries sorted by overall score, best first
    pub fn ranked(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self.entries.read().values().cloned().collect();
        entries.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(Ordering::Equal)
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pqbench_core::EntryId;

    fn entry(category: Category, overall: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: EntryId::generate(),
            algorithm_id: AlgorithmId::generate(),
            algorithm_name: "Test".into(),
            category,
            speed_score: overall,
            memory_score: overall,
            size_score: 50.0,
            overall_score: overall,
            best_key_gen_time: 42.5,
            best_sign_time: None,
            best_verify_time: None,
            best_encaps_time: None,
            best_decaps_time: None,
            lowest_memory: 128.0,
            run_count: 1,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_one_entry_per_algorithm() {
        let store = LeaderboardStore::new();
        let mut first = entry(Category::Lattice, 50.0);
        let algorithm_id = first.algorithm_id;
        first.run_count = 1;
        store.upsert(first.clone());

        let mut second = entry(Category::Lattice, 72.0);
        second.algorithm_id = algorithm_id;
        second.run_count = 2;
        store.upsert(second);

        assert_eq!(store.len(), 1);
        let stored = store.get(&algorithm_id).unwrap();
        assert_eq!(stored.run_count, 2);
        assert_eq!(stored.overall_score, 72.0);
        // row id survives replacement
        assert_eq!(stored.id, first.id);
    }

    #[test]
    fn test_in_category_filters() {
        let store = LeaderboardStore::new();
        store.upsert(entry(Category::Lattice, 60.0));
        store.upsert(entry(Category::Lattice, 40.0));
        store.upsert(entry(Category::HashBased, 80.0));

        assert_eq!(store.in_category(Category::Lattice).len(), 2);
        assert_eq!(store.in_category(Category::HashBased).len(), 1);
        assert_eq!(store.in_category(Category::Isogeny).len(), 0);
    }

    #[test]
    fn test_ranked_sorts_descending() {
        let store = LeaderboardStore::new();
        store.upsert(entry(Category::Lattice, 40.0));
        store.upsert(entry(Category::CodeBased, 90.0));
        store.upsert(entry(Category::HashBased, 65.0));

        let scores: Vec<f64> = store.ranked().iter().map(|e| e.overall_score).collect();
        assert_eq!(scores, vec![90.0, 65.0, 40.0]);
    }
}
