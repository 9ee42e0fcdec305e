//! Algorithm persistence with unique (name, version) enforcement

use parking_lot::RwLock;
use pqbench_core::{Algorithm, AlgorithmId, BenchError, Result};
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    records: HashMap<AlgorithmId, Algorithm>,
    by_name_version: HashMap<(String, String), AlgorithmId>,
}

/// Algorithm store, keyed by id with a unique (name, version) index
///
/// Identity fields are immutable after insertion; there is no update path.
#[derive(Default)]
pub struct AlgorithmStore {
    inner: RwLock<Inner>,
}

impl AlgorithmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new algorithm; resubmission under the same (name, version)
    /// is rejected
    pub fn insert(&self, algorithm: Algorithm) -> Result<()> {
        let key = (algorithm.name.clone(), algorithm.version.clone());
        let mut inner = self.inner.write();
        if inner.by_name_version.contains_key(&key) {
            return Err(BenchError::AlgorithmExists {
                name: algorithm.name,
                version: algorithm.version,
            });
        }
        inner.by_name_version.insert(key, algorithm.id);
        inner.records.insert(algorithm.id, algorithm);
        Ok(())
    }

    pub fn get(&self, id: &AlgorithmId) -> Option<Algorithm> {
        self.inner.read().records.get(id).cloned()
    }

    pub fn find_by_name_version(&self, name: &str, version: &str) -> Option<Algorithm> {
        let inner = self.inner.read();
        let id = inner
            .by_name_version
            .get(&(name.to_string(), version.to_string()))?;
        inner.records.get(id).cloned()
    }

    /// Toggle the reviewer-controlled verified flag
    ///
    /// The only mutable field; identity and submission content never
    /// change after insert.
    pub fn set_verified(&self, id: &AlgorithmId, verified: bool) -> bool {
        let mut inner = self.inner.write();
        match inner.records.get_mut(id) {
            Some(algorithm) => {
                algorithm.verified = verified;
                algorithm.updated_at = chrono::Utc::now();
                true
            }
            None => false,
        }
    }

    /// All algorithms, unordered; callers sort for display
    pub fn all(&self) -> Vec<Algorithm> {
        self.inner.read().records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pqbench_core::{Category, ResearcherId};

    fn algorithm(name: &str, version: &str) -> Algorithm {
        Algorithm {
            id: AlgorithmId::generate(),
            name: name.into(),
            version: version.into(),
            category: Category::Lattice,
            description: "Test scheme".into(),
            source_code: "int keygen(void);".into(),
            language: "C".into(),
            researcher_id: ResearcherId::generate(),
            verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let store = AlgorithmStore::new();
        let algo = algorithm("CRYSTALS-Dilithium", "3.1");
        let id = algo.id;
        store.insert(algo).unwrap();

        assert_eq!(store.get(&id).unwrap().name, "CRYSTALS-Dilithium");
        assert!(store
            .find_by_name_version("CRYSTALS-Dilithium", "3.1")
            .is_some());
        assert!(store
            .find_by_name_version("CRYSTALS-Dilithium", "2.0")
            .is_none());
    }

    #[test]
    fn test_duplicate_name_version_rejected() {
        let store = AlgorithmStore::new();
        store.insert(algorithm("Falcon", "512")).unwrap();

        let err = store.insert(algorithm("Falcon", "512")).unwrap_err();
        assert!(matches!(err, BenchError::AlgorithmExists { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_verified() {
        let store = AlgorithmStore::new();
        let algo = algorithm("SPHINCS+", "SHA256-256f");
        let id = algo.id;
        store.insert(algo).unwrap();

        assert!(!store.get(&id).unwrap().verified);
        assert!(store.set_verified(&id, true));
        assert!(store.get(&id).unwrap().verified);
        assert!(!store.set_verified(&AlgorithmId::generate(), true));
    }

    #[test]
    fn test_same_name_different_version_allowed() {
        let store = AlgorithmStore::new();
        store.insert(algorithm("Falcon", "512")).unwrap();
        store.insert(algorithm("Falcon", "1024")).unwrap();
        assert_eq!(store.len(), 2);
    }
}
