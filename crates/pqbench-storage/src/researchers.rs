//! Researcher persistence with unique email enforcement

use parking_lot::RwLock;
use pqbench_core::{BenchError, Researcher, ResearcherId, Result};
use std::collections::HashMap;

#[derive(Default)]
struct Inner {
    records: HashMap<ResearcherId, Researcher>,
    by_email: HashMap<String, ResearcherId>,
}

/// Researcher store, keyed by id with a unique email index
#[derive(Default)]
pub struct ResearcherStore {
    inner: RwLock<Inner>,
}

impl ResearcherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new researcher; the email must not be registered yet
    pub fn insert(&self, researcher: Researcher) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.by_email.contains_key(&researcher.email) {
            return Err(BenchError::EmailTaken(researcher.email));
        }
        inner
            .by_email
            .insert(researcher.email.clone(), researcher.id);
        inner.records.insert(researcher.id, researcher);
        Ok(())
    }

    pub fn get(&self, id: &ResearcherId) -> Option<Researcher> {
        self.inner.read().records.get(id).cloned()
    }

    pub fn find_by_email(&self, email: &str) -> Option<Researcher> {
        let inner = self.inner.read();
        let id = inner.by_email.get(email)?;
        inner.records.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
