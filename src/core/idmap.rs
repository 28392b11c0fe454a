//! Natural-key to surrogate-id mapping
//!
//! One `IdMap` exists per parent entity type (stream, course, subtopic,
//! concept) for the duration of a run. Each migration pass records the
//! surrogate id MongoDB assigned to every document it writes; dependent
//! passes resolve parent references through the map. The maps are owned
//! by the runner and passed by reference into passes, never global state.
//!
//! Keys are the string rendering of the source primary key, so integer
//! and character keys share one representation. Nothing persists between
//! runs.

use mongodb::bson::Bson;
use std::collections::HashMap;

/// Run-scoped mapping from natural key to target surrogate id
#[derive(Debug, Default)]
pub struct IdMap {
    entity: &'static str,
    inner: HashMap<String, Bson>,
}

impl IdMap {
    /// Creates an empty map for the named entity type
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            inner: HashMap::new(),
        }
    }

    /// Records the surrogate id assigned for a natural key
    ///
    /// A repeated natural key overwrites the earlier association; source
    /// primary keys are unique so this does not happen in practice.
    pub fn record(&mut self, natural_key: impl Into<String>, surrogate_id: Bson) {
        self.inner.insert(natural_key.into(), surrogate_id);
    }

    /// Looks up the surrogate id for a natural key
    pub fn resolve(&self, natural_key: &str) -> Option<&Bson> {
        self.inner.get(natural_key)
    }

    /// The entity type this map covers
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Number of recorded associations
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no associations have been recorded
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
