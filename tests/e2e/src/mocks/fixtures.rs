//! Test data factory and in-memory collaborators
//!
//! `MemoryStore` stands in for the persistence collaborator (atomic per
//! key, read-after-write consistent by construction); `StaticContent`
//! stands in for the content service.

use std::collections::HashMap;

use repasso_core::{
    ContentSource, Result, ReviewState, ReviewStateReader, ReviewStateWriter, ReviewableItem,
};

/// In-memory review state store keyed by (learner, item)
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: HashMap<(String, String), ReviewState>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a state directly, bypassing the planner
    pub fn seed(&mut self, learner_id: &str, item_id: &str, state: ReviewState) {
        self.states
            .insert((learner_id.to_string(), item_id.to_string()), state);
    }

    /// Number of persisted states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been persisted
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl ReviewStateReader for MemoryStore {
    fn load(&self, learner_id: &str, item_id: &str) -> Result<Option<ReviewState>> {
        Ok(self
            .states
            .get(&(learner_id.to_string(), item_id.to_string()))
            .cloned())
    }
}

impl ReviewStateWriter for MemoryStore {
    fn save(&mut self, learner_id: &str, item_id: &str, state: &ReviewState) -> Result<()> {
        self.states.insert(
            (learner_id.to_string(), item_id.to_string()),
            state.clone(),
        );
        Ok(())
    }
}

/// Content collaborator backed by a fixed answer map
#[derive(Debug, Default)]
pub struct StaticContent {
    answers: HashMap<String, Vec<String>>,
}

impl StaticContent {
    /// Build from (content_ref, accepted answers) pairs
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        let answers = entries
            .iter()
            .map(|(content_ref, accepted)| {
                (
                    content_ref.to_string(),
                    accepted.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { answers }
    }
}

impl ContentSource for StaticContent {
    fn accepted_answers(&self, content_ref: &str) -> Result<Vec<String>> {
        Ok(self.answers.get(content_ref).cloned().unwrap_or_default())
    }
}

/// Pool of `n` vocabulary items with generated ids
pub fn vocab_pool(n: usize) -> Vec<ReviewableItem> {
    (0..n)
        .map(|i| {
            ReviewableItem::new(
                uuid::Uuid::new_v4().to_string(),
                format!("vocab:word-{i}"),
            )
        })
        .collect()
}
