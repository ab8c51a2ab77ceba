//! Reviewable item - identity plus opaque content reference
//!
//! The scheduler treats content as immutable and opaque: a vocabulary
//! entry, a grammar sentence, or a corrected writing sentence all reduce
//! to an id and a reference the content collaborator can resolve.

use serde::{Deserialize, Serialize};

use super::ReviewState;

/// A schedulable piece of content
///
/// `item_id` is stable and never reused within a learner's pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewableItem {
    /// Unique identifier within a pool
    pub item_id: String,
    /// Opaque reference to the underlying content
    pub content_ref: String,
}

impl ReviewableItem {
    /// Create a new item handle
    pub fn new(item_id: impl Into<String>, content_ref: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            content_ref: content_ref.into(),
        }
    }
}

/// An item joined with its current review state
///
/// The unit the selector ranks. Built by the planner from the pool and
/// the read collaborator; missing states become fresh `NEW` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    /// The item handle
    pub item: ReviewableItem,
    /// Current review state for this learner
    pub state: ReviewState,
}

impl PoolEntry {
    /// Pair an item with its state
    pub fn new(item: ReviewableItem, state: ReviewState) -> Self {
        Self { item, state }
    }
}
