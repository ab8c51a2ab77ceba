//! Boundary contracts with external collaborators
//!
//! The core owns no storage: review states live in the caller's store,
//! content payloads in the caller's content service. Collaborator errors
//! pass through the core unchanged; retry policy belongs to the caller.

use crate::error::Result;
use crate::review::ReviewState;

/// Read collaborator for persisted review states
///
/// Implementations must return either a well-formed state or an explicit
/// absence, never a partially-populated record.
pub trait ReviewStateReader {
    /// Load the state for one (learner, item) pair, if it exists
    fn load(&self, learner_id: &str, item_id: &str) -> Result<Option<ReviewState>>;
}

/// Write collaborator for persisted review states
///
/// Writes must be atomic per (learner, item) and visible to the next
/// `load` within the same session (read-after-write consistency).
/// Concurrent writes for the same key must be serialized by the caller;
/// a lost update silently corrupts the repetition/interval sequence.
pub trait ReviewStateWriter {
    /// Persist the state for one (learner, item) pair
    fn save(&mut self, learner_id: &str, item_id: &str, state: &ReviewState) -> Result<()>;
}

/// Content collaborator supplying accepted answers for grading
///
/// The core treats content as opaque except for the accepted-answer
/// strings free-text grading needs.
pub trait ContentSource {
    /// Accepted answer strings for an opaque content reference
    fn accepted_answers(&self, content_ref: &str) -> Result<Vec<String>>;
}

impl<T: ReviewStateReader + ?Sized> ReviewStateReader for &T {
    fn load(&self, learner_id: &str, item_id: &str) -> Result<Option<ReviewState>> {
        (**self).load(learner_id, item_id)
    }
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn accepted_answers(&self, content_ref: &str) -> Result<Vec<String>> {
        (**self).accepted_answers(content_ref)
    }
}
