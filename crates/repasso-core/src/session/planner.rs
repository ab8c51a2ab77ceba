//! Session planner - get next batch, record outcome
//!
//! Orchestrates the selector across a pool and runs graded attempts
//! through the updater as one logical unit per call. Performs no writes:
//! the new state is returned for the caller to persist atomically.

use chrono::{DateTime, Utc};

use crate::error::{Result, SchedulerError};
use crate::grading::{Grade, OutcomeGrader, RawResponse};
use crate::review::{PoolEntry, PoolStats, ReviewState, ReviewableItem};
use crate::scheduler::ScheduleUpdater;
use crate::selection::{PrioritySelector, SessionConfig};

use super::store::{ContentSource, ReviewStateReader};

// ============================================================================
// PREVIEW
// ============================================================================

/// Post-update states for each possible grade, without committing
///
/// UIs use this to label rating buttons ("Good -> 6d, Easy -> 13d").
#[derive(Debug, Clone)]
pub struct PreviewOutcomes {
    /// State after grading `again`
    pub again: ReviewState,
    /// State after grading `hard`
    pub hard: ReviewState,
    /// State after grading `good`
    pub good: ReviewState,
    /// State after grading `easy`
    pub easy: ReviewState,
}

// ============================================================================
// SESSION PLANNER
// ============================================================================

/// Entry point for batch selection and outcome recording
///
/// Stateless between calls; all mutable state lives with the persistence
/// collaborator. Calls for different items or learners may run in
/// parallel, but writes for one (learner, item) key must be serialized
/// by the caller.
#[derive(Debug, Clone)]
pub struct SessionPlanner<R> {
    reader: R,
    grader: OutcomeGrader,
    updater: ScheduleUpdater,
    selector: PrioritySelector,
}

impl<R: ReviewStateReader> SessionPlanner<R> {
    /// Planner with default grading and scheduling parameters
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            grader: OutcomeGrader::new(),
            updater: ScheduleUpdater::new(),
            selector: PrioritySelector::new(),
        }
    }

    /// Planner with a seeded tie-group shuffle for batch variety
    pub fn with_seed(reader: R, seed: u64) -> Self {
        Self {
            selector: PrioritySelector::with_seed(seed),
            ..Self::new(reader)
        }
    }

    /// Replace the schedule updater (custom SM-2 parameters)
    pub fn with_updater(mut self, updater: ScheduleUpdater) -> Self {
        self.updater = updater;
        self
    }

    /// Select the next batch of items for a learner
    ///
    /// Loads the current state per pool item (missing states count as
    /// brand-new), ranks by priority, and returns the chosen items in
    /// presentation order. An empty batch is a normal outcome.
    pub fn get_next_batch(
        &self,
        learner_id: &str,
        pool: &[ReviewableItem],
        config: &SessionConfig,
        now: DateTime<Utc>,
    ) -> Result<Vec<ReviewableItem>> {
        let entries = self.load_entries(learner_id, pool, now)?;
        let outcome = self.selector.select(&entries, config, now)?;

        tracing::debug!(
            learner = learner_id,
            batch = outcome.item_ids.len(),
            "next batch planned"
        );

        let batch = outcome
            .item_ids
            .iter()
            .filter_map(|id| pool.iter().find(|item| &item.item_id == id))
            .cloned()
            .collect();
        Ok(batch)
    }

    /// Grade a raw response and compute the item's next review state
    ///
    /// Grading and scheduling happen as one non-interleaved unit; the
    /// returned state is for the caller to persist atomically. On any
    /// error the current persisted state is untouched.
    pub fn record_outcome(
        &self,
        learner_id: &str,
        pool: &[ReviewableItem],
        item_id: &str,
        response: &RawResponse,
        now: DateTime<Utc>,
    ) -> Result<ReviewState> {
        if !pool.iter().any(|item| item.item_id == item_id) {
            return Err(SchedulerError::ItemNotFound(item_id.to_string()));
        }

        let grade = self.grader.grade(response)?;
        let current = self
            .reader
            .load(learner_id, item_id)?
            .unwrap_or_else(|| ReviewState::new_item(now));
        let next = self.updater.apply(&current, grade, now);

        tracing::debug!(
            learner = learner_id,
            item = item_id,
            grade = %grade,
            interval = next.interval_days,
            mastery = next.mastery_level,
            "outcome recorded"
        );
        Ok(next)
    }

    /// Record a free-text outcome, resolving accepted answers through the
    /// content collaborator
    pub fn record_text_outcome<C: ContentSource>(
        &self,
        content: &C,
        learner_id: &str,
        pool: &[ReviewableItem],
        item_id: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<ReviewState> {
        let item = pool
            .iter()
            .find(|item| item.item_id == item_id)
            .ok_or_else(|| SchedulerError::ItemNotFound(item_id.to_string()))?;
        let accepted = content.accepted_answers(&item.content_ref)?;
        let response = RawResponse::Text {
            submitted: submitted.to_string(),
            accepted,
        };
        self.record_outcome(learner_id, pool, item_id, &response, now)
    }

    /// Post-update states for all four grades, without committing
    pub fn preview_state(&self, state: &ReviewState, now: DateTime<Utc>) -> PreviewOutcomes {
        PreviewOutcomes {
            again: self.updater.apply(state, Grade::Again, now),
            hard: self.updater.apply(state, Grade::Hard, now),
            good: self.updater.apply(state, Grade::Good, now),
            easy: self.updater.apply(state, Grade::Easy, now),
        }
    }

    /// Aggregate statistics over a learner's pool
    pub fn pool_stats(
        &self,
        learner_id: &str,
        pool: &[ReviewableItem],
        now: DateTime<Utc>,
    ) -> Result<PoolStats> {
        let entries = self.load_entries(learner_id, pool, now)?;
        let total = entries.len();
        let mut stats = PoolStats {
            total,
            ..PoolStats::default()
        };
        let mut mastery_sum = 0u64;
        for entry in &entries {
            let state = &entry.state;
            if state.is_new() {
                stats.new_items += 1;
            } else if state.is_due(now) {
                stats.due += 1;
            }
            if state.is_mastered() {
                stats.mastered += 1;
            }
            mastery_sum += u64::from(state.mastery_level);
        }
        if total > 0 {
            stats.average_mastery = mastery_sum as f64 / total as f64;
        }
        Ok(stats)
    }

    fn load_entries(
        &self,
        learner_id: &str,
        pool: &[ReviewableItem],
        now: DateTime<Utc>,
    ) -> Result<Vec<PoolEntry>> {
        pool.iter()
            .map(|item| {
                let state = self
                    .reader
                    .load(learner_id, &item.item_id)?
                    .unwrap_or_else(|| ReviewState::new_item(now));
                Ok(PoolEntry::new(item.clone(), state))
            })
            .collect()
    }
}
