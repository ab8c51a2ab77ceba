//! Priority scoring and batch selection
//!
//! Scoring bands (additive):
//! - +100 struggling (mastery < 60)
//! - +80 never attempted
//! - +40 overdue > 7 days, +20 overdue 1-7 days
//! - +20 actively regressing (incorrect streak)
//! - +15 introduced within the last 7 days
//!
//! Ordering is deterministic across bands; randomization only ever
//! reorders exact ties, and only when a seed is configured.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::review::{PoolEntry, ReviewState};

/// Mastery level below which an item counts as struggling
const STRUGGLING_THRESHOLD: u8 = 60;

/// Days after first exposure during which an item counts as fresh
const RECENCY_WINDOW_DAYS: i64 = 7;

// ============================================================================
// SESSION CONFIGURATION
// ============================================================================

/// How a session treats due dates and new items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Only items whose due date has passed; no new items
    DueOnly,
    /// The entire pool, unfiltered and in pool order
    ReviewAll,
    /// Due items first, new items admitted under the cap
    PracticeMixed,
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionMode::DueOnly => write!(f, "due_only"),
            SessionMode::ReviewAll => write!(f, "review_all"),
            SessionMode::PracticeMixed => write!(f, "practice_mixed"),
        }
    }
}

/// Caller-supplied session parameters; not persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum items per batch
    pub target_batch_size: usize,
    /// Maximum never-reviewed items admitted per batch
    pub new_item_cap: usize,
    /// Due-date handling
    pub mode: SessionMode,
}

impl SessionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.target_batch_size == 0 {
            return Err(SchedulerError::InvalidConfig(
                "targetBatchSize must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SELECTION OUTCOME
// ============================================================================

/// Result of a selection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOutcome {
    /// Chosen item ids, most urgent first
    pub item_ids: Vec<String>,
    /// How many came from the due set
    pub due_selected: usize,
    /// How many never-reviewed items were admitted
    pub new_admitted: usize,
}

impl SelectionOutcome {
    /// Whether nothing was selected ("nothing to review" is a normal outcome)
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}

// ============================================================================
// PRIORITY SCORE
// ============================================================================

/// Scalar urgency for one due item at `now`
pub fn priority_score(state: &ReviewState, now: DateTime<Utc>) -> u32 {
    let mut score = 0;
    if state.mastery_level < STRUGGLING_THRESHOLD {
        score += 100;
    }
    if state.repetitions == 0 {
        score += 80;
    }
    let overdue = state.overdue_days(now);
    if overdue > 7 {
        score += 40;
    } else if overdue >= 1 {
        score += 20;
    }
    if state.consecutive_incorrect >= 1 {
        score += 20;
    }
    if now - state.first_seen_at <= Duration::days(RECENCY_WINDOW_DAYS) {
        score += 15;
    }
    score
}

// ============================================================================
// PRIORITY SELECTOR
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    index: usize,
    item_id: &'a str,
    priority: u32,
    overdue_days: i64,
    is_new: bool,
}

/// Ranks a pool and picks the batch to present
///
/// Deterministic for a fixed pool, config, time, and seed. Without a
/// seed the tie-group shuffle is disabled and ordering falls back to
/// insertion order, which keeps unseeded selection fully reproducible.
#[derive(Debug, Clone, Default)]
pub struct PrioritySelector {
    seed: Option<u64>,
}

impl PrioritySelector {
    /// Selector without tie-group randomization
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Selector with a seeded tie-group shuffle
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Select up to `target_batch_size` item ids from the pool
    pub fn select(
        &self,
        pool: &[PoolEntry],
        config: &SessionConfig,
        now: DateTime<Utc>,
    ) -> Result<SelectionOutcome> {
        config.validate()?;

        // Exhaustive review sessions bypass scoring entirely
        if config.mode == SessionMode::ReviewAll {
            let item_ids: Vec<String> =
                pool.iter().map(|e| e.item.item_id.clone()).collect();
            let due_selected = item_ids.len();
            return Ok(SelectionOutcome {
                item_ids,
                due_selected,
                new_admitted: 0,
            });
        }

        let admit_new = config.mode == SessionMode::PracticeMixed;
        let mut due: Vec<Candidate<'_>> = Vec::new();
        let mut backfill: Vec<Candidate<'_>> = Vec::new();

        for (index, entry) in pool.iter().enumerate() {
            let state = &entry.state;
            let is_new = state.next_review_at.is_none();
            let candidate = Candidate {
                index,
                item_id: &entry.item.item_id,
                priority: priority_score(state, now),
                overdue_days: state.overdue_days(now),
                is_new,
            };
            let scheduled_due = state.next_review_at.map(|t| t <= now).unwrap_or(false);
            if scheduled_due || (is_new && admit_new) {
                due.push(candidate);
            } else if admit_new {
                backfill.push(candidate);
            }
        }

        // Descending priority, longer overdue first, insertion order last
        due.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(b.overdue_days.cmp(&a.overdue_days))
                .then(a.index.cmp(&b.index))
        });

        if due.len() > config.target_batch_size {
            if let Some(seed) = self.seed {
                shuffle_tie_groups(&mut due, seed);
            }
        }

        let mut item_ids = Vec::new();
        let mut new_admitted = 0;
        for candidate in &due {
            if item_ids.len() >= config.target_batch_size {
                break;
            }
            if candidate.is_new {
                if new_admitted >= config.new_item_cap {
                    continue;
                }
                new_admitted += 1;
            }
            item_ids.push(candidate.item_id.to_string());
        }
        let due_selected = item_ids.len();

        // Backfill in pool order, never randomly, so sessions stay testable
        if item_ids.len() < config.target_batch_size && admit_new {
            let mut backfill_budget = config.new_item_cap.saturating_sub(new_admitted);
            for candidate in &backfill {
                if item_ids.len() >= config.target_batch_size || backfill_budget == 0 {
                    break;
                }
                item_ids.push(candidate.item_id.to_string());
                backfill_budget -= 1;
                if candidate.is_new {
                    new_admitted += 1;
                }
            }
        }

        tracing::debug!(
            mode = %config.mode,
            selected = item_ids.len(),
            due = due_selected,
            new = new_admitted,
            pool = pool.len(),
            "session batch selected"
        );

        Ok(SelectionOutcome {
            item_ids,
            due_selected,
            new_admitted,
        })
    }
}

/// Shuffle runs of exact ties (same priority and overdue duration)
///
/// Randomization never crosses a band boundary, so ordering between
/// different priorities stays deterministic.
fn shuffle_tie_groups(candidates: &mut [Candidate<'_>], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut start = 0;
    while start < candidates.len() {
        let key = (candidates[start].priority, candidates[start].overdue_days);
        let mut end = start + 1;
        while end < candidates.len()
            && (candidates[end].priority, candidates[end].overdue_days) == key
        {
            end += 1;
        }
        if end - start > 1 {
            candidates[start..end].shuffle(&mut rng);
        }
        start = end;
    }
}
