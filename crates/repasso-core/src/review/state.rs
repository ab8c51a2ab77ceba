//! Review state - the durable per-(learner, item) scheduling record
//!
//! Tracks the SM-2 triple (repetitions, ease factor, interval), the due
//! date, correctness counters, streaks, lapse history and the derived
//! mastery level. Pure data; all mutation happens through the schedule
//! updater.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default ease factor for new items
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Floor below which the ease factor never drops
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Mastery level at or above which an item counts as mastered
pub const MASTERED_THRESHOLD: u8 = 80;

// ============================================================================
// LEARNING STAGE
// ============================================================================

/// Conceptual stage of an item in the scheduling state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStage {
    /// Never reviewed
    New,
    /// Repetitions 1-2, or relearning after an early failure
    Learning,
    /// Repetitions >= 3, stable review cadence
    Review,
    /// Re-entered after failing from a learned state
    Lapsed,
}

impl std::fmt::Display for LearningStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningStage::New => write!(f, "new"),
            LearningStage::Learning => write!(f, "learning"),
            LearningStage::Review => write!(f, "review"),
            LearningStage::Lapsed => write!(f, "lapsed"),
        }
    }
}

// ============================================================================
// REVIEW STATE
// ============================================================================

/// Durable review record for one (learner, item) pair
///
/// Created lazily on first exposure, mutated exclusively by the schedule
/// updater after a graded attempt. `mastery_level` is always recomputed
/// from the counters, never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Reviews since the last failure
    pub repetitions: u32,
    /// Multiplicative strength factor (floor 1.3)
    pub ease_factor: f64,
    /// Days until next due date; 0 means due immediately / new
    pub interval_days: u32,
    /// Next scheduled review; `None` means never scheduled
    pub next_review_at: Option<DateTime<Utc>>,
    /// Total correct attempts
    pub correct_count: u32,
    /// Total incorrect attempts
    pub incorrect_count: u32,
    /// Current correct streak
    pub consecutive_correct: u32,
    /// Current incorrect streak
    pub consecutive_incorrect: u32,
    /// Failures from a learned state (repetitions >= 3)
    pub lapse_count: u32,
    /// When the last lapse was recorded
    pub last_lapse_at: Option<DateTime<Utc>>,
    /// Derived 0-100 summary of long-run performance
    pub mastery_level: u8,
    /// First exposure of the item to this learner
    pub first_seen_at: DateTime<Utc>,
    /// Last graded attempt
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl ReviewState {
    /// Fresh state for an item a learner sees for the first time
    pub fn new_item(now: DateTime<Utc>) -> Self {
        Self {
            repetitions: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 0,
            next_review_at: None,
            correct_count: 0,
            incorrect_count: 0,
            consecutive_correct: 0,
            consecutive_incorrect: 0,
            lapse_count: 0,
            last_lapse_at: None,
            mastery_level: 0,
            first_seen_at: now,
            last_reviewed_at: None,
        }
    }

    /// Whether this item has never been reviewed
    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    /// Whether the item is due at `now`
    ///
    /// Never-scheduled items are due in modes that admit new items; that
    /// decision belongs to the selector, so this only answers for
    /// scheduled items and reports `true` for unscheduled ones.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at.map(|t| t <= now).unwrap_or(true)
    }

    /// Days past the due date at `now`; 0 when not yet due or unscheduled
    pub fn overdue_days(&self, now: DateTime<Utc>) -> i64 {
        self.next_review_at
            .map(|due| (now - due).num_days().max(0))
            .unwrap_or(0)
    }

    /// Total graded attempts
    pub fn attempts(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }

    /// Fraction of attempts answered correctly (0.0 for unattempted items)
    pub fn retention_ratio(&self) -> f64 {
        if self.attempts() == 0 {
            0.0
        } else {
            f64::from(self.correct_count) / f64::from(self.attempts())
        }
    }

    /// Whether the item counts as mastered
    pub fn is_mastered(&self) -> bool {
        self.mastery_level >= MASTERED_THRESHOLD
    }

    /// Whether the item sits in the post-lapse confirmation window
    ///
    /// A lapse stays "active" until two passes land after it; mastery is
    /// capped while the window is open.
    pub fn has_active_lapse(&self) -> bool {
        self.lapse_count > 0 && self.consecutive_correct < 2
    }

    /// Conceptual stage in the scheduling state machine
    pub fn learning_stage(&self) -> LearningStage {
        if self.repetitions >= 3 {
            LearningStage::Review
        } else if self.repetitions >= 1 {
            LearningStage::Learning
        } else if self.is_new() {
            LearningStage::New
        } else if self.lapse_count > 0 && self.consecutive_incorrect > 0 {
            LearningStage::Lapsed
        } else {
            LearningStage::Learning
        }
    }

    /// Check the reachable-state invariants; used by tests and debug builds
    ///
    /// - `interval_days == 0` implies `repetitions == 0`, and a zero
    ///   interval only occurs on never-reviewed states
    /// - ease factor never below the floor
    /// - streaks are never both non-zero
    pub fn debug_validate(&self) -> std::result::Result<(), String> {
        if self.interval_days == 0 && self.repetitions != 0 {
            return Err(format!(
                "interval 0 with repetitions {}",
                self.repetitions
            ));
        }
        if self.interval_days == 0 && !self.is_new() {
            return Err("interval 0 on a reviewed state".to_string());
        }
        if self.ease_factor < MIN_EASE_FACTOR - f64::EPSILON {
            return Err(format!("ease factor {} below floor", self.ease_factor));
        }
        if self.consecutive_correct > 0 && self.consecutive_incorrect > 0 {
            return Err("both streaks non-zero".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// POOL STATISTICS
// ============================================================================

/// Aggregate counts over a learner's pool
///
/// Lets callers render "N due today" without re-deriving per-item state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    /// Total items in the pool
    pub total: usize,
    /// Items due at the query time (scheduled items only)
    pub due: usize,
    /// Items never reviewed
    pub new_items: usize,
    /// Items at or above the mastered threshold
    pub mastered: usize,
    /// Mean mastery level across the pool (0.0 for an empty pool)
    pub average_mastery: f64,
}
