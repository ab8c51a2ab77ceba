//! # Repasso Core
//!
//! Spaced-repetition scheduling engine for language-learning content:
//! flashcards, grammar sentences, and corrected writing sentences all
//! schedule through the same four components.
//!
//! - **OutcomeGrader**: normalizes free-text answers, self-ratings, and
//!   external checker verdicts onto a 4-point grade scale
//! - **ScheduleUpdater**: SM-2 family transition (ease factor, interval
//!   ramp, streaks, lapses, derived mastery level)
//! - **PrioritySelector**: due-filtering and priority-banded batch
//!   selection with a seeded tie-group shuffle for variety
//! - **SessionPlanner**: the single entry point callers use - plan the
//!   next batch, record a graded outcome
//!
//! The core is pure and stateless between calls: persistence, content,
//! and the clock are all injected. "Now" is always a parameter, so tests
//! drive deterministic time.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use repasso_core::{
//!     RawResponse, ReviewState, ReviewStateReader, ReviewableItem, Result,
//!     SessionConfig, SessionMode, SessionPlanner,
//! };
//!
//! struct EmptyStore;
//!
//! impl ReviewStateReader for EmptyStore {
//!     fn load(&self, _learner: &str, _item: &str) -> Result<Option<ReviewState>> {
//!         Ok(None)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let planner = SessionPlanner::new(EmptyStore);
//! let pool = vec![ReviewableItem::new("card-1", "vocab:perro")];
//! let config = SessionConfig {
//!     target_batch_size: 10,
//!     new_item_cap: 5,
//!     mode: SessionMode::PracticeMixed,
//! };
//! let now = Utc::now();
//!
//! let batch = planner.get_next_batch("learner-1", &pool, &config, now)?;
//! assert_eq!(batch.len(), 1);
//!
//! // Grade an attempt; the returned state is yours to persist
//! let state = planner.record_outcome(
//!     "learner-1",
//!     &pool,
//!     "card-1",
//!     &RawResponse::Checked(true),
//!     now,
//! )?;
//! assert_eq!(state.interval_days, 1);
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod error;
pub mod grading;
pub mod review;
pub mod scheduler;
pub mod selection;
pub mod session;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Errors
pub use error::{Result, SchedulerError};

// Review data model
pub use review::{
    LearningStage, PoolEntry, PoolStats, ReviewState, ReviewableItem, DEFAULT_EASE_FACTOR,
    MASTERED_THRESHOLD, MIN_EASE_FACTOR,
};

// Grading
pub use grading::{
    normalize_answer, AnswerChecker, ExactMatchChecker, Grade, OutcomeGrader, RawResponse,
};

// SM-2 scheduling
pub use scheduler::{mastery_level, ScheduleUpdater, Sm2Config};

// Selection
pub use selection::{
    priority_score, PrioritySelector, SelectionOutcome, SessionConfig, SessionMode,
};

// Session planning and collaborator boundaries
pub use session::{
    ContentSource, PreviewOutcomes, ReviewStateReader, ReviewStateWriter, SessionPlanner,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Grade, OutcomeGrader, PoolEntry, PoolStats, PrioritySelector, RawResponse, Result,
        ReviewState, ReviewStateReader, ReviewStateWriter, ReviewableItem, ScheduleUpdater,
        SchedulerError, SelectionOutcome, SessionConfig, SessionMode, SessionPlanner, Sm2Config,
    };
}
