//! SM-2 schedule updater with configurable parameters
//!
//! Transition rules:
//! - fail: repetitions reset, short relearning interval, ease penalty,
//!   lapse counted only when falling from a learned state (reps >= 3)
//! - pass: fixed 1-day then 6-day ramp, then `interval * ease * grade
//!   multiplier`, with the ease nudged per grade and floored at 1.3

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::Grade;
use crate::review::{ReviewState, MIN_EASE_FACTOR};

use super::mastery_level;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// SM-2 parameters
///
/// Defaults carry the standard constants; callers tune them per deck or
/// content type without touching the transition logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sm2Config {
    /// Ease factor floor
    pub min_ease: f64,
    /// Ease subtracted on a failed recall
    pub ease_penalty: f64,
    /// Ease adjustment for a hard pass
    pub hard_delta: f64,
    /// Ease adjustment for an easy pass
    pub easy_delta: f64,
    /// Interval multiplier for a hard pass
    pub hard_multiplier: f64,
    /// Interval multiplier for an easy pass
    pub easy_multiplier: f64,
    /// Interval after a failed recall
    pub relearn_interval_days: u32,
    /// Interval after the first successful repetition
    pub first_interval_days: u32,
    /// Interval after the second successful repetition
    pub second_interval_days: u32,
    /// Hard ceiling on interval growth
    pub max_interval_days: u32,
}

impl Default for Sm2Config {
    fn default() -> Self {
        Self {
            min_ease: MIN_EASE_FACTOR,
            ease_penalty: 0.20,
            hard_delta: -0.15,
            easy_delta: 0.15,
            hard_multiplier: 0.85,
            easy_multiplier: 1.3,
            relearn_interval_days: 1,
            first_interval_days: 1,
            second_interval_days: 6,
            max_interval_days: 365,
        }
    }
}

impl Sm2Config {
    fn grade_multiplier(&self, grade: Grade) -> f64 {
        match grade {
            Grade::Hard => self.hard_multiplier,
            Grade::Good => 1.0,
            Grade::Easy => self.easy_multiplier,
            Grade::Again => 0.0,
        }
    }

    fn ease_delta(&self, grade: Grade) -> f64 {
        match grade {
            Grade::Hard => self.hard_delta,
            Grade::Good => 0.0,
            Grade::Easy => self.easy_delta,
            Grade::Again => -self.ease_penalty,
        }
    }
}

// ============================================================================
// SCHEDULE UPDATER
// ============================================================================

/// Computes the next review state from a current state and a grade
///
/// Pure function of its inputs: the current state is never mutated, so a
/// failed persistence attempt leaves nothing half-applied. Out-of-domain
/// ease factors on the input are clamped rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ScheduleUpdater {
    config: Sm2Config,
}

impl ScheduleUpdater {
    /// Updater with the standard SM-2 constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Updater with custom parameters
    pub fn with_config(config: Sm2Config) -> Self {
        Self { config }
    }

    /// The active parameters
    pub fn config(&self) -> &Sm2Config {
        &self.config
    }

    /// Apply a graded attempt at `now` and return the next state
    pub fn apply(&self, state: &ReviewState, grade: Grade, now: DateTime<Utc>) -> ReviewState {
        let mut next = state.clone();

        if grade.is_pass() {
            self.apply_pass(&mut next, grade);
        } else {
            self.apply_fail(&mut next, now);
        }

        next.ease_factor = (next.ease_factor + self.config.ease_delta(grade)).max(self.config.min_ease);
        next.last_reviewed_at = Some(now);
        next.next_review_at = Some(now + Duration::days(i64::from(next.interval_days)));
        next.mastery_level = mastery_level(
            next.correct_count,
            next.incorrect_count,
            next.consecutive_correct,
            next.lapse_count,
        );
        next
    }

    fn apply_pass(&self, next: &mut ReviewState, grade: Grade) {
        next.repetitions += 1;
        next.interval_days = match next.repetitions {
            1 => self.config.first_interval_days,
            2 => self.config.second_interval_days,
            _ => {
                // Grow from the previous interval using the pre-adjustment ease
                let grown = f64::from(next.interval_days)
                    * next.ease_factor.max(self.config.min_ease)
                    * self.config.grade_multiplier(grade);
                (grown.round() as u32).max(1)
            }
        }
        .min(self.config.max_interval_days);

        next.correct_count += 1;
        next.consecutive_correct += 1;
        next.consecutive_incorrect = 0;
    }

    fn apply_fail(&self, next: &mut ReviewState, now: DateTime<Utc>) {
        // A failure out of a learned state is a true lapse; an early
        // failure while still new/learning is not
        if next.repetitions >= 3 {
            next.lapse_count += 1;
            next.last_lapse_at = Some(now);
            tracing::debug!(lapses = next.lapse_count, "item lapsed from learned state");
        }
        next.repetitions = 0;
        next.interval_days = self.config.relearn_interval_days;
        next.incorrect_count += 1;
        next.consecutive_incorrect += 1;
        next.consecutive_correct = 0;
    }
}
