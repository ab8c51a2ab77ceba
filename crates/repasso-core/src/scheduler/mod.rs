//! Scheduler module - SM-2 review state transitions
//!
//! Given a current state and a grade, computes the next state: interval
//! growth, ease adjustment, streak and lapse bookkeeping, and the derived
//! mastery level. Pure computation against an injected clock.

mod mastery;
mod sm2;

pub use mastery::mastery_level;
pub use sm2::{ScheduleUpdater, Sm2Config};
