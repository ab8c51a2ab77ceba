//! Selection module - priority-based session batch building
//!
//! Ranks a learner's pool by urgency and picks the due subset for a
//! session: struggling and overdue items surface first, new items are
//! admitted under a cap, and equal-priority ties get a light seeded
//! shuffle so sessions do not repeat in identical order.

mod priority;

pub use priority::{
    priority_score, PrioritySelector, SelectionOutcome, SessionConfig, SessionMode,
};
