//! Review module - Core types and data structures
//!
//! Defines the durable per-(learner, item) review record and the
//! content-agnostic item handle the scheduler operates on. The scheduler
//! never inspects content beyond the opaque reference; grading receives
//! accepted answers separately.

mod item;
mod state;

pub use item::{PoolEntry, ReviewableItem};
pub use state::{
    LearningStage, PoolStats, ReviewState, DEFAULT_EASE_FACTOR, MASTERED_THRESHOLD,
    MIN_EASE_FACTOR,
};
