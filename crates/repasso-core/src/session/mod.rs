//! Session module - the single entry point external callers use
//!
//! The planner orchestrates grading, scheduling, and selection over
//! caller-supplied pools. All I/O lives behind the collaborator traits;
//! the planner computes the full next state in memory before anything
//! could be written, so no error path leaves a partial update behind.

mod planner;
mod store;

pub use planner::{PreviewOutcomes, SessionPlanner};
pub use store::{ContentSource, ReviewStateReader, ReviewStateWriter};
