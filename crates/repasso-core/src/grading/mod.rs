//! Grading module - normalize raw responses into grades
//!
//! Maps heterogeneous inputs (free-text answers, self-ratings, external
//! checker verdicts) onto the 4-point quality scale the scheduler
//! consumes. Grading is a pure function: the same raw response always
//! yields the same grade.

mod grade;
mod grader;

pub use grade::Grade;
pub use grader::{normalize_answer, AnswerChecker, ExactMatchChecker, OutcomeGrader, RawResponse};
