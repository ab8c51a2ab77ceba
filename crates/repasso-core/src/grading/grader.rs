//! Outcome grading - raw responses to grades
//!
//! Free-text answers compare against the accepted set through an
//! `AnswerChecker`; the bundled checker does normalized exact matching
//! (trim, casefold, diacritic folding, whitespace collapse). Anything
//! fuzzier lives behind the same trait in an external collaborator.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

use super::Grade;

// ============================================================================
// RAW RESPONSES
// ============================================================================

/// A learner's raw answer before grading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    /// Free-text answer with the accepted answers for the item
    Text {
        /// What the learner typed
        submitted: String,
        /// Accepted answer strings from the content collaborator
        accepted: Vec<String>,
    },
    /// Qualitative self-rating tag ("again"/"hard"/"good"/"easy")
    SelfRating(String),
    /// Verdict from an external correctness checker
    Checked(bool),
}

// ============================================================================
// ANSWER NORMALIZATION
// ============================================================================

/// Normalize an answer for comparison
///
/// Lowercases, strips diacritics (NFD + combining mark removal), trims,
/// and collapses internal whitespace, so "  Ápfel " matches "apfel".
pub fn normalize_answer(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Boundary contract for answer comparison
///
/// The only promise an implementation makes: return whether `submitted`
/// counts as a correct rendering of `accepted`. Partial credit and fuzzy
/// matching belong to external implementations of this trait.
pub trait AnswerChecker {
    /// Whether the submitted answer matches one accepted answer
    fn is_correct(&self, submitted: &str, accepted: &str) -> bool;
}

/// Normalized exact-match checker (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchChecker;

impl AnswerChecker for ExactMatchChecker {
    fn is_correct(&self, submitted: &str, accepted: &str) -> bool {
        normalize_answer(submitted) == normalize_answer(accepted)
    }
}

// ============================================================================
// OUTCOME GRADER
// ============================================================================

/// Maps raw responses to grades
///
/// Pure and side-effect free; grading the same response twice yields the
/// same grade.
#[derive(Debug, Clone, Default)]
pub struct OutcomeGrader<C = ExactMatchChecker> {
    checker: C,
}

impl OutcomeGrader<ExactMatchChecker> {
    /// Grader backed by the normalized exact-match checker
    pub fn new() -> Self {
        Self {
            checker: ExactMatchChecker,
        }
    }
}

impl<C: AnswerChecker> OutcomeGrader<C> {
    /// Grader backed by an external answer checker
    pub fn with_checker(checker: C) -> Self {
        Self { checker }
    }

    /// Normalize a raw response into a grade
    ///
    /// Free text grades `Good` on a match and `Again` otherwise (an empty
    /// accepted set can never match). Self-ratings must be one of the four
    /// grade tags; anything else is `InvalidGrade` and no state changes.
    pub fn grade(&self, response: &RawResponse) -> Result<Grade> {
        match response {
            RawResponse::Text {
                submitted,
                accepted,
            } => {
                let correct = accepted
                    .iter()
                    .any(|answer| self.checker.is_correct(submitted, answer));
                Ok(Grade::from_correct(correct))
            }
            RawResponse::SelfRating(tag) => tag.parse(),
            RawResponse::Checked(correct) => Ok(Grade::from_correct(*correct)),
        }
    }
}
