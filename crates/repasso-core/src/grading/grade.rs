//! The 4-point review grade
//!
//! Transient, never persisted. Binary correct/incorrect contexts collapse
//! onto `Good`/`Again`.

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Quality of a graded attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Failed recall; resets the repetition sequence
    Again,
    /// Recalled with difficulty
    Hard,
    /// Recalled correctly
    Good,
    /// Recalled effortlessly
    Easy,
}

impl Grade {
    /// Collapse a binary correctness verdict onto the 4-point scale
    pub fn from_correct(correct: bool) -> Self {
        if correct { Grade::Good } else { Grade::Again }
    }

    /// Whether this grade counts as a pass
    pub fn is_pass(&self) -> bool {
        !matches!(self, Grade::Again)
    }

    /// String name used in self-rating inputs and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Again => "again",
            Grade::Hard => "hard",
            Grade::Good => "good",
            Grade::Easy => "easy",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // "forgot" is the qualitative tag some surfaces use for a failure
            "again" | "forgot" => Ok(Grade::Again),
            "hard" => Ok(Grade::Hard),
            "good" => Ok(Grade::Good),
            "easy" => Ok(Grade::Easy),
            other => Err(SchedulerError::InvalidGrade(other.to_string())),
        }
    }
}
