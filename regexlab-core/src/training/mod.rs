//! Training exercises, answers and their storage
//!
//! Exercises are quizzes: an input string, a description of what to find in
//! it, and the pattern the author expects. Answers are compared to the
//! expected pattern by their literal text, and every answer is recorded as a
//! [`TrainingResult`].

mod seed;
mod service;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegexLabError;

pub use seed::seed_exercises;
pub use service::TrainingService;
pub use store::{JsonStore, MemoryStore, TrainingStore};

/// Difficulty of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
    /// Plain literals
    Basic,
    /// Classes, quantifiers, escapes
    Intermediate,
    /// Lookaround, backreferences, long alternations
    Advanced,
}

impl TrainingLevel {
    /// Every level, easiest first
    pub const ALL: [TrainingLevel; 3] = [
        TrainingLevel::Basic,
        TrainingLevel::Intermediate,
        TrainingLevel::Advanced,
    ];

    /// The lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingLevel::Basic => "basic",
            TrainingLevel::Intermediate => "intermediate",
            TrainingLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for TrainingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingLevel {
    type Err = RegexLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RegexLabError::validation(
                    "level",
                    format!("expected basic, intermediate or advanced, got '{s}'"),
                )
            })
    }
}

/// A stored exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingExercise {
    /// Store-assigned id, starting at 1
    pub id: u32,
    /// Difficulty
    pub level: TrainingLevel,
    /// The text the pattern is applied to
    pub input_string: String,
    /// The answer the exercise expects
    pub expected_regex: String,
    /// What to find
    pub description: String,
}

/// An exercise not yet stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    /// Difficulty
    pub level: TrainingLevel,
    /// The text the pattern is applied to
    pub input_string: String,
    /// The answer the exercise expects
    pub expected_regex: String,
    /// What to find
    pub description: String,
}

/// A recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResult {
    /// Store-assigned id, starting at 1
    pub id: u32,
    /// Who answered
    pub user_id: u32,
    /// Which exercise
    pub exercise_id: u32,
    /// The submitted pattern
    pub user_regex: String,
    /// Whether it equals the expected pattern
    pub is_correct: bool,
    /// Unix seconds when recorded
    pub timestamp: u64,
}

/// An answer not yet recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResult {
    /// Who answered
    pub user_id: u32,
    /// Which exercise
    pub exercise_id: u32,
    /// The submitted pattern
    pub user_regex: String,
    /// Whether it equals the expected pattern
    pub is_correct: bool,
}
