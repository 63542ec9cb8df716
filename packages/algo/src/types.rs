//! Common Types and Constants
//!
//! Shared data structures used by the quiz generator and the grader.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Number of questions in a quiz when the caller does not ask for a size
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// Options offered per question (correct answer plus distractors)
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Upper bound on distractor draws per question, so tiny pools terminate
pub const DISTRACTOR_ATTEMPT_LIMIT: usize = 1000;

// ==================== Word Types ====================

/// Stored source-term/translation record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Opaque unique identifier assigned by the store
    pub id: String,
    /// Term in the language being learned
    pub source: String,
    /// Translation shown as an answer option
    pub translation: String,
}

impl WordPair {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            translation: translation.into(),
        }
    }
}

// ==================== Quiz Types ====================

/// One multiple-choice question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Id of the word pair the question was built from
    pub word_id: String,
    /// Source text of the correct pair
    pub prompt: String,
    /// Shuffled, duplicate-free options; at most [`OPTIONS_PER_QUESTION`]
    pub options: Vec<String>,
    /// Translation of the correct pair
    pub correct_answer: String,
}

// ==================== Grading Types ====================

/// A submitted answer for one question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    /// `None` when the question was skipped
    #[serde(default)]
    pub selected_answer: Option<String>,
    pub correct_answer: String,
}

impl AnswerItem {
    pub fn new(selected: Option<&str>, correct: &str) -> Self {
        Self {
            selected_answer: selected.map(str::to_string),
            correct_answer: correct.to_string(),
        }
    }

    /// Exact string equality; a missing selection never matches
    pub fn is_correct(&self) -> bool {
        self.selected_answer.as_deref() == Some(self.correct_answer.as_str())
    }
}

/// Outcome of grading a batch of answers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub correct: usize,
    pub total: usize,
    /// Percentage in [0, 100], rounded to 2 decimals
    pub score_percent: f64,
}

impl GradeResult {
    /// Score rendered with exactly two decimals, e.g. `"66.67"`
    pub fn score_label(&self) -> String {
        format!("{:.2}", self.score_percent)
    }
}
