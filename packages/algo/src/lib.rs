//! # wordquiz-algo - vocabulary quiz engine
//!
//! Pure Rust building blocks for flashcard quizzes:
//!
//! - **Quiz generation** - random sampling without replacement, distractor
//!   selection and option shuffling
//! - **Grading** - percentage score over a batch of submitted answers
//!
//! ## Module layout
//!
//! - [`quiz`] - question generation with an injectable random source
//! - [`grade`] - scoring
//! - [`sanitize`] - presence checks for stored terms
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use wordquiz_algo::{grade_quiz, AnswerItem, QuizGenerator, WordPair};
//!
//! let pool = vec![
//!     WordPair::new("1", "kedi", "cat"),
//!     WordPair::new("2", "köpek", "dog"),
//! ];
//! let quiz = QuizGenerator::with_seed(42).generate(&pool);
//! assert_eq!(quiz.len(), 2);
//!
//! let answers: Vec<AnswerItem> = quiz
//!     .iter()
//!     .map(|q| AnswerItem::new(Some(&q.correct_answer), &q.correct_answer))
//!     .collect();
//! assert_eq!(grade_quiz(&answers).unwrap().score_label(), "100.00");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod grade;
pub mod quiz;
pub mod sanitize;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use grade::{grade_quiz, GradeError};

pub use quiz::{generate_quiz, QuizGenerator};

pub use sanitize::{clean_term, distinct_translations};
