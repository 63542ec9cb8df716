//! Quiz Grading
//!
//! Scores a batch of submitted answers as a percentage rounded to 2 decimals.
//! An empty batch is rejected instead of dividing by zero.

use thiserror::Error;

use crate::types::{AnswerItem, GradeResult};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("at least one answer is required")]
    EmptyAnswers,
}

/// Grade `answers`; the percentage is `100 * correct / total`
pub fn grade_quiz(answers: &[AnswerItem]) -> Result<GradeResult, GradeError> {
    if answers.is_empty() {
        return Err(GradeError::EmptyAnswers);
    }

    let total = answers.len();
    let correct = answers.iter().filter(|a| a.is_correct()).count();

    Ok(GradeResult {
        correct,
        total,
        score_percent: round2(100.0 * correct as f64 / total as f64),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_correct_is_fifty() {
        let result = grade_quiz(&[
            AnswerItem::new(Some("a"), "a"),
            AnswerItem::new(Some("b"), "c"),
        ])
        .unwrap();

        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.score_label(), "50.00");
    }

    #[test]
    fn test_empty_answers_rejected() {
        assert_eq!(grade_quiz(&[]), Err(GradeError::EmptyAnswers));
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let result = grade_quiz(&[
            AnswerItem::new(None, "a"),
            AnswerItem::new(Some("b"), "b"),
            AnswerItem::new(Some("c"), "c"),
            AnswerItem::new(Some("d"), "d"),
        ])
        .unwrap();
        assert_eq!(result.score_percent, 75.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let answers = vec![
            AnswerItem::new(Some("x"), "x"),
            AnswerItem::new(Some("x"), "x"),
            AnswerItem::new(Some("y"), "x"),
        ];
        let result = grade_quiz(&answers).unwrap();
        assert_eq!(result.score_percent, 66.67);
        assert_eq!(result.score_label(), "66.67");

        let result = grade_quiz(&answers[2..]).unwrap();
        assert_eq!(result.score_label(), "0.00");
    }

    #[test]
    fn test_all_correct_is_hundred() {
        let answers: Vec<_> = (0..7)
            .map(|i| {
                let word = format!("word{i}");
                AnswerItem::new(Some(word.as_str()), &word)
            })
            .collect();
        assert_eq!(grade_quiz(&answers).unwrap().score_label(), "100.00");
    }
}
