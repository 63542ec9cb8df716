use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use wordquiz_algo::{grade_quiz, AnswerItem, QuizQuestion};

use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    #[serde(default)]
    answers: Vec<AnswerItem>,
}

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    /// Percentage with two decimals, e.g. `"80.00"`
    score: String,
    correct: usize,
    total: usize,
}

/// Sample a fresh quiz from the words stored right now
pub async fn generate_quiz(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let pool = state.store().word_pairs().await?;
    let quiz = state.quiz_generator().generate(&pool);

    tracing::debug!(pool = pool.len(), questions = quiz.len(), "quiz generated");

    Ok(Json(quiz))
}

pub async fn grade(
    payload: Result<Json<GradeRequest>, JsonRejection>,
) -> Result<Json<GradeResponse>, AppError> {
    let Json(request) = payload?;
    let result = grade_quiz(&request.answers)?;

    Ok(Json(GradeResponse {
        score: result.score_label(),
        correct: result.correct,
        total: result.total,
    }))
}
