use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wordquiz_algo::clean_term;

use crate::db::StoredWord;
use crate::response::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

/// Body for create and update. `turkish`/`english` are accepted for older clients.
#[derive(Debug, Deserialize)]
pub struct WordPayload {
    #[serde(default, alias = "turkish")]
    source: Option<String>,
    #[serde(default, alias = "english")]
    translation: Option<String>,
}

impl WordPayload {
    fn into_terms(self) -> Result<(String, String), AppError> {
        let source = self.source.as_deref().and_then(clean_term);
        let translation = self.translation.as_deref().and_then(clean_term);
        match (source, translation) {
            (Some(source), Some(translation)) => Ok((source, translation)),
            _ => Err(AppError::validation("source and translation are required")),
        }
    }
}

pub async fn list_words(State(state): State<AppState>) -> Result<Json<Vec<StoredWord>>, AppError> {
    let words = state.store().list_all().await?;
    Ok(Json(words))
}

pub async fn create_word(
    State(state): State<AppState>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredWord>), AppError> {
    let Json(payload) = payload?;
    let (source, translation) = payload.into_terms()?;

    let word = state.store().insert(&source, &translation).await?;
    tracing::info!(word_id = %word.id, "word created");

    Ok((StatusCode::CREATED, Json(word)))
}

pub async fn update_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<Json<StoredWord>, AppError> {
    let id = parse_word_id(&id)?;
    let Json(payload) = payload?;
    let (source, translation) = payload.into_terms()?;

    match state.store().update_by_id(&id, &source, &translation).await? {
        Some(word) => {
            tracing::info!(word_id = %word.id, "word updated");
            Ok(Json(word))
        }
        None => Err(AppError::not_found("Word not found")),
    }
}

pub async fn delete_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_word_id(&id)?;

    if state.store().delete_by_id(&id).await? {
        tracing::info!(word_id = %id, "word deleted");
        Ok(Json(MessageResponse {
            message: "Word deleted",
        }))
    } else {
        Err(AppError::not_found("Word not found"))
    }
}

/// Ids are UUIDs; anything else is malformed input rather than a missing word.
fn parse_word_id(raw: &str) -> Result<String, AppError> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| AppError::validation("malformed word id"))
}
