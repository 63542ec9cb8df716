use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Deserialize;

use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AudioQuery {
    word: Option<String>,
    lang: Option<String>,
}

/// Stream synthesized speech for `?word=&lang=` straight from the provider
pub async fn proxy_audio(
    State(state): State<AppState>,
    query: Result<Query<AudioQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    let word = query.word.as_deref().map(str::trim).filter(|w| !w.is_empty());
    let lang = query.lang.as_deref().map(str::trim).filter(|l| !l.is_empty());
    let (Some(word), Some(lang)) = (word, lang) else {
        return Err(AppError::validation("Word and lang parameters are required"));
    };

    let audio = state.speech().fetch(word, lang).await?;
    tracing::debug!(lang, content_type = %audio.content_type, "streaming audio");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, audio.content_type)
        .body(Body::from_stream(audio.response.bytes_stream()))
        .map_err(|err| AppError::internal(err.to_string()))
}
