mod audio;
mod health;
mod quiz;
mod words;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/words",
            get(words::list_words)
                .post(words::create_word)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/words/:id",
            put(words::update_word)
                .delete(words::delete_word)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/quiz",
            get(quiz::generate_quiz).fallback(method_not_allowed),
        )
        .route(
            "/api/quiz/grade",
            post(quiz::grade).fallback(method_not_allowed),
        )
        .route(
            "/api/audio",
            get(audio::proxy_audio).fallback(method_not_allowed),
        )
        .route(
            "/api/config",
            get(client_config).fallback(method_not_allowed),
        )
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfigResponse {
    api_base_url: String,
    source_lang: String,
    translation_lang: String,
    quiz_size: usize,
}

/// Settings the browser client needs to talk to this API
async fn client_config(State(state): State<AppState>) -> Json<ClientConfigResponse> {
    let config = state.config();
    Json(ClientConfigResponse {
        api_base_url: config.api_base_url.clone(),
        source_lang: config.source_lang.clone(),
        translation_lang: config.translation_lang.clone(),
        quiz_size: config.quiz_size,
    })
}

async fn method_not_allowed() -> Response {
    json_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "METHOD_NOT_ALLOWED",
        "Method not allowed",
    )
    .into_response()
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "Route not found").into_response()
}
