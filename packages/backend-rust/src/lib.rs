pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::{DbInitError, WordStore};
use crate::state::AppState;

/// Connect the word store described by `config` and build the full router.
pub async fn create_app(config: Config) -> Result<axum::Router, DbInitError> {
    let store = WordStore::connect(&config.db).await?;
    Ok(build_router(AppState::new(config, store)))
}

pub fn build_router(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
