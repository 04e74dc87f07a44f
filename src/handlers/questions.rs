// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use crate::{config::Config, error::AppError};

/// Serves the question bank exactly as authored; its shape is not checked.
pub async fn get_questions(State(config): State<Config>) -> Result<impl IntoResponse, AppError> {
    let path = config.questions_path();

    let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!("Failed to read question bank {}: {}", path.display(), e);
        match e.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound("Question bank not found".to_string()),
            _ => AppError::from(e),
        }
    })?;

    let questions: Value = serde_json::from_str(&raw)?;

    Ok(Json(questions))
}
