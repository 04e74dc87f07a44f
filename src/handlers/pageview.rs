// src/handlers/pageview.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, models::pageview::PageViewStats, state::AppState, utils::clock};

/// Records one page view and reports the running totals.
pub async fn record_and_count(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    sqlx::query("INSERT INTO pageviews (timestamp) VALUES (?)")
        .bind(clock::timestamp(state.clock.now()))
        .execute(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record page view: {:?}", e);
            AppError::from(e)
        })?;

    let total_views: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pageviews")
        .fetch_one(&state.pool)
        .await?;

    Ok(Json(PageViewStats {
        pageview: state.page_views.next(),
        start_at: state.page_views.started_at().timestamp_millis(),
        total_views,
    }))
}
