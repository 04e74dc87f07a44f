// src/handlers/score.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::student::{RankParams, RankResponse, RankRow, SubmitScoreRequest},
    state::AppState,
    utils::clock,
};

/// Stores `score` as the student's best for `course` on the UTC day of `now`.
///
/// Inserts a new row, or raises an existing one when `score` is strictly
/// higher (refreshing `created_at`). Returns the number of rows written:
/// 0 means the submission was a tie or lower and changed nothing.
pub async fn record_best_score(
    pool: &SqlitePool,
    name: &str,
    score: i64,
    course: &str,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    // Upsert guarded by UNIQUE(name, course, day): insert, or raise the score.
    let result = sqlx::query(
        r#"
        INSERT INTO students (name, score, course, day, created_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(name, course, day) DO UPDATE SET
            score = excluded.score,
            created_at = excluded.created_at
        WHERE excluded.score > students.score
        "#,
    )
    .bind(name)
    .bind(score)
    .bind(course)
    .bind(clock::day_key(now))
    .bind(clock::timestamp(now))
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Submits a student's score for a course.
///
/// Keeps one row per student, course and UTC day. A strictly higher score
/// replaces the stored one and refreshes `created_at`; ties and lower scores
/// are ignored so the first student to reach a score keeps the earlier time.
/// Names are stored exactly as sent.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let written = record_best_score(
        &state.pool,
        &payload.name,
        payload.score,
        &payload.course,
        state.clock.now(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to upsert score: {:?}", e);
        AppError::from(e)
    })?;

    tracing::debug!(
        course = %payload.course,
        score = payload.score,
        changed = written > 0,
        "Score submitted"
    );

    Ok(Json(json!({ "success": true })))
}

/// Returns today's leaderboard for a course.
///
/// Ordered by score, then by who reached it first. A missing course is not an
/// HTTP error: the client gets an empty board with an `error` field.
pub async fn rank(
    State(state): State<AppState>,
    Query(params): Query<RankParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(course) = params.course.filter(|c| !c.is_empty()) else {
        return Ok(Json(RankResponse::missing_course()));
    };

    let today = clock::day_key(state.clock.now());

    let rows = sqlx::query_as::<_, RankRow>(
        r#"
        SELECT name, score
        FROM students
        WHERE course = ? AND day = ?
        ORDER BY score DESC, created_at ASC, id ASC
        "#,
    )
    .bind(&course)
    .bind(&today)
    .fetch_all(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(RankResponse::ranked(rows)))
}
