// src/models/student.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'students' table in the database.
/// One row holds a student's best score for one course on one day.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub score: i64,
    pub course: String,

    /// UTC calendar day, `YYYY-MM-DD`.
    pub day: String,

    /// Time the current score was first reached.
    pub created_at: String,
}

/// DTO for submitting a score.
/// Fields are taken as sent; only the JSON structure is checked.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub score: i64,
    pub course: String,
}

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize)]
pub struct RankParams {
    pub course: Option<String>,
}

/// Row fetched for the leaderboard, already in rank order.
#[derive(Debug, FromRow)]
pub struct RankRow {
    pub name: String,
    pub score: i64,
}

/// A leaderboard line with its 1-based position.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RankEntry {
    pub index: usize,
    pub name: String,
    pub score: i64,
}

/// Response body of `GET /api/rank`.
#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub rank: Vec<RankEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RankResponse {
    /// Numbers the rows 1.. in the order they were returned.
    pub fn ranked(rows: Vec<RankRow>) -> Self {
        let rank = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| RankEntry {
                index: idx + 1,
                name: row.name,
                score: row.score,
            })
            .collect();

        Self { rank, error: None }
    }

    pub fn missing_course() -> Self {
        Self {
            rank: Vec::new(),
            error: Some("missing course parameter".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_numbers_from_one() {
        let response = RankResponse::ranked(vec![
            RankRow { name: "c".into(), score: 90 },
            RankRow { name: "a".into(), score: 80 },
        ]);

        assert_eq!(response.rank[0].index, 1);
        assert_eq!(response.rank[1].index, 2);
        assert_eq!(response.rank[1].name, "a");
        assert!(response.error.is_none());
    }

    #[test]
    fn missing_course_serializes_error_field() {
        let value = serde_json::to_value(RankResponse::missing_course()).unwrap();
        assert_eq!(value["rank"], serde_json::json!([]));
        assert!(!value["error"].as_str().unwrap().is_empty());
    }


    #[test]
    fn any_string_is_accepted_as_name() {
        let req: SubmitScoreRequest =
            serde_json::from_str(r#"{"name": "", "score": 10, "course": "Tom & <Jerry>"}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.course, "Tom & <Jerry>");
    }
}
