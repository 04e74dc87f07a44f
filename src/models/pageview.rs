// src/models/pageview.rs

use serde::Serialize;

/// Response body of `GET /api/pageview`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewStats {
    /// In-process counter value before this request incremented it.
    pub pageview: u64,

    /// Process start time in milliseconds since the Unix epoch.
    pub start_at: i64,

    /// Durable number of rows in `pageviews`.
    pub total_views: i64,
}
