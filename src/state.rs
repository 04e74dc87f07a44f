use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use axum::extract::FromRef;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::utils::clock::{Clock, SystemClock};

/// In-process page-view counter. Resets whenever the process restarts,
/// independently of the durable total in `pageviews`.
#[derive(Debug)]
pub struct PageViewCounter {
    started_at: DateTime<Utc>,
    count: AtomicU64,
}

impl PageViewCounter {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            count: AtomicU64::new(0),
        }
    }

    /// Returns the count before incrementing it.
    pub fn next(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub page_views: Arc<PageViewCounter>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self::with_clock(pool, config, Arc::new(SystemClock))
    }

    /// Builds the state around an explicit clock; the start time is read from it.
    pub fn with_clock(pool: SqlitePool, config: Config, clock: Arc<dyn Clock>) -> Self {
        let page_views = Arc::new(PageViewCounter::new(clock.now()));
        Self {
            pool,
            config,
            clock,
            page_views,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
