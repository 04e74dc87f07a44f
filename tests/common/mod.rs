// tests/common/mod.rs

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use courseware::{config::Config, db, routes, state::AppState, utils::clock::Clock};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Clock the tests move by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub clock: Arc<ManualClock>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap()
}

/// Fresh directory under the system temp dir.
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("courseware_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Spawns the app on a random port backed by an in-memory database.
pub async fn spawn_app() -> TestApp {
    let dir = scratch_dir();
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        questions_dir: dir.join("data"),
        static_dir: dir.join("public"),
        bind_addr: "127.0.0.1:0".to_string(),
        rust_log: "error".to_string(),
    };
    spawn_app_with(config).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .expect("Failed to open in-memory database");

    db::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    let clock = ManualClock::starting_at(start_time());
    let state = AppState::with_clock(pool.clone(), config, clock.clone());
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        clock,
    }
}

impl TestApp {
    pub async fn submit(&self, client: &reqwest::Client, name: &str, score: i64, course: &str) {
        let response = client
            .post(&format!("{}/api/submit", self.address))
            .json(&serde_json::json!({
                "name": name,
                "score": score,
                "course": course
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    pub async fn rank(&self, client: &reqwest::Client, course: &str) -> serde_json::Value {
        client
            .get(&format!("{}/api/rank", self.address))
            .query(&[("course", course)])
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse rank json")
    }
}

pub fn unique_course() -> String {
    format!("c_{}", &uuid::Uuid::new_v4().to_string()[..8])
}
