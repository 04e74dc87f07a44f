// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// File name of the question bank inside `questions_dir`.
pub const QUESTIONS_FILE: &str = "questions.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub questions_dir: PathBuf,
    pub static_dir: PathBuf,
    pub bind_addr: String,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:database.sqlite?mode=rwc".to_string(),
            questions_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("public"),
            bind_addr: "0.0.0.0:3000".to_string(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let questions_dir = env::var("QUESTIONS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.questions_dir);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let bind_addr = env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        Self {
            database_url,
            questions_dir,
            static_dir,
            bind_addr,
            rust_log,
        }
    }

    /// Full path of the question bank file.
    pub fn questions_path(&self) -> PathBuf {
        self.questions_dir.join(QUESTIONS_FILE)
    }
}
