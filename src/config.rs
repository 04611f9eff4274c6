// src/config.rs

use std::{env, path::PathBuf};
use dotenvy::dotenv;

/// Port the question server listens on.
pub const SERVER_PORT: u16 = 3000;

/// Seconds a player gets for each question.
pub const TIMER_DURATION: u32 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding `{ "questions": [...] }`.
    pub questions_path: PathBuf,
    /// Base URL the terminal client fetches questions from.
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let questions_path = env::var("QUESTIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./db.json"));

        let api_base_url = env::var("QUIZ_API_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", SERVER_PORT));

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            questions_path,
            api_base_url,
            rust_log,
        }
    }
}
