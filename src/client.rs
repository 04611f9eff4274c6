// src/client.rs

use std::fmt;

use async_trait::async_trait;

use crate::models::question::Question;

/// Why the question list could not be fetched.
#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (connection refused, bad body...).
    Transport(String),
    /// The server answered with a non-success status.
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Failed to fetch questions: {}", msg),
            FetchError::Status(code) => write!(f, "Failed to fetch questions (HTTP {})", code),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Where the game controller gets its questions from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError>;
}

/// Fetches questions from the quiz server's `GET /questions`.
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn questions_url(&self) -> String {
        format!("{}/questions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError> {
        let url = self.questions_url();
        tracing::debug!("Fetching questions from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Vec<Question>>().await?)
    }
}
