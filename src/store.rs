// src/store.rs

use std::path::Path;

use validator::Validate;

use crate::{
    error::AppError,
    models::question::{Question, QuestionBank},
};

/// Reads and parses the question file.
pub async fn read_questions(path: &Path) -> Result<Vec<Question>, AppError> {
    let data = tokio::fs::read_to_string(path).await?;
    let bank: QuestionBank = serde_json::from_str(&data)?;
    Ok(bank.questions)
}

/// Loads the question list for serving.
///
/// Never fails: a read or parse error is logged and an empty list returned.
/// Questions that fail validation are logged but still served as stored.
pub async fn load_questions(path: &Path) -> Vec<Question> {
    let questions = match read_questions(path).await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!("Error reading questions from {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    for question in &questions {
        if let Err(errors) = question.validate() {
            tracing::warn!("Question {} is inconsistent: {}", question.id, errors);
        }
    }

    tracing::debug!("Loaded {} questions", questions.len());
    questions
}
