// src/models/response.rs

use serde::{Deserialize, Serialize};

/// The player's result for one question.
/// Recorded once, when the player submits or the timer runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: i64,

    /// Submitted words in blank order. All empty on timeout.
    pub user_answer: Vec<String>,

    pub is_correct: bool,

    /// Seconds between the question appearing and the response.
    pub time_spent: u32,
}

impl QuestionResponse {
    /// True when every submitted word is empty (e.g. the timer expired).
    pub fn is_blank(&self) -> bool {
        self.user_answer.iter().all(|word| word.is_empty())
    }
}
