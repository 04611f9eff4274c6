// src/handlers/questions.rs

use axum::{Json, extract::State};

use crate::{config::Config, models::question::Question, store};

/// Returns the full question list, in file order.
///
/// The file is re-read on every request. Storage failures are logged by the
/// store and answered with an empty array, never an error status.
pub async fn list_questions(State(config): State<Config>) -> Json<Vec<Question>> {
    Json(store::load_questions(&config.questions_path).await)
}
