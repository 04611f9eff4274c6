// src/game/view.rs

use crate::models::question::Question;

use super::{state::GameState, summary::GameSummary};

/// What the front end should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Loading,
    /// Only the message is shown; the game does not proceed.
    Error(&'a str),
    Complete(GameSummary),
    Question {
        /// 1-based.
        number: usize,
        total: usize,
        question: &'a Question,
        time_remaining: u32,
    },
}

impl GameState {
    /// Rendering policy: loading, then error, then completion, then the
    /// active question.
    pub fn view(&self) -> View<'_> {
        if self.is_loading() {
            return View::Loading;
        }
        if let Some(message) = self.error() {
            return View::Error(message);
        }
        match self.current_question() {
            Some(question) => View::Question {
                number: self.current_question_index() + 1,
                total: self.questions().len(),
                question,
                time_remaining: self.time_remaining(),
            },
            None => View::Complete(GameSummary::new(self.questions(), self.answers())),
        }
    }
}
