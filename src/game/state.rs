// src/game/state.rs

use crate::{
    config::TIMER_DURATION,
    models::{question::Question, response::QuestionResponse},
};

/// Everything that can happen to a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    QuestionsLoaded(Vec<Question>),
    LoadFailed(String),
    /// One second of the active question's countdown elapsed.
    Tick,
    /// The countdown expired; counts as submitting empty words.
    TimeUp,
    Submit(Vec<String>),
    Restart,
}

/// Outcome of applying a `GameEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event does not apply in the current state. Nothing changed.
    Ignored,
    Loaded,
    Failed,
    /// The countdown moved but the question did not change.
    Ticked,
    /// A response was recorded and the next question (or completion) entered.
    Advanced,
    /// The submission had the wrong number of words. Nothing changed.
    Rejected { expected: usize, got: usize },
    Restarted,
}

impl Transition {
    /// Whether the active question changed, which invalidates any running timer.
    pub fn changes_question(self) -> bool {
        matches!(
            self,
            Transition::Loaded | Transition::Failed | Transition::Advanced | Transition::Restarted
        )
    }
}

/// Case-insensitive, position-by-position comparison. Every position must
/// match and both sequences must have the same length. Words are not trimmed.
pub fn is_correct(question: &Question, answer: &[String]) -> bool {
    answer.len() == question.correct_answer.len()
        && answer
            .iter()
            .zip(&question.correct_answer)
            .all(|(given, expected)| given.to_lowercase() == expected.to_lowercase())
}

/// State of one game session.
///
/// Only `apply` mutates it, so `answers.len() == current_question_index`
/// holds after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    current_question_index: usize,
    questions: Vec<Question>,
    answers: Vec<QuestionResponse>,
    time_remaining: u32,
    is_game_complete: bool,
    is_loading: bool,
    error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh session waiting for its question list.
    pub fn new() -> Self {
        Self {
            current_question_index: 0,
            questions: Vec::new(),
            answers: Vec::new(),
            time_remaining: TIMER_DURATION,
            is_game_complete: false,
            is_loading: true,
            error: None,
        }
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[QuestionResponse] {
        &self.answers
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_game_complete(&self) -> bool {
        self.is_game_complete
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The question being answered, if the game is in play.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_playing() {
            self.questions.get(self.current_question_index)
        } else {
            None
        }
    }

    /// True while a question is on screen and its countdown should run.
    pub fn is_playing(&self) -> bool {
        !self.is_loading && self.error.is_none() && !self.is_game_complete
    }

    /// The single transition function for the session.
    pub fn apply(&mut self, event: GameEvent) -> Transition {
        match event {
            GameEvent::QuestionsLoaded(questions) => {
                if !self.is_loading {
                    return Transition::Ignored;
                }
                self.is_loading = false;
                self.is_game_complete = questions.is_empty();
                self.questions = questions;
                self.time_remaining = TIMER_DURATION;
                Transition::Loaded
            }
            GameEvent::LoadFailed(message) => {
                if !self.is_loading {
                    return Transition::Ignored;
                }
                self.is_loading = false;
                self.error = Some(message);
                Transition::Failed
            }
            GameEvent::Tick => {
                if !self.is_playing() {
                    return Transition::Ignored;
                }
                self.time_remaining = self.time_remaining.saturating_sub(1);
                if self.time_remaining == 0 {
                    self.apply(GameEvent::TimeUp)
                } else {
                    Transition::Ticked
                }
            }
            GameEvent::TimeUp => {
                let Some(blanks) = self.current_question().map(|q| q.blanks) else {
                    return Transition::Ignored;
                };
                self.apply(GameEvent::Submit(vec![String::new(); blanks]))
            }
            GameEvent::Submit(answer) => self.submit(answer),
            GameEvent::Restart => {
                // A failed fetch is final for the session.
                if self.is_loading || self.error.is_some() {
                    return Transition::Ignored;
                }
                self.current_question_index = 0;
                self.answers.clear();
                self.time_remaining = TIMER_DURATION;
                self.is_game_complete = self.questions.is_empty();
                Transition::Restarted
            }
        }
    }

    fn submit(&mut self, answer: Vec<String>) -> Transition {
        let Some(question) = self.current_question() else {
            return Transition::Ignored;
        };
        if answer.len() != question.blanks {
            return Transition::Rejected {
                expected: question.blanks,
                got: answer.len(),
            };
        }

        let response = QuestionResponse {
            question_id: question.id,
            is_correct: is_correct(question, &answer),
            user_answer: answer,
            time_spent: TIMER_DURATION - self.time_remaining,
        };
        tracing::debug!(
            "Question {} answered (correct: {}, {}s)",
            response.question_id,
            response.is_correct,
            response.time_spent
        );

        self.answers.push(response);
        self.current_question_index += 1;
        self.time_remaining = TIMER_DURATION;
        self.is_game_complete = self.current_question_index >= self.questions.len();
        Transition::Advanced
    }
}
