// src/game/summary.rs

use std::fmt;

use crate::models::{question::Question, response::QuestionResponse};

/// Shown in place of the player's words when nothing was entered.
pub const NO_ANSWER: &str = "No answer";

/// Per-question line of the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionReview {
    /// 1-based position in the game.
    pub number: usize,
    pub sentence: String,
    pub is_correct: bool,
    pub time_spent: u32,
    /// Only set when the response was incorrect.
    pub correct_answer: Option<String>,
    /// Only set when the response was incorrect.
    pub user_answer: Option<String>,
    /// The sentence with the player's words in the blanks.
    /// Only set when the response was incorrect and not blank.
    pub answered_sentence: Option<String>,
}

/// Results of a finished game, derived from the questions and responses.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub score: usize,
    pub total: usize,
    /// Percentage of correct responses; 0 when there were no questions.
    pub accuracy: f64,
    pub reviews: Vec<QuestionReview>,
}

impl GameSummary {
    pub fn new(questions: &[Question], answers: &[QuestionResponse]) -> Self {
        let score = answers.iter().filter(|a| a.is_correct).count();
        let total = questions.len();
        let accuracy = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };

        let reviews = questions
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(index, (question, answer))| review(index + 1, question, answer))
            .collect();

        Self {
            score,
            total,
            accuracy,
            reviews,
        }
    }

    /// Accuracy with one decimal place, e.g. "66.7%".
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}%", self.accuracy)
    }
}

fn review(number: usize, question: &Question, answer: &QuestionResponse) -> QuestionReview {
    let (correct_answer, user_answer, answered_sentence) = if answer.is_correct {
        (None, None, None)
    } else if answer.is_blank() {
        (
            Some(question.correct_answer.join(", ")),
            Some(NO_ANSWER.to_string()),
            None,
        )
    } else {
        (
            Some(question.correct_answer.join(", ")),
            Some(answer.user_answer.join(", ")),
            Some(question.fill_blanks(&answer.user_answer)),
        )
    };

    QuestionReview {
        number,
        sentence: question.sentence.clone(),
        is_correct: answer.is_correct,
        time_spent: answer.time_spent,
        correct_answer,
        user_answer,
        answered_sentence,
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Complete!")?;
        writeln!(f, "Your score: {} out of {}", self.score, self.total)?;
        writeln!(f, "Accuracy: {}", self.accuracy_label())?;
        if self.reviews.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Review Your Answers")?;
        for review in &self.reviews {
            let mark = if review.is_correct { "✔" } else { "✘" };
            writeln!(
                f,
                "{} Question {} (time taken: {}s)",
                mark, review.number, review.time_spent
            )?;
            writeln!(f, "   {}", review.sentence)?;
            if let (Some(correct), Some(given)) = (&review.correct_answer, &review.user_answer) {
                writeln!(f, "   Correct answer: {}", correct)?;
                writeln!(f, "   Your answer:    {}", given)?;
            }
            if let Some(sentence) = &review.answered_sentence {
                writeln!(f, "   You wrote:      {}", sentence)?;
            }
        }
        Ok(())
    }
}
