// src/models/question.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A run of two or more underscores marks one blank in a sentence.
static BLANK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("blank marker pattern is valid"));

/// A fill-in-the-blank sentence question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_blanks"))]
pub struct Question {
    pub id: i64,

    /// Sentence template, e.g. "The cat ___ on the mat.".
    #[validate(length(min = 1))]
    pub sentence: String,

    /// Candidate words offered to the player.
    pub options: Vec<String>,

    /// Expected words, one per blank, in order.
    pub correct_answer: Vec<String>,

    pub blanks: usize,
}

/// Shape of the persisted question file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Question {
    /// Number of blank markers found in the sentence template.
    pub fn marker_count(&self) -> usize {
        BLANK_MARKER.find_iter(&self.sentence).count()
    }

    /// Substitutes `words` into the blank markers in order.
    /// Markers without a (non-empty) word are left as they are.
    pub fn fill_blanks(&self, words: &[String]) -> String {
        let mut words = words.iter();
        BLANK_MARKER
            .replace_all(&self.sentence, |caps: &Captures| match words.next() {
                Some(word) if !word.is_empty() => word.clone(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn validate_blanks(question: &Question) -> Result<(), ValidationError> {
    if question.correct_answer.len() != question.blanks {
        return Err(ValidationError::new("answer_count_mismatch"));
    }
    if question.marker_count() != question.blanks {
        return Err(ValidationError::new("marker_count_mismatch"));
    }
    Ok(())
}
