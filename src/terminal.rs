// src/terminal.rs

use std::io::{self, Write};

use crate::{
    config::TIMER_DURATION,
    game::{PlayerInput, Renderer, View},
};

/// Turns a line typed by the player into input for the controller.
///
/// `:q`/`quit` quits, `:r`/`restart` restarts. Anything else is an answer:
/// words separated by commas, one per blank.
pub fn parse_input(line: &str) -> PlayerInput {
    match line.trim() {
        ":q" | "quit" => PlayerInput::Quit,
        ":r" | "restart" => PlayerInput::Restart,
        _ => PlayerInput::Answer(line.split(',').map(|w| w.trim().to_string()).collect()),
    }
}

/// Plain-text front end.
///
/// Prints each question once, then the countdown at every ten seconds and
/// for the last five.
pub struct TerminalRenderer<W: Write> {
    out: W,
    shown_question: Option<usize>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown_question: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &View<'_>) -> io::Result<()> {
        match view {
            View::Loading => {
                self.shown_question = None;
                writeln!(self.out, "Loading questions...")?;
            }
            View::Error(message) => {
                self.shown_question = None;
                writeln!(self.out, "Error: {}", message)?;
            }
            View::Complete(summary) => {
                self.shown_question = None;
                writeln!(self.out)?;
                write!(self.out, "{}", summary)?;
                writeln!(self.out)?;
                writeln!(self.out, "Play again? Type :r to restart or :q to quit.")?;
            }
            View::Question {
                number,
                total,
                question,
                time_remaining,
            } => {
                let fresh = *time_remaining == TIMER_DURATION;
                if fresh || self.shown_question != Some(*number) {
                    self.shown_question = Some(*number);
                    writeln!(self.out)?;
                    writeln!(self.out, "Sentence Construction [{}/{}]", number, total)?;
                    writeln!(self.out, "{}", question.sentence)?;
                    writeln!(self.out, "Options: {}", question.options.join(", "))?;
                    writeln!(
                        self.out,
                        "Fill {} blank(s), separated by commas. (:r restart, :q quit)",
                        question.blanks
                    )?;
                    writeln!(self.out, "⏱ {}s", time_remaining)?;
                } else if *time_remaining % 10 == 0 || *time_remaining <= 5 {
                    writeln!(self.out, "⏱ {}s", time_remaining)?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, view: &View<'_>) {
        if let Err(e) = self.write_view(view) {
            tracing::warn!("Failed to draw view: {}", e);
        }
    }

    fn rejected(&mut self, expected: usize, got: usize) {
        if let Err(e) = writeln!(self.out, "Expected {} word(s), got {}. Try again.", expected, got) {
            tracing::warn!("Failed to draw notice: {}", e);
        }
    }
}
