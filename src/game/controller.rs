// src/game/controller.rs

use std::time::Duration;

use tokio::sync::mpsc;

use crate::client::QuestionSource;

use super::{
    state::{GameEvent, GameState, Transition},
    timer::{QuestionTimer, Tick},
    view::View,
};

/// Countdown granularity; `TIMER_DURATION` is measured in these.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Input coming from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Answer(Vec<String>),
    Restart,
    Quit,
}

/// Front end the controller draws on.
pub trait Renderer {
    fn render(&mut self, view: &View<'_>);

    /// A submission had the wrong number of words and was not recorded.
    fn rejected(&mut self, _expected: usize, _got: usize) {}
}

/// Drives one game session: fetches the questions, runs the countdown and
/// feeds player input into the `GameState`.
pub struct GameController<S, R> {
    source: S,
    renderer: R,
    state: GameState,
    timer: Option<QuestionTimer>,
    generation: u64,
    ticks: mpsc::UnboundedSender<Tick>,
    tick_rx: Option<mpsc::UnboundedReceiver<Tick>>,
}

impl<S, R> GameController<S, R>
where
    S: QuestionSource,
    R: Renderer,
{
    pub fn new(source: S, renderer: R) -> Self {
        let (ticks, tick_rx) = mpsc::unbounded_channel();
        Self {
            source,
            renderer,
            state: GameState::new(),
            timer: None,
            generation: 0,
            ticks,
            tick_rx: Some(tick_rx),
        }
    }

    /// Runs the session until the player quits or `input` closes.
    /// Returns the final state.
    pub async fn run(mut self, mut input: mpsc::Receiver<PlayerInput>) -> GameState {
        let Some(mut tick_rx) = self.tick_rx.take() else {
            return self.state;
        };

        self.render();
        let event = match self.source.fetch_questions().await {
            Ok(questions) => {
                tracing::info!("Fetched {} questions", questions.len());
                GameEvent::QuestionsLoaded(questions)
            }
            Err(e) => {
                tracing::error!("Failed to fetch questions: {}", e);
                GameEvent::LoadFailed(e.to_string())
            }
        };
        self.dispatch(event);

        loop {
            tokio::select! {
                Some(tick) = tick_rx.recv() => {
                    if self.timer.as_ref().map(QuestionTimer::generation) == Some(tick.generation) {
                        self.dispatch(GameEvent::Tick);
                    } else {
                        tracing::trace!("Discarding stale tick from timer {}", tick.generation);
                    }
                }
                received = input.recv() => match received {
                    Some(PlayerInput::Answer(words)) => self.dispatch(GameEvent::Submit(words)),
                    Some(PlayerInput::Restart) => self.dispatch(GameEvent::Restart),
                    Some(PlayerInput::Quit) | None => break,
                },
            }
        }

        self.timer = None;
        self.state
    }

    fn dispatch(&mut self, event: GameEvent) {
        let transition = self.state.apply(event);
        match transition {
            Transition::Ignored => return,
            Transition::Rejected { expected, got } => {
                tracing::warn!("Rejected answer with {} words, expected {}", got, expected);
                self.renderer.rejected(expected, got);
                return;
            }
            t if t.changes_question() => self.reset_timer(),
            _ => {}
        }
        self.render();
    }

    /// Releases the previous question's timer, then acquires one for the
    /// new question if the game is still in play.
    fn reset_timer(&mut self) {
        self.timer = None;
        if self.state.is_playing() {
            self.generation += 1;
            self.timer = Some(QuestionTimer::start(
                self.generation,
                TICK_PERIOD,
                self.ticks.clone(),
            ));
        }
    }

    fn render(&mut self) {
        let view = self.state.view();
        self.renderer.render(&view);
    }
}
