// tests/game_tests.rs

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use sentence_quiz::{
    client::{FetchError, QuestionSource},
    config::TIMER_DURATION,
    game::{GameController, GameState, PlayerInput, Renderer, View},
    models::question::Question,
};
use tokio::{sync::mpsc, task::JoinHandle};

/// Serves a fixed list and counts how often it was asked.
struct StaticSource {
    questions: Vec<Question>,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl QuestionSource for StaticSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.clone())
    }
}

struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, FetchError> {
        Err(FetchError::Status(500))
    }
}

/// Owned copy of what was rendered.
#[derive(Debug, Clone, PartialEq)]
enum Frame {
    Loading,
    Error(String),
    Complete { score: usize, total: usize },
    Question { number: usize, time_remaining: u32 },
    Rejected { expected: usize, got: usize },
}

struct RecordingRenderer(mpsc::UnboundedSender<Frame>);

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &View<'_>) {
        let frame = match view {
            View::Loading => Frame::Loading,
            View::Error(message) => Frame::Error(message.to_string()),
            View::Complete(summary) => Frame::Complete {
                score: summary.score,
                total: summary.total,
            },
            View::Question {
                number,
                time_remaining,
                ..
            } => Frame::Question {
                number: *number,
                time_remaining: *time_remaining,
            },
        };
        let _ = self.0.send(frame);
    }

    fn rejected(&mut self, expected: usize, got: usize) {
        let _ = self.0.send(Frame::Rejected { expected, got });
    }
}

struct Harness {
    input: mpsc::Sender<PlayerInput>,
    frames: mpsc::UnboundedReceiver<Frame>,
    game: JoinHandle<GameState>,
}

impl Harness {
    fn start<S: QuestionSource + 'static>(source: S) -> Self {
        let (frame_tx, frames) = mpsc::unbounded_channel();
        let (input, input_rx) = mpsc::channel(16);
        let controller = GameController::new(source, RecordingRenderer(frame_tx));
        let game = tokio::spawn(controller.run(input_rx));
        Self {
            input,
            frames,
            game,
        }
    }

    async fn answer(&self, words: &[&str]) {
        let words = words.iter().map(|w| w.to_string()).collect();
        self.input.send(PlayerInput::Answer(words)).await.unwrap();
    }

    /// Waits for the first frame matching `pred`, collecting the ones before it.
    async fn wait_for(&mut self, pred: impl Fn(&Frame) -> bool) -> Vec<Frame> {
        let mut seen = Vec::new();
        while let Some(frame) = self.frames.recv().await {
            let done = pred(&frame);
            seen.push(frame);
            if done {
                return seen;
            }
        }
        panic!("renderer closed before expected frame; saw {:?}", seen);
    }

    async fn quit(self) -> GameState {
        self.input.send(PlayerInput::Quit).await.unwrap();
        self.game.await.unwrap()
    }
}

fn question(id: i64, answer: &[&str]) -> Question {
    Question {
        id,
        sentence: format!("Question {} {}", id, "___ ".repeat(answer.len())),
        options: answer.iter().map(|s| s.to_string()).collect(),
        correct_answer: answer.iter().map(|s| s.to_string()).collect(),
        blanks: answer.len(),
    }
}

fn static_source(questions: Vec<Question>) -> (StaticSource, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = StaticSource {
        questions,
        fetches: fetches.clone(),
    };
    (source, fetches)
}

fn is_complete(frame: &Frame) -> bool {
    matches!(frame, Frame::Complete { .. })
}

#[tokio::test(start_paused = true)]
async fn answers_every_question_and_completes() {
    let (source, fetches) = static_source(vec![question(1, &["sat"]), question(2, &["went", "store"])]);
    let mut harness = Harness::start(source);

    harness.answer(&["Sat"]).await;
    harness.answer(&["went", "shop"]).await;
    let frames = harness.wait_for(is_complete).await;

    assert_eq!(frames.first(), Some(&Frame::Loading));
    assert_eq!(frames.last(), Some(&Frame::Complete { score: 1, total: 2 }));

    let state = harness.quit().await;
    assert!(state.is_game_complete());
    assert_eq!(state.answers().len(), 2);
    assert!(state.answers()[0].is_correct);
    assert!(!state.answers()[1].is_correct);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn records_elapsed_time() {
    let (source, _) = static_source(vec![question(1, &["sat"])]);
    let mut harness = Harness::start(source);

    harness
        .wait_for(|f| matches!(f, Frame::Question { time_remaining: 25, .. }))
        .await;
    harness.answer(&["sat"]).await;
    harness.wait_for(is_complete).await;

    let state = harness.quit().await;
    assert_eq!(state.answers()[0].time_spent, 5);
}

#[tokio::test(start_paused = true)]
async fn timeout_records_empty_answer() {
    let (source, _) = static_source(vec![question(1, &["sat", "mat"])]);
    let mut harness = Harness::start(source);

    let frames = harness.wait_for(is_complete).await;

    let countdown: Vec<u32> = frames
        .iter()
        .filter_map(|f| match f {
            Frame::Question { time_remaining, .. } => Some(*time_remaining),
            _ => None,
        })
        .collect();
    let expected: Vec<u32> = (1..=TIMER_DURATION).rev().collect();
    assert_eq!(countdown, expected);

    let state = harness.quit().await;
    let response = &state.answers()[0];
    assert_eq!(response.user_answer, vec!["", ""]);
    assert!(!response.is_correct);
    assert_eq!(response.time_spent, TIMER_DURATION);
}

#[tokio::test(start_paused = true)]
async fn new_question_gets_a_fresh_countdown() {
    let (source, _) = static_source(vec![question(1, &["a"]), question(2, &["b"])]);
    let mut harness = Harness::start(source);

    harness
        .wait_for(|f| matches!(f, Frame::Question { number: 1, time_remaining: 20 }))
        .await;
    harness.answer(&["a"]).await;

    let frames = harness
        .wait_for(|f| matches!(f, Frame::Question { number: 2, time_remaining: 27 }))
        .await;
    let second: Vec<u32> = frames
        .iter()
        .filter_map(|f| match f {
            Frame::Question { number: 2, time_remaining } => Some(*time_remaining),
            _ => None,
        })
        .collect();
    assert_eq!(second, vec![30, 29, 28, 27]);

    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn restart_reuses_fetched_questions() {
    let (source, fetches) = static_source(vec![question(1, &["a"])]);
    let mut harness = Harness::start(source);

    harness.answer(&["a"]).await;
    harness.wait_for(is_complete).await;

    harness.input.send(PlayerInput::Restart).await.unwrap();
    harness
        .wait_for(|f| matches!(f, Frame::Question { number: 1, time_remaining: 30 }))
        .await;

    let state = harness.quit().await;
    assert_eq!(state.current_question_index(), 0);
    assert!(state.answers().is_empty());
    assert_eq!(state.questions().len(), 1);
    assert!(!state.is_game_complete());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn wrong_word_count_is_rejected() {
    let (source, _) = static_source(vec![question(1, &["a", "b"])]);
    let mut harness = Harness::start(source);

    harness.answer(&["a"]).await;
    harness
        .wait_for(|f| matches!(f, Frame::Rejected { expected: 2, got: 1 }))
        .await;
    harness.answer(&["A", "B"]).await;
    let frames = harness.wait_for(is_complete).await;

    assert_eq!(frames.last(), Some(&Frame::Complete { score: 1, total: 1 }));
    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_shows_error() {
    let mut harness = Harness::start(FailingSource);

    let frames = harness.wait_for(|f| matches!(f, Frame::Error(_))).await;
    assert_eq!(
        frames.last(),
        Some(&Frame::Error("Failed to fetch questions (HTTP 500)".to_string()))
    );

    // No countdown runs after a failure.
    harness.answer(&["a"]).await;
    let state = harness.quit().await;
    assert!(state.answers().is_empty());
    assert_eq!(state.error(), Some("Failed to fetch questions (HTTP 500)"));
}

#[tokio::test(start_paused = true)]
async fn restart_does_not_leave_the_error_screen() {
    let mut harness = Harness::start(FailingSource);
    harness.wait_for(|f| matches!(f, Frame::Error(_))).await;

    harness.input.send(PlayerInput::Restart).await.unwrap();
    harness.input.send(PlayerInput::Quit).await.unwrap();
    let Harness { mut frames, game, .. } = harness;
    let state = game.await.unwrap();

    // Nothing is drawn over the error.
    assert_eq!(frames.try_recv().ok(), None);
    assert_eq!(state.error(), Some("Failed to fetch questions (HTTP 500)"));
    assert!(!state.is_game_complete());
    assert!(matches!(state.view(), View::Error(_)));
}

#[tokio::test(start_paused = true)]
async fn empty_question_list_completes_immediately() {
    let (source, _) = static_source(vec![]);
    let mut harness = Harness::start(source);

    let frames = harness.wait_for(is_complete).await;
    assert_eq!(frames, vec![Frame::Loading, Frame::Complete { score: 0, total: 0 }]);

    harness.quit().await;
}

#[tokio::test(start_paused = true)]
async fn closing_input_ends_the_session() {
    let (source, _) = static_source(vec![question(1, &["a"])]);
    let mut harness = Harness::start(source);
    harness.wait_for(|f| matches!(f, Frame::Question { .. })).await;

    let Harness { input, game, .. } = harness;
    drop(input);
    let state = game.await.unwrap();
    assert!(state.is_playing());
    assert!(state.answers().is_empty());
}
