// src/bin/play.rs

use sentence_quiz::client::HttpQuestionSource;
use sentence_quiz::config::Config;
use sentence_quiz::game::GameController;
use sentence_quiz::terminal::{TerminalRenderer, parse_input};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // Stdout is the game screen, so logs only go to the file.
    let file_appender = tracing_appender::rolling::daily("logs", "play.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    // Blocking reads on a dedicated thread, so quitting never waits on stdin.
    let (input_tx, input_rx) = mpsc::channel(8);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.blocking_send(parse_input(&line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    let source = HttpQuestionSource::new(config.api_base_url.clone());
    let renderer = TerminalRenderer::new(std::io::stdout());
    let final_state = GameController::new(source, renderer).run(input_rx).await;

    tracing::info!(
        "Session ended after {} of {} questions",
        final_state.answers().len(),
        final_state.questions().len()
    );
}
