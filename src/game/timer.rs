// src/game/timer.rs

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time};

/// A tick from the countdown of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Identifies the timer that produced the tick.
    pub generation: u64,
}

/// Countdown task for the active question.
///
/// Ticks are sent every `period` until the timer is dropped; dropping aborts
/// the task. Ticks already queued when the timer is dropped still carry the
/// old generation, so receivers can discard them.
#[derive(Debug)]
pub struct QuestionTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl QuestionTimer {
    pub fn start(generation: u64, period: Duration, ticks: UnboundedSender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            loop {
                interval.tick().await;
                if ticks.send(Tick { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::trace!("Timer {} started", generation);
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::trace!("Timer {} stopped", self.generation);
    }
}
