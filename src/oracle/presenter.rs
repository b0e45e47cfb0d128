//! AnswerPresenter module - the single writer to the output stream
//!
//! The presenter is the only consumer of the answer channel. Because it
//! renders one answer at a time, frames from concurrently finishing workers
//! never interleave; the channel rendezvous is the only synchronization
//! involved. Each answer is revealed character by character with a fixed
//! delay, imitating the oracle speaking.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::types::{Answer, AnswerReceiver, OracleConfig};

/// Destination for rendered output. Stdout in production, an in-memory buffer
/// in tests.
#[async_trait]
pub trait OutputSink: Send {
    async fn write_chunk(&mut self, chunk: &str) -> Result<()>;
}

/// Writes chunks straight to stdout, flushing after each one so the
/// character-by-character reveal is actually visible.
pub struct StdoutSink {
    stdout: tokio::io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputSink for StdoutSink {
    async fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.stdout.write_all(chunk.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}

pub struct AnswerPresenter<S: OutputSink> {
    answers: AnswerReceiver,
    sink: S,
    config: Arc<OracleConfig>,
}

impl<S: OutputSink> AnswerPresenter<S> {
    pub fn new(answers: AnswerReceiver, sink: S, config: Arc<OracleConfig>) -> Self {
        Self {
            answers,
            sink,
            config,
        }
    }

    /// Main execution loop - drain the answer channel until every producer
    /// handle is gone, rendering one frame per answer.
    pub async fn run(mut self) {
        info!("AnswerPresenter is running...");
        while let Some(answer) = self.answers.recv().await {
            debug!(source = ?answer.source, "rendering answer");
            if let Err(e) = self.render(&answer).await {
                error!("Failed to render answer frame: {e}");
            }
        }
        info!("All producers gone. AnswerPresenter shutting down.");
    }

    /// Render one complete frame: header, revealed characters, trailing
    /// newline and prompt.
    async fn render(&mut self, answer: &Answer) -> Result<()> {
        self.sink
            .write_chunk(&format!("\r{}: ", self.config.name))
            .await?;

        let reveal_delay = Duration::from_millis(self.config.reveal_delay_ms);
        for c in answer.text.chars() {
            self.sink.write_chunk(&c.to_string()).await?;
            sleep(reveal_delay).await;
        }

        self.sink
            .write_chunk(&format!("\n{}", self.config.prompt))
            .await?;
        Ok(())
    }
}
