//! Oracle facade - wires the pipeline together and hands back one handle
//!
//! `Oracle::start` spawns the three long-lived tasks (dispatcher, prophet,
//! presenter) sharing a single answer channel, and returns an `OracleHandle`
//! that is the caller's only point of contact: submit questions, and shut the
//! whole thing down when done.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::oracle::dispatcher::IntakeDispatcher;
use crate::oracle::phrasebook::PhraseBook;
use crate::oracle::presenter::{AnswerPresenter, OutputSink};
use crate::oracle::prophet::SpontaneousProphet;
use crate::types::{OracleConfig, Question, QuestionSender};

pub struct Oracle;

impl Oracle {
    /// Start the oracle. Call once per process (or per test); all background
    /// activity stays tied to the returned handle.
    pub fn start<S>(config: OracleConfig, sink: S) -> OracleHandle
    where
        S: OutputSink + 'static,
    {
        let config = Arc::new(config);
        let phrases = Arc::new(PhraseBook::new());

        let (question_tx, question_rx) = mpsc::unbounded_channel::<Question>();
        // Capacity 1: a producer's send completes only as the presenter frees
        // up, which defines the total order of rendered answers.
        let (answer_tx, answer_rx) = mpsc::channel(1);

        let dispatcher = IntakeDispatcher::new(
            question_rx,
            answer_tx.clone(),
            Arc::clone(&phrases),
            Arc::clone(&config),
        );
        let prophet = SpontaneousProphet::new(answer_tx, Arc::clone(&phrases), Arc::clone(&config));
        let presenter = AnswerPresenter::new(answer_rx, sink, Arc::clone(&config));

        info!(name = %config.name, "Starting oracle pipeline");
        OracleHandle {
            questions: question_tx,
            dispatcher: tokio::spawn(dispatcher.run()),
            prophet: tokio::spawn(prophet.run()),
            presenter: tokio::spawn(presenter.run()),
        }
    }
}

/// The caller's handle to a running oracle.
pub struct OracleHandle {
    questions: QuestionSender,
    dispatcher: JoinHandle<()>,
    prophet: JoinHandle<()>,
    presenter: JoinHandle<()>,
}

impl OracleHandle {
    /// Submit a question. Fire-and-forget: never blocks, never fails the
    /// caller. Blank input (after trimming) is silently ignored.
    pub fn submit(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("ignoring blank submission");
            return;
        }
        if self.questions.send(Question::new(trimmed)).is_err() {
            warn!("oracle already shut down, question dropped");
        }
    }

    /// Stop accepting input, cancel the prophet, and wait for every in-flight
    /// answer to be rendered. The presenter only exits once all producer
    /// handles are dropped, so nothing already sent is lost.
    pub async fn shutdown(self) {
        drop(self.questions);
        self.prophet.abort();
        let _ = self.dispatcher.await;
        let _ = self.prophet.await;
        let _ = self.presenter.await;
        info!("Oracle pipeline shut down");
    }
}
