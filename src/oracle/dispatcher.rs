//! IntakeDispatcher module - fans questions out to responder workers
//!
//! The dispatcher is the sole consumer of the inbound channel. It does no
//! blocking work of its own: every received question is immediately handed to
//! a freshly spawned ResponderWorker, so the submitter is never held up. There
//! is deliberately no bound on in-flight workers and no supervision; answers
//! are best-effort.

use std::sync::Arc;
use tracing::{debug, info};

use crate::oracle::phrasebook::PhraseBook;
use crate::oracle::responder::ResponderWorker;
use crate::types::{AnswerSender, OracleConfig, QuestionReceiver};

pub struct IntakeDispatcher {
    questions: QuestionReceiver,
    answers: AnswerSender,
    phrases: Arc<PhraseBook>,
    config: Arc<OracleConfig>,
}

impl IntakeDispatcher {
    pub fn new(
        questions: QuestionReceiver,
        answers: AnswerSender,
        phrases: Arc<PhraseBook>,
        config: Arc<OracleConfig>,
    ) -> Self {
        Self {
            questions,
            answers,
            phrases,
            config,
        }
    }

    /// Main execution loop - spawn one worker per question until the inbound
    /// channel closes.
    pub async fn run(mut self) {
        info!("IntakeDispatcher is running...");
        while let Some(question) = self.questions.recv().await {
            debug!(question = %question.text, "dispatching question");
            let worker = ResponderWorker::new(
                question,
                self.answers.clone(),
                Arc::clone(&self.phrases),
                Arc::clone(&self.config),
            );
            tokio::spawn(worker.run());
        }
        info!("Question intake closed. IntakeDispatcher shutting down.");
    }
}
