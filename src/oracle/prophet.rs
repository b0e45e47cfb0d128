//! SpontaneousProphet module - unsolicited wisdom on a jittered schedule
//!
//! A background loop that periodically picks one of the stock predictions and
//! pushes it onto the shared answer channel, competing with responder workers
//! for the presenter's attention. It runs until the presenter side goes away.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::oracle::phrasebook::PhraseBook;
use crate::types::{Answer, AnswerSender, AnswerSource, OracleConfig};

pub struct SpontaneousProphet {
    answers: AnswerSender,
    phrases: Arc<PhraseBook>,
    config: Arc<OracleConfig>,
}

impl SpontaneousProphet {
    pub fn new(answers: AnswerSender, phrases: Arc<PhraseBook>, config: Arc<OracleConfig>) -> Self {
        Self {
            answers,
            phrases,
            config,
        }
    }

    /// Main execution loop - sleep, prophesy, repeat.
    pub async fn run(self) {
        info!("SpontaneousProphet is running...");
        let mut rng = StdRng::from_entropy();
        loop {
            let pause = rng.gen_range(self.config.prophecy_interval_ms.clone());
            sleep(Duration::from_millis(pause)).await;

            let prediction = self.phrases.random_prediction(&mut rng);
            let answer = Answer::new(prediction, AnswerSource::Spontaneous);
            if self.answers.send(answer).await.is_err() {
                break;
            }
        }
        info!("Answer channel closed. SpontaneousProphet shutting down.");
    }
}
