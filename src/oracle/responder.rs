//! ResponderWorker module - answers a single question, eventually
//!
//! One worker per question. It deliberates for a random interval, tries the
//! keyword rules, falls back to the prophecy engine, and delivers exactly one
//! answer before terminating.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::oracle::phrasebook::PhraseBook;
use crate::oracle::prophecy::ProphecyEngine;
use crate::types::{Answer, AnswerSender, AnswerSource, OracleConfig, Question};

pub struct ResponderWorker {
    question: Question,
    answers: AnswerSender,
    phrases: Arc<PhraseBook>,
    config: Arc<OracleConfig>,
}

impl ResponderWorker {
    pub fn new(
        question: Question,
        answers: AnswerSender,
        phrases: Arc<PhraseBook>,
        config: Arc<OracleConfig>,
    ) -> Self {
        Self {
            question,
            answers,
            phrases,
            config,
        }
    }

    /// Deliberate, compose, and deliver the single answer for this question.
    pub async fn run(self) {
        let mut rng = StdRng::from_entropy();

        // Keep them waiting. Pythia only prophesied on the seventh day of
        // each month.
        let delay = rng.gen_range(self.config.deliberation_ms.clone());
        sleep(Duration::from_millis(delay)).await;

        let answer = compose_answer(&self.question, &self.phrases, &mut rng);
        debug!(
            source = ?answer.source,
            question = %self.question.text,
            "responder composed answer"
        );

        // The send blocks until the presenter accepts it; that rendezvous is
        // what serializes concurrent answers.
        if self.answers.send(answer).await.is_err() {
            warn!(
                question = %self.question.text,
                "presenter gone, dropping answer"
            );
        }
    }
}

/// Resolve a question to its answer text: first matching keyword rule, or a
/// generated prophecy when no rule applies.
pub fn compose_answer<R: Rng>(question: &Question, phrases: &Arc<PhraseBook>, rng: &mut R) -> Answer {
    match PhraseBook::canned_response(&question.text) {
        Some(response) => Answer::new(response, AnswerSource::Canned),
        None => {
            let engine = ProphecyEngine::new(Arc::clone(phrases));
            Answer::new(engine.prophesy(&question.text, rng), AnswerSource::Prophecy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::phrasebook::KEYWORD_RULES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keyword_question_gets_the_canned_answer() {
        let phrases = Arc::new(PhraseBook::new());
        let mut rng = StdRng::seed_from_u64(11);
        let question = Question::new("What is the meaning of life?");
        let answer = compose_answer(&question, &phrases, &mut rng);
        assert_eq!(answer.source, AnswerSource::Canned);
        assert_eq!(answer.text, KEYWORD_RULES[0].response);
    }

    #[test]
    fn unmatched_question_falls_back_to_prophecy() {
        let phrases = Arc::new(PhraseBook::new());
        let mut rng = StdRng::seed_from_u64(12);
        let question = Question::new("xyz abc");
        let answer = compose_answer(&question, &phrases, &mut rng);
        assert_eq!(answer.source, AnswerSource::Prophecy);
        assert!(answer.text.starts_with("xyz... "));
    }
}
