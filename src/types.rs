//! Core types and channel aliases for the Pythia oracle pipeline.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tokio::sync::mpsc;

/// A question submitted to the oracle. Immutable once created; consumed by
/// exactly one responder task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Raw question text, already trimmed at the intake boundary
    pub text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
    /// Fixed response triggered by a keyword rule
    Canned,
    /// Generated by the prophecy engine as a fallback
    Prophecy,
    /// Emitted by the background prophet without being asked
    Spontaneous,
}

/// A single answer bound for the presenter. Produced by exactly one task,
/// rendered exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text as it should be revealed
    pub text: String,
    /// Provenance, used for logging only
    pub source: AnswerSource,
}

impl Answer {
    pub fn new(text: impl Into<String>, source: AnswerSource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

// --- Communication channels for the oracle pipeline ---

/// Inbound side: callers hand questions to the dispatcher. Unbounded so
/// `submit` never blocks the caller, whatever the submission rate.
pub type QuestionSender = mpsc::UnboundedSender<Question>;
pub type QuestionReceiver = mpsc::UnboundedReceiver<Question>;

/// Outbound side: responders and the prophet compete for the presenter.
/// Capacity 1, so a send rendezvouses with the presenter's pace; the order in
/// which sends are accepted is the order answers are rendered.
pub type AnswerSender = mpsc::Sender<Answer>;
pub type AnswerReceiver = mpsc::Receiver<Answer>;

/// Build-time tunables for the oracle. Defaults match the classic behavior:
/// answers arrive after 2-6 seconds of deliberation, unsolicited prophecies
/// every 20-30 seconds, characters revealed 30ms apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// The oracle's name, used as the answer-frame header
    pub name: String,
    /// Where the oracle sits (banner text only)
    pub venue: String,
    /// Prompt marker appended after every rendered answer
    pub prompt: String,
    /// Uniform random deliberation delay per question, in milliseconds
    pub deliberation_ms: Range<u64>,
    /// Uniform random pause between unsolicited prophecies, in milliseconds
    pub prophecy_interval_ms: Range<u64>,
    /// Fixed delay between revealed characters, in milliseconds
    pub reveal_delay_ms: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            name: "Pythia".to_string(),
            venue: "Delphi".to_string(),
            prompt: "> ".to_string(),
            deliberation_ms: 2_000..6_000,
            prophecy_interval_ms: 20_000..30_000,
            reveal_delay_ms: 30,
        }
    }
}
