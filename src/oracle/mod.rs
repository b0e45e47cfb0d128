//! Oracle module - the concurrent question/answer pipeline
//!
//! Questions flow in through the facade, fan out to one responder task each,
//! and the answers funnel back through a single shared channel into the
//! presenter, which serializes them onto the output stream. A background
//! prophet shares the same channel for unsolicited predictions.

pub mod dispatcher;
pub mod facade;
pub mod phrasebook;
pub mod presenter;
pub mod prophecy;
pub mod prophet;
pub mod responder;

// Re-export main types
pub use dispatcher::IntakeDispatcher;
pub use facade::{Oracle, OracleHandle};
pub use phrasebook::{KeywordRule, PhraseBook, KEYWORD_RULES};
pub use presenter::{AnswerPresenter, OutputSink, StdoutSink};
pub use prophecy::ProphecyEngine;
pub use prophet::SpontaneousProphet;
pub use responder::{compose_answer, ResponderWorker};
