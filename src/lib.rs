//! Pythia - an ELIZA-like asynchronous oracle
//!
//! This crate provides the concurrent question/answer pipeline behind an
//! interactive oracle: unbounded question intake, one responder task per
//! question, a background stream of unsolicited prophecies, and a single
//! presenter that serializes everything onto one output stream.

pub mod oracle;
pub mod types;

// Re-export main types for convenience
pub use oracle::{Oracle, OracleHandle};
pub use types::{Answer, AnswerSource, OracleConfig, Question};
