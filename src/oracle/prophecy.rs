//! ProphecyEngine module - generates cryptic answers for unmatched questions
//!
//! The engine echoes the question's longest word back at the asker and pads it
//! with a randomly chosen noun/adjective pair from the PhraseBook. Structure
//! is deterministic, content is randomized.

use rand::Rng;
use std::sync::Arc;

use crate::oracle::phrasebook::PhraseBook;

pub struct ProphecyEngine {
    phrases: Arc<PhraseBook>,
}

impl ProphecyEngine {
    pub fn new(phrases: Arc<PhraseBook>) -> Self {
        Self { phrases }
    }

    /// Compose a prophecy for the given question text.
    ///
    /// The longest whitespace-delimited token leads; on a length tie the first
    /// occurrence wins. An empty or whitespace-only question still produces a
    /// prophecy, led by the empty token.
    pub fn prophesy<R: Rng>(&self, question: &str, rng: &mut R) -> String {
        let longest = longest_token(question);
        let noun = self.phrases.random_noun(rng);
        let adjective = self.phrases.random_adjective(rng);
        format!("{longest}... {noun} {adjective}. ")
    }
}

/// Longest whitespace-delimited token, first occurrence winning ties.
fn longest_token(text: &str) -> &str {
    let mut longest = "";
    for word in text.split_whitespace() {
        if word.len() > longest.len() {
            longest = word;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> ProphecyEngine {
        ProphecyEngine::new(Arc::new(PhraseBook::new()))
    }

    #[test]
    fn longest_token_picks_the_longest_word() {
        assert_eq!(longest_token("will it rain tomorrow"), "tomorrow");
    }

    #[test]
    fn longest_token_ties_resolve_to_first_occurrence() {
        assert_eq!(longest_token("cat dog owl"), "cat");
        assert_eq!(longest_token("xyz abc"), "xyz");
    }

    #[test]
    fn longest_token_of_blank_input_is_empty() {
        assert_eq!(longest_token(""), "");
        assert_eq!(longest_token("   \t  "), "");
    }

    #[test]
    fn prophecy_leads_with_longest_token() {
        let mut rng = StdRng::seed_from_u64(1);
        let answer = engine().prophesy("why is the firmament silent", &mut rng);
        assert!(answer.starts_with("firmament... "));
        assert!(answer.ends_with(". "));
    }

    #[test]
    fn prophecy_on_empty_input_starts_with_ellipsis() {
        let mut rng = StdRng::seed_from_u64(2);
        let answer = engine().prophesy("", &mut rng);
        assert!(answer.starts_with("... "));
    }

    #[test]
    fn prophecy_content_is_drawn_from_the_vocabulary() {
        let book = PhraseBook::new();
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let answer = engine.prophesy("xyz abc", &mut rng);
            let tail = answer
                .strip_prefix("xyz... ")
                .expect("prophecy must lead with the longest token");
            let tail = tail.strip_suffix(". ").expect("prophecy must end with '. '");
            let matched = book.nouns().any(|noun| {
                tail.strip_prefix(noun)
                    .and_then(|rest| rest.strip_prefix(' '))
                    .map(|adj| book.adjectives().any(|a| a == adj))
                    .unwrap_or(false)
            });
            assert!(matched, "out-of-vocabulary prophecy: {answer:?}");
        }
    }
}
