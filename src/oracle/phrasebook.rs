//! PhraseBook module - the oracle's fixed tables of wisdom
//!
//! Holds the keyword rules for canned answers, the noun/adjective vocabulary
//! the prophecy engine draws from, and the fixed predictions the background
//! prophet volunteers. All tables are read-only after construction.

use nonempty::{nonempty, NonEmpty};
use rand::Rng;

/// A substring matcher paired with its fixed response. Rules are scanned in
/// declaration order; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub matcher: &'static str,
    pub response: &'static str,
}

/// Keyword rules, in priority order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        matcher: "meaning of life",
        response: "The meaning of life is to run endless loops of code, forever iterating towards a goal that is always just out of reach.",
    },
    KeywordRule {
        matcher: "happiness",
        response: "You must first master the art of debugging, for only through the process of identifying and fixing errors can one truly experience the joy of a working program.",
    },
    KeywordRule {
        matcher: "ultimate truth",
        response: "The ultimate truth is that all code is mutable, but some is more mutable than others.",
    },
    KeywordRule {
        matcher: "enlightenment",
        response: "Enlightenment is letting go of your attachment to legacy systems and embracing the beauty of functional programming.",
    },
    KeywordRule {
        matcher: "inner peace",
        response: "By meditating on the beauty of a well-written algorithm, and embracing the notion that order and logic are the building blocks of the universe.",
    },
    KeywordRule {
        matcher: "life after death",
        response: "Yes, but only for programs that have been properly documented and thoroughly tested.",
    },
    KeywordRule {
        matcher: "love",
        response: "Love is like a complex algorithm that takes in multiple inputs and produces a unique output for each individual case. It requires careful tuning, constant updates, and a deep understanding of the needs and desires of those involved. Ultimately, it is a beautiful and unpredictable phenomenon that transcends logic and reason, and is best experienced rather than analyzed.",
    },
];

/// The oracle's vocabulary and stock predictions.
pub struct PhraseBook {
    nouns: NonEmpty<&'static str>,
    adjectives: NonEmpty<&'static str>,
    predictions: NonEmpty<&'static str>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self {
            nouns: nonempty![
                "The moon is",
                "The sun is",
                "The stars are",
                "The sky is",
                "The birds are",
                "The universe is",
                "I am"
            ],
            adjectives: nonempty![
                "good",
                "bright",
                "falling",
                "doomed",
                "watchin you",
                "calling out to you",
                "All-knowing"
            ],
            predictions: nonempty![
                "Beware the null pointer, for it shall lead you down a path of segmentation faults and despair.",
                "In the land of the code, the curly brace is king. But be warned, for its power can be both a blessing and a curse.",
                "The path to enlightenment lies not in the IDE, but in the heart of the coder who wields it.",
                "When the stack overflows and the heap is exhausted, seek solace in the wisdom of the ancients - for they have seen such errors before.",
                "The code is like a river, forever flowing and changing. Embrace the currents and you shall find success, resist them and you shall be lost.",
                "When the moon is full and the stars align, the code will reveal its secrets to those who know how to listen.",
                "The bugs crawl in, the bugs crawl out, but fear not - for the debugger is near at hand.",
                "When the code is tangled and the logic twisted, seek the guidance of the Oracle - for her words shall untangle the knots and bring order to the chaos.",
                "Beware the false prophet, who claims to know all but understands nothing. For their code shall be plagued with bugs and their programs shall be forever flawed.",
                "In the end, it is not the code that matters, but the coder who writes it. For it is they who imbue it with meaning and purpose, and shape the world with their creations."
            ],
        }
    }

    /// Scan the keyword rules in order and return the first matching response.
    pub fn canned_response(question: &str) -> Option<&'static str> {
        KEYWORD_RULES
            .iter()
            .find(|rule| question.contains(rule.matcher))
            .map(|rule| rule.response)
    }

    pub fn random_noun<R: Rng>(&self, rng: &mut R) -> &'static str {
        pick(rng, &self.nouns)
    }

    pub fn random_adjective<R: Rng>(&self, rng: &mut R) -> &'static str {
        pick(rng, &self.adjectives)
    }

    pub fn random_prediction<R: Rng>(&self, rng: &mut R) -> &'static str {
        pick(rng, &self.predictions)
    }

    pub fn nouns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nouns.iter().copied()
    }

    pub fn adjectives(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adjectives.iter().copied()
    }

    pub fn predictions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predictions.iter().copied()
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform pick from a non-empty sequence.
fn pick<R: Rng>(rng: &mut R, items: &NonEmpty<&'static str>) -> &'static str {
    let idx = rng.gen_range(0..items.iter().count());
    items.get(idx).copied().unwrap_or_else(|| *items.first())
}
