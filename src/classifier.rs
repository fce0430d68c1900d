//! Keyword sentiment tagging.
//!
//! Sentiment wants whole words ("sadly" is not "sad"), so it goes
//! through compiled word-boundary regexes. The deep-processing triggers
//! are plain case-sensitive substring checks and match anywhere, even
//! inside other words.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(happy|joy|excellent|good)\b").expect("hard-coded pattern compiles")
});

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(sad|bad|terrible|angry)\b").expect("hard-coded pattern compiles")
});

/// Substrings that flip the deep-processing note.
const DEEP_TRIGGERS: [&str; 4] = ["synergy", "conscious", "adaptive", "self-aware"];

/// Detected mood of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// What one pass over a query concluded. Produced fresh per call,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub deep_processing: bool,
}

impl Classification {
    /// Format the canned response for the query that produced this.
    pub fn response_for(&self, query: &str) -> String {
        let note = if self.deep_processing {
            "Deep cognitive processing triggered."
        } else {
            "Standard processing applied."
        };
        format!(
            "Query: '{}' processed. Detected sentiment: {}. {}",
            query, self.sentiment, note
        )
    }
}

/// Tag a query. Pure and infallible: empty or unrecognized input is
/// neutral, not an error. Positive wins when both keyword sets match.
pub fn classify(text: &str) -> Classification {
    let sentiment = if POSITIVE.is_match(text) {
        Sentiment::Positive
    } else if NEGATIVE.is_match(text) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let deep_processing = DEEP_TRIGGERS
        .iter()
        .any(|trigger| text.contains(trigger));

    Classification {
        sentiment,
        deep_processing,
    }
}
