//! Message splitter
//!
//! Splits a free-text issue message into a leading clause and a trailing
//! "highlight" clause that the table renders emphasized on its own line.
//!
//! The pattern list below is evaluated in order and the first match wins;
//! patterns are never combined. The order is a contract: several patterns
//! are overlapping supersets (the generic "N units available" matcher must
//! run after the "Only N units available" and replenishment variants, or
//! it steals part of their context). Two case variants of the restricted
//! words phrasing exist upstream; both are kept verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::SplitMessage;

struct Pattern {
    name: &'static str,
    regex: Regex,
}

impl Pattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::new("restricted-characters", r"The Characters used are:"),
        Pattern::new("restricted-words-capital", r"The words Used are"),
        Pattern::new("restricted-words", r"The words used are"),
        Pattern::new("reason", r"Reason:"),
        Pattern::new("problem", r"Problem:"),
        Pattern::new("only-units-available", r"Only \d+ units? available"),
        Pattern::new(
            "replenishment-recommendation",
            r"Amazon recommends replenishing \d+ units?",
        ),
        Pattern::new("unfulfillable-units", r"\d+ units? (?:are|is) unfulfillable"),
        Pattern::new("page-views", r"\d+ page views?"),
        Pattern::new("units-available", r"\d+ units? available"),
    ]
});

/// Split a message at the first matching highlight pattern
///
/// The highlight runs from the match start to the end of the message; the
/// leading clause is whatever precedes it. No match returns the whole
/// message as the leading clause; empty input returns two empty strings.
pub fn split_message(message: &str) -> SplitMessage {
    if message.is_empty() {
        return SplitMessage::default();
    }

    for pattern in PATTERNS.iter() {
        if let Some(m) = pattern.regex.find(message) {
            return SplitMessage {
                main_text: message[..m.start()].trim_end().to_string(),
                highlighted_text: message[m.start()..].to_string(),
            };
        }
    }

    SplitMessage {
        main_text: message.to_string(),
        highlighted_text: String::new(),
    }
}

/// Name of the pattern that would split the given message, if any
pub fn matching_pattern(message: &str) -> Option<&'static str> {
    PATTERNS
        .iter()
        .find(|p| p.regex.is_match(message))
        .map(|p| p.name)
}
