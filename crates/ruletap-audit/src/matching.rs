//! Message-to-rule matching heuristics
//!
//! Registry definitions and captured messages share no identifier, so a
//! score is inferred from field, severity and text:
//!
//! | condition                                        | score              |
//! |--------------------------------------------------|--------------------|
//! | field differs (or message has no field)           | 0                  |
//! | severity differs                                 | 0                  |
//! | `message_match` substring present                | 1000               |
//! | otherwise                                        | 1 + keyword overlap|
//!
//! Keyword overlap counts distinct description words longer than two
//! characters that also appear as words in the message, both lowercased and
//! split on non-alphanumeric characters.

use std::collections::HashSet;

use ruletap_domain::constants::{
    FIELD_SEVERITY_BASE_SCORE, KEYWORD_MIN_LEN_EXCLUSIVE, MESSAGE_MATCH_SCORE,
};
use ruletap_domain::{CapturedMessage, RuleDefinition};

/// Score how well `message` identifies `definition`; 0 means no match
pub fn match_score(definition: &RuleDefinition, message: &CapturedMessage) -> u32 {
    if message.field.as_deref() != Some(definition.field.as_str()) {
        return 0;
    }
    if message.severity != definition.default_severity {
        return 0;
    }
    if let Some(needle) = definition.message_match.as_deref()
        && !needle.is_empty()
        && message.message.contains(needle)
    {
        return MESSAGE_MATCH_SCORE;
    }
    FIELD_SEVERITY_BASE_SCORE
        .saturating_add(keyword_overlap(&definition.check_description, &message.message))
}

/// Distinct description keywords that also occur in the message
pub fn keyword_overlap(description: &str, message: &str) -> u32 {
    let message_words: HashSet<String> = words(message).collect();
    let description_words: HashSet<String> = words(description)
        .filter(|w| w.chars().count() > KEYWORD_MIN_LEN_EXCLUSIVE)
        .collect();
    let shared = description_words
        .iter()
        .filter(|w| message_words.contains(*w))
        .count();
    u32::try_from(shared).unwrap_or(u32::MAX)
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Index of the best unclaimed candidate and its score
///
/// Candidates are scanned in order and only a strictly higher score
/// replaces the current best, so the earliest of equal scores wins.
/// Returns `None` when nothing scores above 0.
pub fn best_match<'a, I>(definition: &RuleDefinition, candidates: I) -> Option<(usize, u32)>
where
    I: IntoIterator<Item = (usize, &'a CapturedMessage)>,
{
    let mut best: Option<(usize, u32)> = None;
    for (index, message) in candidates {
        let score = match_score(definition, message);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((index, score));
        }
    }
    best
}
