//! Candidate filtering
//!
//! A candidate matches when it contains the input as a substring and starts
//! with the same character as the input. Matching is case-sensitive and
//! compares characters literally.

use serde::Deserialize;

/// What to suggest while the input is still empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Offer nothing until the first character is typed.
    #[default]
    Hide,
    /// Offer every candidate before anything is typed.
    ShowAll,
}

/// Filter `candidates` against `text` using the default empty-input policy.
pub fn filter_candidates<'a>(candidates: &'a [String], text: &str) -> Vec<&'a str> {
    filter_candidates_with(candidates, text, EmptyInputPolicy::default())
}

/// Filter `candidates` against `text`, preserving candidate order.
pub fn filter_candidates_with<'a>(
    candidates: &'a [String],
    text: &str,
    empty_input: EmptyInputPolicy,
) -> Vec<&'a str> {
    let Some(first) = text.chars().next() else {
        return match empty_input {
            EmptyInputPolicy::ShowAll => candidates.iter().map(String::as_str).collect(),
            EmptyInputPolicy::Hide => Vec::new(),
        };
    };

    candidates
        .iter()
        .map(String::as_str)
        .filter(|candidate| candidate.chars().next() == Some(first) && candidate.contains(text))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
