//! Terminal text field with an attached autocomplete suggestion panel.
//!
//! The [`suggestion`] module holds the component itself: a fixed
//! [`CandidateSet`], the host-owned [`SuggestionState`], and the
//! [`SuggestionField`] that filters, lays out and commits suggestions.
//! The [`app`] module is a small host that wires the field to a text input.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod scroll;
pub mod suggestion;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use error::SuggestFieldError;
pub use suggestion::{
    CandidateSet, DismissFocus, EmptyInputPolicy, PanelLayout, SuggestionField, SuggestionState,
    filter_candidates, filter_candidates_with,
};
