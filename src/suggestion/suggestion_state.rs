use crate::scroll::ScrollState;

/// Host-owned state shared with a [`SuggestionField`].
///
/// Holds the input text and the editing flag that gates the suggestion panel,
/// plus the keyboard highlight and scroll window of the panel. The field reads
/// this on every layout pass and writes it when a suggestion is committed.
///
/// [`SuggestionField`]: super::SuggestionField
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    text: String,
    editing: bool,
    selected: usize,
    scroll: ScrollState,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Index of the highlighted match
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Replace the input text after the user typed.
    ///
    /// Opens the panel and moves the highlight back to the first match.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.reset_navigation();
        }
        self.editing = true;
    }

    pub fn begin_editing(&mut self) {
        if !self.editing {
            self.reset_navigation();
        }
        self.editing = true;
    }

    pub fn end_editing(&mut self) {
        self.editing = false;
    }

    /// Write a committed suggestion into the input and close the panel.
    pub fn commit(&mut self, value: impl Into<String>) {
        self.text = value.into();
        self.editing = false;
        self.reset_navigation();
    }

    pub(crate) fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }

    pub(crate) fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    fn reset_navigation(&mut self) {
        self.selected = 0;
        self.scroll.reset();
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
