use ratatui::layout::Rect;

use crate::input::InputState;
use crate::suggestion::{DismissFocus, PanelLayout, SuggestionField, SuggestionState};

/// Whether the text input has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Idle,
}

impl DismissFocus for Focus {
    fn dismiss_focus(&mut self) {
        *self = Focus::Idle;
    }
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionState,
    pub field: SuggestionField,
    pub focus: Focus,
    /// Panel as last drawn, for mouse hit testing
    pub panel: PanelLayout,
    /// Input field area as last drawn
    pub input_area: Rect,
    should_quit: bool,
    output: Option<String>,
}

impl App {
    /// Create an App with the input focused and the panel open
    pub fn new(field: SuggestionField) -> Self {
        let mut suggestions = SuggestionState::new();
        suggestions.begin_editing();

        Self {
            input: InputState::new(),
            suggestions,
            field,
            focus: Focus::Input,
            panel: PanelLayout::Removed,
            input_area: Rect::default(),
            should_quit: false,
            output: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text to print on exit, set only when the user confirmed with Enter
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Current input text
    pub fn text(&self) -> &str {
        self.suggestions.text()
    }

    /// Give the input focus back and reopen the panel
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.suggestions.begin_editing();
    }

    /// Drop focus from the input and close the panel
    pub fn blur_input(&mut self) {
        self.focus.dismiss_focus();
        self.suggestions.end_editing();
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(super) fn confirm(&mut self) {
        self.output = Some(self.suggestions.text().to_string());
        self.should_quit = true;
    }

    /// Mirror the text input into the suggestion state after typing
    pub(super) fn sync_from_input(&mut self) {
        self.suggestions.set_text(self.input.text());
    }

    /// Mirror a committed suggestion back into the text input
    pub(super) fn apply_commit(&mut self, value: &str) {
        self.input.set_text(value);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
