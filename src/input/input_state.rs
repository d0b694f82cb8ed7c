use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input the suggestion panel attaches to
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn with_text(text: &str) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(|s| s.as_str()).unwrap_or("")
    }

    /// Replace the whole line and park the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Feed a key to the text area; returns whether the text changed.
    ///
    /// Keys that would split the line are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if breaks_line(&key) {
            return false;
        }
        self.textarea.input(key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn breaks_line(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
