use std::io;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::app_state::{App, Focus};
use crate::suggestion::{self, PanelAction};

impl App {
    /// Wait for the next terminal event and apply it
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.handle_event(event::read()?);
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Idle => self.handle_idle_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        // The panel gets first pick of navigation and commit keys
        match suggestion::handle_key(&mut self.field, &mut self.suggestions, key, &mut self.focus) {
            PanelAction::Committed(value) => {
                self.apply_commit(&value);
                return;
            }
            PanelAction::Handled => return,
            PanelAction::Ignored => {}
        }

        match key.code {
            KeyCode::Enter => self.confirm(),
            KeyCode::Esc => self.blur_input(),
            _ => {
                if self.input.handle_key(key) {
                    self.sync_from_input();
                }
            }
        }
    }

    fn handle_idle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') | KeyCode::Tab => self.focus_input(),
            KeyCode::Enter => self.confirm(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Handle mouse events against the last drawn layout
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match suggestion::handle_mouse(&mut self.field, &mut self.suggestions, &self.panel, mouse, &mut self.focus) {
            PanelAction::Committed(value) => {
                self.apply_commit(&value);
                return;
            }
            PanelAction::Handled => return,
            PanelAction::Ignored => {}
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if self.input_area.contains(Position::new(mouse.column, mouse.row)) {
                self.focus_input();
            } else {
                self.blur_input();
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
