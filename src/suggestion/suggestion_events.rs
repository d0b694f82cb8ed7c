//! Keyboard and mouse handling for the suggestion panel

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::field::SuggestionField;
use super::focus::DismissFocus;
use super::suggestion_layout::PanelLayout;
use super::suggestion_state::SuggestionState;

const WHEEL_SCROLL_ROWS: usize = 1;

/// What the panel did with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Not for the panel; the host should handle it.
    Ignored,
    Handled,
    /// A suggestion was written into the input text.
    Committed(String),
}

/// Handle a key press while the text input has focus.
///
/// Only navigation, commit and dismiss keys are consumed. Everything else is
/// left for the host's text input.
pub fn handle_key<F>(
    field: &mut SuggestionField,
    state: &mut SuggestionState,
    key: KeyEvent,
    focus: &mut F,
) -> PanelAction
where
    F: DismissFocus + ?Sized,
{
    if !state.is_editing() {
        return PanelAction::Ignored;
    }

    if key.code == KeyCode::Esc {
        state.end_editing();
        return PanelAction::Handled;
    }

    if field.match_count(state) == 0 {
        return PanelAction::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Down => field.select_next(state),
        KeyCode::Char('n') if ctrl => field.select_next(state),
        KeyCode::Up => field.select_previous(state),
        KeyCode::Char('p') if ctrl => field.select_previous(state),
        KeyCode::Enter | KeyCode::Tab => {
            return match field.select_highlighted(state, focus) {
                Some(value) => PanelAction::Committed(value),
                None => PanelAction::Ignored,
            };
        }
        _ => return PanelAction::Ignored,
    }

    PanelAction::Handled
}

/// Handle a mouse event against the most recently drawn panel layout.
pub fn handle_mouse<F>(
    field: &mut SuggestionField,
    state: &mut SuggestionState,
    layout: &PanelLayout,
    mouse: MouseEvent,
    focus: &mut F,
) -> PanelAction
where
    F: DismissFocus + ?Sized,
{
    let Some(panel) = layout.panel() else {
        return PanelAction::Ignored;
    };
    if !state.is_editing() || !panel.contains(mouse.column, mouse.row) {
        return PanelAction::Ignored;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match panel
                .row_at(mouse.column, mouse.row)
                .and_then(|index| field.select(state, index, focus))
            {
                Some(value) => PanelAction::Committed(value),
                None => PanelAction::Handled,
            }
        }
        MouseEventKind::ScrollDown => {
            field.scroll_down(state, WHEEL_SCROLL_ROWS);
            PanelAction::Handled
        }
        MouseEventKind::ScrollUp => {
            field.scroll_up(state, WHEEL_SCROLL_ROWS);
            PanelAction::Handled
        }
        _ => PanelAction::Handled,
    }
}

#[cfg(test)]
#[path = "suggestion_events_tests.rs"]
mod suggestion_events_tests;
