//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
};

use super::InputState;

/// Render the text input, highlighting its border while it has focus
pub fn render_field(input: &mut InputState, frame: &mut Frame, area: Rect, focused: bool) {
    let (border_color, cursor_style) = if focused {
        (Color::Cyan, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        (Color::DarkGray, Style::default())
    };

    let title = if focused { " Search " } else { " Search (i to edit) " };

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&input.textarea, area);
}
