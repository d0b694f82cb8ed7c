//! Suggestion panel rendering
//!
//! Draws a [`PanelLayout`] with ratatui. All geometry comes from the layout;
//! this module only decides how rows look.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::suggestion_layout::{Panel, PanelLayout, RowNode};
use crate::widgets::popup;

const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";
const DIVIDER_INSET: u16 = 1;
const ELLIPSIS: char = '…';

/// Draw the suggestion panel, returning the area it covers.
pub fn render_panel(frame: &mut Frame, layout: &PanelLayout) -> Option<Rect> {
    let panel = layout.panel()?;

    popup::clear_area(frame, panel.area);

    let title = if panel.is_scrollable() {
        format!(" Suggestions ({}) ", panel.total_matches)
    } else {
        " Suggestions ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, panel.area);

    for row in &panel.rows {
        render_row(frame, row);
    }

    if panel.is_scrollable() {
        render_scrollbar(frame, panel);
    }

    Some(panel.area)
}

fn render_row(frame: &mut Frame, row: &RowNode) {
    let text_area = Rect {
        height: 1,
        ..row.area
    };

    let (marker, style) = if row.selected {
        (
            SELECTED_MARKER,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (UNSELECTED_MARKER, Style::default().fg(Color::White).bg(Color::Black))
    };

    let max_text_width = (text_area.width as usize).saturating_sub(marker.width());
    let text = truncate_to_width(&row.text, max_text_width);
    let line = Line::from(vec![Span::raw(marker), Span::raw(text)]);
    frame.render_widget(Paragraph::new(line).style(style), text_area);

    if row.area.height >= 2 {
        let divider_line = Rect {
            y: row.area.bottom() - 1,
            height: 1,
            ..row.area
        };
        let divider_area = popup::inset_rect(divider_line, DIVIDER_INSET, 0);
        let divider = "─".repeat(divider_area.width as usize);
        frame.render_widget(
            Paragraph::new(divider).style(Style::default().fg(Color::DarkGray).bg(Color::Black)),
            divider_area,
        );
    }
}

fn render_scrollbar(frame: &mut Frame, panel: &Panel) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Cyan));

    let mut state = ScrollbarState::new(panel.total_matches)
        .position(panel.scroll_offset)
        .viewport_content_length(panel.rows.len());

    let track = panel.area.inner(Margin {
        vertical: 1,
        horizontal: 0,
    });
    frame.render_stateful_widget(scrollbar, track, &mut state);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width - 1 {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
#[path = "suggestion_render_tests.rs"]
mod suggestion_render_tests;
