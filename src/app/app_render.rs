use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::input::input_render;
use crate::suggestion::{layout_panel, render_panel};

const INPUT_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 1;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HELP_HEIGHT),
        ])
        .areas(frame.area());

        self.input_area = input_area;
        let focused = self.focus == Focus::Input;
        input_render::render_field(&mut self.input, frame, input_area, focused);

        render_help(frame, help_area, focused);

        // The panel floats over the body, directly under the input
        let bounds = Rect {
            y: input_area.y,
            height: input_area.height + body_area.height,
            ..frame.area()
        };
        self.panel = layout_panel(&self.field, &self.suggestions, input_area, bounds);
        render_panel(frame, &self.panel);
    }
}

fn render_help(frame: &mut Frame, area: Rect, focused: bool) {
    let hints: &[(&str, &str)] = if focused {
        &[("↑↓", "move"), ("Enter", "pick"), ("Esc", "close"), ("Ctrl+C", "quit")]
    } else {
        &[("i", "edit"), ("Enter", "accept"), ("q", "quit")]
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{} ", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
