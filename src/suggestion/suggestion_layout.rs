//! Panel layout description
//!
//! Turns a field and its state into a plain description of what the panel
//! looks like: where it sits, which matches are on screen and where each row
//! is. Drawing and hit testing both work from this description.

use ratatui::layout::{Position, Rect};

use super::field::SuggestionField;
use super::suggestion_state::SuggestionState;
use crate::widgets::popup;

/// Width of the panel border on each side
pub const PANEL_BORDER: u16 = 1;

/// One visible suggestion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode {
    /// Index into the current matches
    pub index: usize,
    pub text: String,
    pub area: Rect,
    pub selected: bool,
}

/// A panel that takes up space on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Outer area, border included
    pub area: Rect,
    pub rows: Vec<RowNode>,
    pub total_matches: usize,
    pub scroll_offset: usize,
    pub row_height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelLayout {
    /// Not editing: the panel is taken out of the layout entirely.
    #[default]
    Removed,
    /// Editing, but there is nothing to show.
    Collapsed,
    Shown(Panel),
}

impl PanelLayout {
    /// Lines the panel occupies below its anchor.
    pub fn height(&self) -> u16 {
        match self {
            PanelLayout::Shown(panel) => panel.area.height,
            PanelLayout::Removed | PanelLayout::Collapsed => 0,
        }
    }

    pub fn panel(&self) -> Option<&Panel> {
        match self {
            PanelLayout::Shown(panel) => Some(panel),
            PanelLayout::Removed | PanelLayout::Collapsed => None,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, PanelLayout::Shown(_))
    }
}

impl Panel {
    /// Match index of the row under a screen cell.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.rows
            .iter()
            .find(|node| node.area.contains(position))
            .map(|node| node.index)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn is_scrollable(&self) -> bool {
        self.total_matches > self.rows.len()
    }
}

/// Describe the suggestion panel for `state`, placed below `anchor`.
///
/// `anchor` is the text input the panel belongs to and `bounds` the area the
/// panel must stay inside (usually the whole frame).
pub fn layout_panel(field: &SuggestionField, state: &SuggestionState, anchor: Rect, bounds: Rect) -> PanelLayout {
    if !state.is_editing() {
        return PanelLayout::Removed;
    }

    let matches = field.filtered(state);
    if matches.is_empty() {
        return PanelLayout::Collapsed;
    }

    let row_height = field.row_lines();
    let visible = field.visible_count(matches.len());
    let content_height = (visible as u16).saturating_mul(row_height);
    let outer_height = content_height.saturating_add(PANEL_BORDER * 2);

    let placed = popup::popup_below_anchor(anchor, bounds, outer_height, field.margin());
    let (vertical, horizontal) = field.offsets();
    let area = popup::offset_rect(placed, bounds, vertical, horizontal);

    let inner = popup::inset_rect(area, PANEL_BORDER, PANEL_BORDER);
    let rows_that_fit = (inner.height / row_height) as usize;
    if rows_that_fit == 0 || inner.width == 0 {
        return PanelLayout::Collapsed;
    }

    let viewport = visible.min(rows_that_fit);
    let scroll_offset = window_offset(field, state, matches.len(), viewport);

    let rows = matches
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(viewport)
        .enumerate()
        .map(|(slot, (index, text))| RowNode {
            index,
            text: text.to_string(),
            area: Rect {
                x: inner.x,
                y: inner.y + slot as u16 * row_height,
                width: inner.width,
                height: row_height,
            },
            selected: index == state.selected_index(),
        })
        .collect();

    PanelLayout::Shown(Panel {
        area,
        rows,
        total_matches: matches.len(),
        scroll_offset,
        row_height,
    })
}

/// First match shown in a viewport of `viewport` rows.
///
/// The state's scroll window assumes the full row capacity. When the panel is
/// cropped to fewer rows, a highlight inside that window is kept on screen;
/// a highlight the user scrolled away from is left where it is.
fn window_offset(field: &SuggestionField, state: &SuggestionState, match_count: usize, viewport: usize) -> usize {
    let capacity = field.visible_row_capacity();
    let window = state.scroll().clamped_offset(match_count, capacity);
    let selected = state.selected_index();

    let highlight_in_window = selected < match_count && (window..window + capacity).contains(&selected);
    if !highlight_in_window || viewport >= capacity {
        return window.min(match_count.saturating_sub(viewport));
    }

    if selected < window {
        selected
    } else if selected >= window + viewport {
        selected + 1 - viewport
    } else {
        window
    }
}

#[cfg(test)]
#[path = "suggestion_layout_tests.rs"]
mod suggestion_layout_tests;
