//! Tests for panel layout

use super::*;
use crate::suggestion::{CandidateSet, EmptyInputPolicy};

const ANCHOR: Rect = Rect {
    x: 0,
    y: 0,
    width: 40,
    height: 3,
};

const BOUNDS: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 20,
};

fn editing(text: &str) -> SuggestionState {
    let mut state = SuggestionState::new();
    state.set_text(text);
    state
}

fn shown(layout: PanelLayout) -> Panel {
    match layout {
        PanelLayout::Shown(panel) => panel,
        other => panic!("expected a shown panel, got {:?}", other),
    }
}

#[test]
fn test_not_editing_removes_panel() {
    let field = SuggestionField::new().empty_input(EmptyInputPolicy::ShowAll);
    let mut state = editing("");
    state.end_editing();

    let layout = layout_panel(&field, &state, ANCHOR, BOUNDS);

    assert_eq!(layout, PanelLayout::Removed);
    assert_eq!(layout.height(), 0);
    assert!(layout.panel().is_none());
}

#[test]
fn test_not_editing_removes_panel_even_with_matches() {
    let field = SuggestionField::new();
    let mut state = editing("Ma");
    state.end_editing();

    assert_eq!(field.match_count(&state), 2);
    assert_eq!(layout_panel(&field, &state, ANCHOR, BOUNDS).height(), 0);
}

#[test]
fn test_no_matches_collapses_panel() {
    let field = SuggestionField::new();
    let layout = layout_panel(&field, &editing("Xylophone"), ANCHOR, BOUNDS);

    assert_eq!(layout, PanelLayout::Collapsed);
    assert_eq!(layout.height(), 0);
    assert!(!layout.is_shown());
}

#[test]
fn test_empty_input_caps_panel_at_three_rows() {
    let field = SuggestionField::new().empty_input(EmptyInputPolicy::ShowAll);
    let panel = shown(layout_panel(&field, &editing(""), ANCHOR, BOUNDS));

    assert_eq!(panel.total_matches, 17);
    assert_eq!(panel.rows.len(), 3);
    assert_eq!(panel.area.height, 3 * 2 + 2);
    assert!(panel.is_scrollable());
}

#[test]
fn test_empty_input_collapses_by_default() {
    let field = SuggestionField::new();
    let layout = layout_panel(&field, &editing(""), ANCHOR, BOUNDS);
    assert_eq!(layout, PanelLayout::Collapsed);
}

#[test]
fn test_panel_height_matches_result_count() {
    let field = SuggestionField::new().row_height(1);
    let panel = shown(layout_panel(&field, &editing("Ma"), ANCHOR, BOUNDS));

    assert_eq!(panel.rows.len(), 2);
    assert_eq!(panel.area.height, 2 + 2);
    assert!(!panel.is_scrollable());
}

#[test]
fn test_panel_sits_below_anchor_with_margin() {
    let field = SuggestionField::new();
    let panel = shown(layout_panel(&field, &editing("Ap"), ANCHOR, BOUNDS));

    assert_eq!(panel.area, Rect::new(2, 3, 36, 4));
    assert_eq!(panel.rows[0].area, Rect::new(3, 4, 34, 2));
}

#[test]
fn test_offsets_shift_panel() {
    let field = SuggestionField::with_offsets(2, 3);
    let panel = shown(layout_panel(&field, &editing("Ap"), ANCHOR, BOUNDS));

    assert_eq!((panel.area.x, panel.area.y), (5, 5));
    assert_eq!(panel.rows[0].area.y, 6);
}

#[test]
fn test_rows_keep_candidate_order_and_positions() {
    let field = SuggestionField::new();
    let panel = shown(layout_panel(&field, &editing("L"), ANCHOR, BOUNDS));

    let texts: Vec<&str> = panel.rows.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Lemon", "Lime", "Loquat"]);
    let ys: Vec<u16> = panel.rows.iter().map(|r| r.area.y).collect();
    assert_eq!(ys, vec![4, 6, 8]);
}

#[test]
fn test_highlighted_row_is_marked() {
    let field = SuggestionField::new();
    let mut state = editing("L");
    field.select_next(&mut state);

    let panel = shown(layout_panel(&field, &state, ANCHOR, BOUNDS));

    let selected: Vec<bool> = panel.rows.iter().map(|r| r.selected).collect();
    assert_eq!(selected, vec![false, true, false]);
}

#[test]
fn test_scrolled_window_shows_later_rows() {
    let field = SuggestionField::new();
    let mut state = editing("L");
    field.select_previous(&mut state);

    let panel = shown(layout_panel(&field, &state, ANCHOR, BOUNDS));

    assert_eq!(panel.scroll_offset, 2);
    let indices: Vec<usize> = panel.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![2, 3, 4]);
    assert_eq!(panel.rows[2].text, "Lychee");
    assert!(panel.rows[2].selected);
}

#[test]
fn test_cropped_panel_shows_fewer_rows() {
    let field = SuggestionField::new().empty_input(EmptyInputPolicy::ShowAll);
    let bounds = Rect::new(0, 0, 40, 8);

    let panel = shown(layout_panel(&field, &editing(""), ANCHOR, bounds));

    assert_eq!(panel.area.height, 5);
    assert_eq!(panel.rows.len(), 1);
}

#[test]
fn test_cropped_panel_keeps_highlight_visible() {
    let field = SuggestionField::new();
    let anchor = Rect::new(0, 0, 30, 3);
    let bounds = Rect::new(0, 0, 30, 7);
    let mut state = editing("L");
    field.select_next(&mut state);
    field.select_next(&mut state);

    let panel = shown(layout_panel(&field, &state, anchor, bounds));

    assert_eq!(panel.scroll_offset, 2);
    let rows: Vec<(usize, &str, bool)> = panel
        .rows
        .iter()
        .map(|row| (row.index, row.text.as_str(), row.selected))
        .collect();
    assert_eq!(rows, vec![(2, "Loquat", true)]);
}

#[test]
fn test_cropped_panel_leaves_wheel_scroll_alone() {
    let field = SuggestionField::new();
    let bounds = Rect::new(0, 0, 40, 8);
    let mut state = editing("L");
    field.scroll_down(&mut state, 2);

    let panel = shown(layout_panel(&field, &state, ANCHOR, bounds));

    assert_eq!(panel.scroll_offset, 2);
    assert_eq!(panel.rows.len(), 1);
    assert!(!panel.rows[0].selected);
}

#[test]
fn test_huge_horizontal_margin_collapses() {
    let field = SuggestionField::new().horizontal_margin(40000);

    assert_eq!(layout_panel(&field, &editing("M"), ANCHOR, BOUNDS), PanelLayout::Collapsed);
}

#[test]
fn test_no_room_below_anchor_collapses() {
    let field = SuggestionField::new().empty_input(EmptyInputPolicy::ShowAll);
    let anchor = Rect::new(0, 17, 40, 3);

    assert_eq!(layout_panel(&field, &editing(""), anchor, BOUNDS), PanelLayout::Collapsed);
}

#[test]
fn test_row_at_hit_tests_rows() {
    let field = SuggestionField::new();
    let panel = shown(layout_panel(&field, &editing("M"), ANCHOR, BOUNDS));

    assert_eq!(panel.row_at(10, 4), Some(0));
    assert_eq!(panel.row_at(10, 5), Some(0));
    assert_eq!(panel.row_at(10, 6), Some(1));
    assert_eq!(panel.row_at(10, 9), Some(2));
    // border and outside
    assert_eq!(panel.row_at(2, 4), None);
    assert_eq!(panel.row_at(10, 3), None);
    assert_eq!(panel.row_at(10, 15), None);
}

#[test]
fn test_contains_covers_border() {
    let field = SuggestionField::new();
    let panel = shown(layout_panel(&field, &editing("M"), ANCHOR, BOUNDS));

    assert!(panel.contains(2, 3));
    assert!(!panel.contains(1, 3));
}

#[test]
fn test_layout_uses_custom_candidates() {
    let field = SuggestionField::new().candidates(CandidateSet::new(["Banana", "Apple"]));
    let panel = shown(layout_panel(&field, &editing("A"), ANCHOR, BOUNDS));

    assert_eq!(panel.rows.len(), 1);
    assert_eq!(panel.rows[0].text, "Apple");
}
