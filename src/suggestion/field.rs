use std::fmt;

use super::candidates::CandidateSet;
use super::filter::{EmptyInputPolicy, filter_candidates_with};
use super::focus::DismissFocus;
use super::suggestion_state::SuggestionState;
use crate::config::Config;

/// Rows shown before the panel starts scrolling
pub const DEFAULT_VISIBLE_ROWS: usize = 3;
/// Terminal lines per row: the candidate text plus a divider
pub const DEFAULT_ROW_HEIGHT: u16 = 2;
/// Cells between the anchor edges and the panel
pub const DEFAULT_HORIZONTAL_MARGIN: u16 = 2;

type SelectCallback = Box<dyn FnMut(&str)>;

/// Text field suggestion panel.
///
/// Owns the fixed candidate list and the panel geometry. Everything that
/// changes while the user types lives in a host-owned [`SuggestionState`]
/// passed to each call.
pub struct SuggestionField {
    candidates: CandidateSet,
    vertical_offset: i16,
    horizontal_offset: i16,
    visible_rows: usize,
    row_height: u16,
    horizontal_margin: u16,
    empty_input: EmptyInputPolicy,
    on_select: Option<SelectCallback>,
}

impl fmt::Debug for SuggestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionField")
            .field("candidates", &self.candidates.len())
            .field("vertical_offset", &self.vertical_offset)
            .field("horizontal_offset", &self.horizontal_offset)
            .field("visible_rows", &self.visible_rows)
            .field("row_height", &self.row_height)
            .field("empty_input", &self.empty_input)
            .finish_non_exhaustive()
    }
}

impl Default for SuggestionField {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionField {
    pub fn new() -> Self {
        Self::with_offsets(0, 0)
    }

    /// Field whose panel is shifted by the given number of cells.
    pub fn with_offsets(vertical_offset: i16, horizontal_offset: i16) -> Self {
        Self {
            candidates: CandidateSet::default(),
            vertical_offset,
            horizontal_offset,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            row_height: DEFAULT_ROW_HEIGHT,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            empty_input: EmptyInputPolicy::default(),
            on_select: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let panel = &config.panel;
        Self::with_offsets(panel.vertical_offset, panel.horizontal_offset)
            .candidates(CandidateSet::new(config.suggestions.candidates.iter().cloned()))
            .empty_input(config.suggestions.empty_input)
            .visible_rows(panel.visible_rows)
            .row_height(panel.row_height)
            .horizontal_margin(panel.horizontal_margin)
    }

    pub fn candidates(mut self, candidates: CandidateSet) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = height.max(1);
        self
    }

    pub fn horizontal_margin(mut self, margin: u16) -> Self {
        self.horizontal_margin = margin;
        self
    }

    pub fn empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Register a callback invoked with every committed suggestion.
    pub fn on_select(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn candidate_set(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn offsets(&self) -> (i16, i16) {
        (self.vertical_offset, self.horizontal_offset)
    }

    pub fn visible_row_capacity(&self) -> usize {
        self.visible_rows
    }

    pub fn row_lines(&self) -> u16 {
        self.row_height
    }

    pub fn margin(&self) -> u16 {
        self.horizontal_margin
    }

    /// Candidates matching the current input, in candidate order.
    pub fn filtered<'a>(&'a self, state: &SuggestionState) -> Vec<&'a str> {
        filter_candidates_with(&self.candidates, state.text(), self.empty_input)
    }

    pub fn match_count(&self, state: &SuggestionState) -> usize {
        self.filtered(state).len()
    }

    /// Rows the panel shows at once for `match_count` matches.
    pub fn visible_count(&self, match_count: usize) -> usize {
        match_count.min(self.visible_rows)
    }

    /// Height of the panel's row area in lines; zero while not editing.
    pub fn panel_height(&self, state: &SuggestionState) -> u16 {
        if !state.is_editing() {
            return 0;
        }
        let rows = self.visible_count(self.match_count(state));
        (rows as u16).saturating_mul(self.row_height)
    }

    pub fn select_next(&self, state: &mut SuggestionState) {
        let count = self.match_count(state);
        if count == 0 {
            return;
        }
        let next = (state.selected_index() + 1) % count;
        self.highlight(state, next, count);
    }

    pub fn select_previous(&self, state: &mut SuggestionState) {
        let count = self.match_count(state);
        if count == 0 {
            return;
        }
        let previous = state
            .selected_index()
            .min(count - 1)
            .checked_sub(1)
            .unwrap_or(count - 1);
        self.highlight(state, previous, count);
    }

    pub fn scroll_down(&self, state: &mut SuggestionState, rows: usize) {
        let count = self.match_count(state);
        let scroll = state.scroll_mut();
        scroll.update_bounds(count, self.visible_rows);
        scroll.scroll_down(rows);
    }

    pub fn scroll_up(&self, state: &mut SuggestionState, rows: usize) {
        let count = self.match_count(state);
        let scroll = state.scroll_mut();
        scroll.update_bounds(count, self.visible_rows);
        scroll.scroll_up(rows);
    }

    /// Commit the match at `index`.
    ///
    /// Writes the candidate into the input text, closes the panel, dismisses
    /// input focus and notifies the `on_select` callback. Returns the committed
    /// value, or `None` when `index` is not a current match.
    pub fn select<F>(&mut self, state: &mut SuggestionState, index: usize, focus: &mut F) -> Option<String>
    where
        F: DismissFocus + ?Sized,
    {
        let value = self.filtered(state).get(index)?.to_string();

        state.commit(value.clone());
        focus.dismiss_focus();
        if let Some(callback) = self.on_select.as_mut() {
            callback(&value);
        }

        log::debug!("Committed suggestion {:?}", value);
        Some(value)
    }

    /// Commit the highlighted match while the panel is open.
    pub fn select_highlighted<F>(&mut self, state: &mut SuggestionState, focus: &mut F) -> Option<String>
    where
        F: DismissFocus + ?Sized,
    {
        if !state.is_editing() {
            return None;
        }
        let index = state.selected_index();
        self.select(state, index, focus)
    }

    fn highlight(&self, state: &mut SuggestionState, index: usize, count: usize) {
        state.set_selected(index);
        let scroll = state.scroll_mut();
        scroll.update_bounds(count, self.visible_rows);
        scroll.ensure_visible(index);
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
