/// Vertical scroll window over a list of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_rows: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.max_offset = content_rows.saturating_sub(viewport_rows);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Move the window the least amount needed to show `row`.
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_rows == 0 {
            return;
        }

        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_rows {
            self.offset = (row + 1 - self.viewport_rows).min(self.max_offset);
        }
    }

    /// Offset clamped to a list of `content_rows`, without mutating the state.
    pub fn clamped_offset(&self, content_rows: usize, viewport_rows: usize) -> usize {
        self.offset.min(content_rows.saturating_sub(viewport_rows))
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
