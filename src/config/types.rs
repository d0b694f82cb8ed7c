// Configuration type definitions

use serde::Deserialize;

use crate::error::SuggestFieldError;
use crate::suggestion::{
    DEFAULT_CANDIDATES, DEFAULT_HORIZONTAL_MARGIN, DEFAULT_ROW_HEIGHT, DEFAULT_VISIBLE_ROWS,
    EmptyInputPolicy,
};

/// Suggestion source configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuggestionsConfig {
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
    #[serde(default)]
    pub empty_input: EmptyInputPolicy,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            candidates: default_candidates(),
            empty_input: EmptyInputPolicy::default(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

/// Panel geometry configuration section
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PanelConfig {
    #[serde(default = "default_visible_rows")]
    pub visible_rows: usize,
    #[serde(default = "default_row_height")]
    pub row_height: u16,
    #[serde(default = "default_horizontal_margin")]
    pub horizontal_margin: u16,
    #[serde(default)]
    pub vertical_offset: i16,
    #[serde(default)]
    pub horizontal_offset: i16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            visible_rows: DEFAULT_VISIBLE_ROWS,
            row_height: DEFAULT_ROW_HEIGHT,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            vertical_offset: 0,
            horizontal_offset: 0,
        }
    }
}

fn default_visible_rows() -> usize {
    DEFAULT_VISIBLE_ROWS
}

fn default_row_height() -> u16 {
    DEFAULT_ROW_HEIGHT
}

fn default_horizontal_margin() -> u16 {
    DEFAULT_HORIZONTAL_MARGIN
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

impl Config {
    /// Reject geometry the panel cannot be drawn with.
    pub fn validate(&self) -> Result<(), SuggestFieldError> {
        if self.panel.visible_rows == 0 {
            return Err(SuggestFieldError::InvalidConfig(
                "panel.visible_rows must be at least 1".to_string(),
            ));
        }
        if self.panel.row_height == 0 {
            return Err(SuggestFieldError::InvalidConfig(
                "panel.row_height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
