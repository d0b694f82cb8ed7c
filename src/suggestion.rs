//! Autocomplete suggestion field
//!
//! A text field's suggestion panel: a fixed list of candidates filtered by the
//! current input, laid out as a scrollable list below the field and committed
//! back into the input when a row is selected.

mod candidates;
mod field;
mod filter;
mod focus;
mod suggestion_events;
mod suggestion_layout;
mod suggestion_render;
mod suggestion_state;

pub use candidates::{CandidateSet, DEFAULT_CANDIDATES};
pub use field::{DEFAULT_HORIZONTAL_MARGIN, DEFAULT_ROW_HEIGHT, DEFAULT_VISIBLE_ROWS, SuggestionField};
pub use filter::{EmptyInputPolicy, filter_candidates, filter_candidates_with};
pub use focus::{DismissFocus, NoFocus};
pub use suggestion_events::{PanelAction, handle_key, handle_mouse};
pub use suggestion_layout::{Panel, PanelLayout, RowNode, layout_panel};
pub use suggestion_render::render_panel;
pub use suggestion_state::SuggestionState;
