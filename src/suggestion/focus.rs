/// Capability to drop keyboard focus from the active text input.
///
/// Hosts pass an implementation into [`SuggestionField::select`] so the
/// field can end text entry after a suggestion is committed without knowing
/// anything about the host's input widget.
///
/// [`SuggestionField::select`]: super::SuggestionField::select
pub trait DismissFocus {
    fn dismiss_focus(&mut self);
}

impl<F: FnMut()> DismissFocus for F {
    fn dismiss_focus(&mut self) {
        self()
    }
}

/// Focus capability for hosts without a focusable input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFocus;

impl DismissFocus for NoFocus {
    fn dismiss_focus(&mut self) {}
}
