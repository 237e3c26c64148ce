//! Keystroke-driven completion session for the number-key autocomplete
//! text field.
//!
//! `CompletionSession` owns the text buffer, the popup state and the
//! boundary tracker of the running trial. The host widget forwards every
//! key press to `handle_key` and renders the returned `KeyResponse`.

mod candidate_gen;
mod commit;
mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kp_core::buffer::TextBuffer;
use kp_core::segment::ReferenceText;
use kp_core::settings::{settings, MAX_SELECTABLE};
use kp_core::timing::{BoundaryTracker, SegmentationState};
use kp_core::vocab::Vocabulary;

pub use types::{
    key, CandidateAction, KeyCode, KeyEvent, KeyResponse, PopupAnchor, PopupState,
};

pub(crate) struct SessionConfig {
    /// False in the plain-typing condition: timing only, no popup.
    pub(crate) completion_enabled: bool,
    pub(crate) min_prefix_chars: usize,
    pub(crate) max_visible: usize,
    pub(crate) case_insensitive: bool,
}

pub struct CompletionSession {
    vocab: Arc<Vocabulary>,
    buffer: TextBuffer,
    popup: PopupState,
    /// Present while a trial with a reference text is running.
    tracker: Option<BoundaryTracker>,
    config: SessionConfig,
}

impl CompletionSession {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        let completion = &settings().completion;
        Self {
            vocab,
            buffer: TextBuffer::new(),
            popup: PopupState::Closed,
            tracker: None,
            config: SessionConfig {
                completion_enabled: true,
                min_prefix_chars: completion.min_prefix_chars,
                max_visible: completion.max_visible,
                case_insensitive: completion.case_insensitive,
            },
        }
    }

    pub fn set_completion_enabled(&mut self, enabled: bool) {
        self.config.completion_enabled = enabled;
        if !enabled {
            self.popup = PopupState::Closed;
        }
    }

    pub fn set_max_visible(&mut self, max_visible: usize) {
        self.config.max_visible = max_visible.clamp(1, MAX_SELECTABLE);
    }

    pub fn set_min_prefix_chars(&mut self, min: usize) {
        self.config.min_prefix_chars = min.max(1);
    }

    pub fn set_case_insensitive(&mut self, enabled: bool) {
        self.config.case_insensitive = enabled;
    }

    pub fn completion_enabled(&self) -> bool {
        self.config.completion_enabled
    }

    /// Start a new trial: clear the field and track `reference` from scratch.
    pub fn begin_trial(&mut self, reference: ReferenceText) {
        self.reset();
        self.tracker = Some(BoundaryTracker::new(reference));
    }

    /// Clear the field and close the popup. Trial progress restarts too.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.popup = PopupState::Closed;
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.reset();
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn popup(&self) -> &PopupState {
        &self.popup
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn tracker(&self) -> Option<&BoundaryTracker> {
        self.tracker.as_ref()
    }

    pub fn segmentation_state(&self) -> Option<SegmentationState> {
        self.tracker.as_ref().map(|t| t.state())
    }
}
