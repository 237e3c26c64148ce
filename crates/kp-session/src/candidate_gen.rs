use tracing::debug;
use unicode_width::UnicodeWidthStr;

use kp_core::vocab::truncate;

use super::types::{CandidateAction, PopupAnchor, PopupState};
use super::CompletionSession;

impl CompletionSession {
    /// Recompute the prefix at the cursor and open, refresh or close the popup.
    /// Returns the `Show` action when the popup is open afterwards.
    pub(crate) fn refresh_popup(&mut self) -> Option<CandidateAction> {
        if !self.config.completion_enabled {
            self.popup = PopupState::Closed;
            return None;
        }

        let prefix = self.buffer.prefix_at_cursor();
        if prefix.chars().count() < self.config.min_prefix_chars {
            self.close_popup();
            return None;
        }

        let candidates = truncate(
            self.vocab.query(&prefix, self.config.case_insensitive),
            self.config.max_visible,
        );
        if candidates.is_empty() {
            debug!(%prefix, "no candidates");
            self.close_popup();
            return None;
        }

        let anchor = PopupAnchor {
            caret: self.buffer.cursor(),
            width: candidates.iter().map(|c| c.width()).max().unwrap_or(0),
        };
        debug!(%prefix, ?candidates, "popup open");
        self.popup = PopupState::Open {
            candidates: candidates.clone(),
            prefix,
            selected: None,
        };
        Some(CandidateAction::Show { candidates, anchor })
    }

    fn close_popup(&mut self) {
        if self.popup.is_open() {
            debug!("popup closed");
        }
        self.popup = PopupState::Closed;
    }
}
