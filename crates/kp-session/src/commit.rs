use tracing::debug;

use super::types::{CandidateAction, KeyResponse, PopupState};
use super::CompletionSession;

impl CompletionSession {
    /// Splice the selected candidate over the typed prefix and close the popup.
    ///
    /// Only the span from word start to cursor is replaced; characters
    /// after the cursor stay where they are.
    pub(crate) fn commit_selected(&mut self) -> KeyResponse {
        let popup = std::mem::replace(&mut self.popup, PopupState::Closed);
        let PopupState::Open {
            candidates,
            selected: Some(slot),
            ..
        } = popup
        else {
            return KeyResponse::consumed();
        };
        let Some(text) = candidates.into_iter().nth(slot) else {
            return KeyResponse::consumed();
        };

        let start = self.buffer.word_start_before_cursor();
        let end = self.buffer.cursor();
        debug!(slot, %text, start, end, "commit candidate");
        self.buffer.replace_range(start..end, &text);

        let mut resp = KeyResponse::consumed();
        resp.commit = Some(text);
        resp.candidates = CandidateAction::Hide;
        resp
    }
}
