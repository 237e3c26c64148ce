use tracing::{debug, debug_span};

use kp_core::timing::{Clock, TimingEvent};

use super::types::{CandidateAction, KeyCode, KeyEvent, KeyResponse, PopupState};
use super::CompletionSession;

impl CompletionSession {
    /// Process a key event. Returns a KeyResponse describing what the host should do.
    ///
    /// Order: timing, digit selection, popup dismissal, Enter suppression,
    /// buffer edit, prefix recompute.
    pub fn handle_key(&mut self, event: KeyEvent, clock: &dyn Clock) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        let timing = self.observe_timing(&event, clock);
        let mut resp = self.dispatch(event);
        resp.timing = timing;
        resp
    }

    fn observe_timing(&mut self, event: &KeyEvent, clock: &dyn Clock) -> Vec<TimingEvent> {
        match self.tracker.as_mut() {
            Some(tracker) => tracker.observe(event.ch, clock),
            None => Vec::new(),
        }
    }

    fn dispatch(&mut self, event: KeyEvent) -> KeyResponse {
        let was_open = self.popup.is_open();

        if was_open {
            if let Some(slot) = event.selection_slot() {
                if slot < self.config.max_visible {
                    return self.select_slot(slot);
                }
            }
        }

        if was_open && event.code == KeyCode::Space {
            debug!("space dismisses popup");
            self.popup = PopupState::Closed;
        }

        if matches!(event.code, KeyCode::Enter | KeyCode::Return) {
            // Never inserted, never commits.
            return KeyResponse::consumed();
        }

        if !self.apply_edit(event) {
            return KeyResponse::not_consumed();
        }

        let mut resp = KeyResponse::consumed();
        resp.candidates = match self.refresh_popup() {
            Some(show) => show,
            None if was_open => CandidateAction::Hide,
            None => CandidateAction::Keep,
        };
        resp
    }

    /// Digit key while the popup is open.
    fn select_slot(&mut self, slot: usize) -> KeyResponse {
        if slot >= self.popup.candidates().len() {
            debug!(slot, shown = self.popup.candidates().len(), "invalid selection ignored");
            return KeyResponse::consumed();
        }
        if let PopupState::Open { selected, .. } = &mut self.popup {
            *selected = Some(slot);
        }
        self.commit_selected()
    }

    /// Default text editing. Returns false for keys the session ignores.
    fn apply_edit(&mut self, event: KeyEvent) -> bool {
        match event.code {
            KeyCode::Char | KeyCode::Space | KeyCode::Tab => {
                let Some(ch) = event.ch else {
                    return false;
                };
                let mut tmp = [0u8; 4];
                self.buffer.insert_at_cursor(ch.encode_utf8(&mut tmp));
            }
            KeyCode::Backspace => {
                self.buffer.backspace();
            }
            KeyCode::Delete => {
                self.buffer.delete_forward();
            }
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            // Leaves the text alone; the popup still follows the prefix rule.
            KeyCode::Escape => {}
            KeyCode::Enter | KeyCode::Return | KeyCode::Other => return false,
        }
        true
    }
}
