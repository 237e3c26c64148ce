mod popup;
mod timing;

use std::sync::Arc;

use kp_core::timing::ManualClock;
use kp_core::vocab::Vocabulary;

use super::{CompletionSession, KeyCode, KeyEvent, KeyResponse};

pub(super) fn make_test_vocab() -> Arc<Vocabulary> {
    Arc::new(Vocabulary::build([
        "cat",
        "cats",
        "catapult",
        "catalog",
        "Hund",
        "Hunde",
        "Hundehütte",
        "Haus",
        "Hausaufgabe",
        "Haustür",
        "there",
        "Tag",
        "Tagebuch",
        "über",
        "Cat",
    ]))
}

pub(super) fn make_session() -> CompletionSession {
    CompletionSession::new(make_test_vocab())
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(
    session: &mut CompletionSession,
    clock: &ManualClock,
    s: &str,
) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| {
            clock.advance(time::Duration::milliseconds(200));
            session.handle_key(KeyEvent::char(ch), clock)
        })
        .collect()
}

pub(super) fn press(session: &mut CompletionSession, clock: &ManualClock, code: KeyCode) -> KeyResponse {
    clock.advance(time::Duration::milliseconds(200));
    session.handle_key(KeyEvent::key(code), clock)
}
