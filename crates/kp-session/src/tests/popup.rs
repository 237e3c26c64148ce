use super::*;
use crate::{CandidateAction, PopupAnchor, PopupState};

fn shown(resp: &KeyResponse) -> Option<&[String]> {
    match &resp.candidates {
        CandidateAction::Show { candidates, .. } => Some(candidates),
        _ => None,
    }
}

#[test]
fn test_popup_needs_three_chars() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    let responses = type_string(&mut session, &clock, "ca");
    assert!(responses.iter().all(|r| shown(r).is_none()));
    assert!(!session.is_popup_open());

    let responses = type_string(&mut session, &clock, "t");
    assert_eq!(
        shown(&responses[0]).unwrap(),
        &["cat".to_string(), "cats".to_string(), "catapult".to_string()]
    );
    assert!(session.is_popup_open());
}

#[test]
fn test_popup_truncated_to_three_in_order() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "cat");
    assert_eq!(session.popup().candidates(), &["cat", "cats", "catapult"]);
}

#[test]
fn test_backspace_below_threshold_closes() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Hun");
    assert!(session.is_popup_open());

    let resp = press(&mut session, &clock, KeyCode::Backspace);
    assert!(matches!(resp.candidates, CandidateAction::Hide));
    assert!(!session.is_popup_open());

    // Already closed: nothing to hide.
    let resp = press(&mut session, &clock, KeyCode::Backspace);
    assert!(matches!(resp.candidates, CandidateAction::Keep));
}

#[test]
fn test_popup_refreshes_and_closes_without_matches() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Hund");
    assert_eq!(session.popup().candidates(), &["Hund", "Hunde", "Hundehütte"]);

    let responses = type_string(&mut session, &clock, "eh");
    assert_eq!(shown(&responses[1]).unwrap(), &["Hundehütte".to_string()]);

    let resp = type_string(&mut session, &clock, "x").remove(0);
    assert!(matches!(resp.candidates, CandidateAction::Hide));
    assert_eq!(session.popup(), &PopupState::Closed);
}

#[test]
fn test_case_insensitive_match() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "HAUS");
    assert_eq!(
        session.popup().candidates(),
        &["Haus", "Hausaufgabe", "Haustür"]
    );
}

#[test]
fn test_case_sensitive_match() {
    let mut session = make_session();
    session.set_case_insensitive(false);
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Cat");
    assert_eq!(session.popup().candidates(), &["Cat"]);
}

#[test]
fn test_space_dismisses_and_inserts() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Hun");
    let resp = press(&mut session, &clock, KeyCode::Space);
    assert!(resp.consumed);
    assert!(resp.commit.is_none());
    assert!(matches!(resp.candidates, CandidateAction::Hide));
    assert_eq!(session.text(), "Hun ");
    assert!(!session.is_popup_open());
}

#[test]
fn test_popup_opened_with_no_selection() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Tag");
    match session.popup() {
        PopupState::Open {
            prefix, selected, ..
        } => {
            assert_eq!(prefix, "Tag");
            assert_eq!(*selected, None);
        }
        PopupState::Closed => panic!("popup should be open"),
    }
}

#[test]
fn test_escape_does_not_bypass_prefix_rule() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Tag");
    let resp = press(&mut session, &clock, KeyCode::Escape);
    assert!(resp.consumed);
    assert!(session.is_popup_open());
    assert_eq!(session.text(), "Tag");
}

#[test]
fn test_anchor_below_caret() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    let resp = type_string(&mut session, &clock, "ein cat").pop().unwrap();
    match resp.candidates {
        CandidateAction::Show { anchor, .. } => {
            assert_eq!(
                anchor,
                PopupAnchor {
                    caret: 7,
                    width: "catapult".len()
                }
            );
        }
        other => panic!("expected Show, got {other:?}"),
    }
}

#[test]
fn test_cursor_movement_recomputes_prefix() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Haus");
    assert!(session.is_popup_open());

    press(&mut session, &clock, KeyCode::Left);
    press(&mut session, &clock, KeyCode::Left);
    // Prefix before the cursor is now "Ha".
    assert!(!session.is_popup_open());

    press(&mut session, &clock, KeyCode::Right);
    assert_eq!(session.popup().candidates(), &["Haus", "Hausaufgabe", "Haustür"]);
}

#[test]
fn test_max_visible_setting() {
    let mut session = make_session();
    session.set_max_visible(2);
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "cat");
    assert_eq!(session.popup().candidates(), &["cat", "cats"]);

    session.set_max_visible(0);
    type_string(&mut session, &clock, "a");
    assert_eq!(session.popup().candidates(), &["catapult"]);
}

#[test]
fn test_min_prefix_setting() {
    let mut session = make_session();
    session.set_min_prefix_chars(2);
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Ha");
    assert!(session.is_popup_open());
}
