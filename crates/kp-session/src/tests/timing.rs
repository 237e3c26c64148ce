use kp_core::segment::ReferenceText;
use kp_core::timing::TimingEvent;

use super::*;

fn boundary_events(responses: &[KeyResponse]) -> Vec<TimingEvent> {
    responses
        .iter()
        .flat_map(|r| r.timing.iter().cloned())
        .filter(|e| !matches!(e, TimingEvent::KeyPressed { .. }))
        .collect()
}

#[test]
fn test_no_timing_without_trial() {
    let mut session = make_session();
    let clock = ManualClock::at_epoch();
    let responses = type_string(&mut session, &clock, "Hi there.");
    assert!(responses.iter().all(|r| r.timing.is_empty()));
    assert!(session.segmentation_state().is_none());
}

#[test]
fn test_hi_there_through_session() {
    let mut session = make_session();
    session.begin_trial(ReferenceText::split("Hi there. Go now!"));
    let clock = ManualClock::at_epoch();
    let responses = type_string(&mut session, &clock, "Hi there.");

    let events = boundary_events(&responses);
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], TimingEvent::WordCompleted { word: Some(w), .. } if w == "Hi"));
    assert!(matches!(&events[1], TimingEvent::WordCompleted { word: Some(w), .. } if w == "there"));
    assert!(matches!(
        &events[2],
        TimingEvent::SentenceCompleted { sentence: Some(s), .. } if s == "Hi there."
    ));

    // Word and sentence end on the same key.
    assert_eq!(responses.last().unwrap().timing.len(), 3);
    let state = session.segmentation_state().unwrap();
    assert_eq!(state.sentence_index, 1);
    assert_eq!(state.last_char, Some('.'));
}

#[test]
fn test_every_key_is_logged() {
    let mut session = make_session();
    session.begin_trial(ReferenceText::split("Der Hund."));
    let clock = ManualClock::at_epoch();
    let mut responses = type_string(&mut session, &clock, "Der Hun");
    responses.push(press(&mut session, &clock, KeyCode::Backspace));
    responses.push(press(&mut session, &clock, KeyCode::Return));
    for resp in &responses {
        assert!(matches!(resp.timing[0], TimingEvent::KeyPressed { .. }));
    }
    assert!(matches!(
        responses[7].timing[0],
        TimingEvent::KeyPressed { key: None, .. }
    ));
    assert!(matches!(
        responses[8].timing[0],
        TimingEvent::KeyPressed { key: Some('\r'), .. }
    ));
}

#[test]
fn test_selection_digit_is_logged_not_typed() {
    let mut session = make_session();
    session.begin_trial(ReferenceText::split("Der Hund bellt."));
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Der Hun");
    let resp = type_string(&mut session, &clock, "1").remove(0);
    assert_eq!(resp.commit.as_deref(), Some("Hund"));
    assert!(matches!(
        resp.timing[..],
        [TimingEvent::KeyPressed { key: Some('1'), .. }]
    ));

    let responses = type_string(&mut session, &clock, " bellt.");
    let events = boundary_events(&responses);
    assert!(matches!(&events[0], TimingEvent::WordCompleted { word: Some(w), .. } if w == "Hund"));
    assert!(matches!(events.last(), Some(TimingEvent::TaskCompleted { .. })));
    assert_eq!(session.text(), "Der Hund bellt.");
}

#[test]
fn test_begin_trial_resets_everything() {
    let mut session = make_session();
    session.begin_trial(ReferenceText::split("Ab."));
    let clock = ManualClock::at_epoch();
    type_string(&mut session, &clock, "Ab.");
    assert!(session.tracker().unwrap().is_finished());

    session.begin_trial(ReferenceText::split("Cd."));
    assert_eq!(session.text(), "");
    assert!(!session.tracker().unwrap().is_started());
    assert_eq!(session.tracker().unwrap().current_word(), Some("Cd"));
}

#[test]
fn test_plain_condition_still_times() {
    let mut session = make_session();
    session.set_completion_enabled(false);
    session.begin_trial(ReferenceText::split("Hi there."));
    let clock = ManualClock::at_epoch();
    let responses = type_string(&mut session, &clock, "Hi there.");
    let events = boundary_events(&responses);
    assert!(matches!(events.last(), Some(TimingEvent::TaskCompleted { .. })));
}
