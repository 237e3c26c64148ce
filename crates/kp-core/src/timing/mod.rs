//! Word/sentence boundary detection and the timing events it produces.
//!
//! `BoundaryTracker` watches the characters a participant types and,
//! against the pre-split reference text, decides when a word, a sentence
//! or the whole task has been finished.

mod clock;


pub use clock::{Clock, ManualClock, SystemClock};

use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::segment::{ReferenceText, Sentence};
use crate::unicode::{
    is_punctuation_terminator, is_sentence_terminator, is_word_char, is_word_terminator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl Interval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimingEvent {
    /// Any key press. `key` is `None` for keys without text (arrows, backspace).
    KeyPressed {
        key: Option<char>,
        at: OffsetDateTime,
    },
    /// `word` is `None` once typing runs past the reference text.
    WordCompleted {
        word: Option<String>,
        interval: Interval,
    },
    SentenceCompleted {
        sentence: Option<String>,
        interval: Interval,
    },
    TaskCompleted {
        text: String,
        interval: Interval,
    },
}

impl TimingEvent {
    pub fn interval(&self) -> Interval {
        match self {
            Self::KeyPressed { at, .. } => Interval {
                start: *at,
                end: *at,
            },
            Self::WordCompleted { interval, .. }
            | Self::SentenceCompleted { interval, .. }
            | Self::TaskCompleted { interval, .. } => *interval,
        }
    }

    /// The typed key, word, sentence or task text the event refers to.
    pub fn content(&self) -> String {
        match self {
            Self::KeyPressed { key, .. } => key.map(String::from).unwrap_or_default(),
            Self::WordCompleted { word, .. } => word.clone().unwrap_or_default(),
            Self::SentenceCompleted { sentence, .. } => sentence.clone().unwrap_or_default(),
            Self::TaskCompleted { text, .. } => text.clone(),
        }
    }
}

/// Stored as `last_char` for keys that type nothing (Backspace, arrows).
pub const NO_TEXT: char = '\0';

/// Position within the reference text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentationState {
    pub sentence_index: usize,
    pub word_index: usize,
    /// Previous key's char, [`NO_TEXT`] for an editing key, `None` before the first key.
    pub last_char: Option<char>,
}

#[derive(Debug, Clone, Copy)]
struct Timers {
    task: OffsetDateTime,
    word: OffsetDateTime,
    sentence: OffsetDateTime,
}

impl Timers {
    fn starting_at(now: OffsetDateTime) -> Self {
        Self {
            task: now,
            word: now,
            sentence: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundaryTracker {
    reference: ReferenceText,
    state: SegmentationState,
    /// Started by the first keystroke of the trial.
    timers: Option<Timers>,
    finished: bool,
}

impl BoundaryTracker {
    pub fn new(reference: ReferenceText) -> Self {
        Self {
            reference,
            state: SegmentationState::default(),
            timers: None,
            finished: false,
        }
    }

    pub fn reference(&self) -> &ReferenceText {
        &self.reference
    }

    pub fn state(&self) -> SegmentationState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.timers.is_some()
    }

    /// True once `TaskCompleted` has been emitted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_sentence(&self) -> Option<&Sentence> {
        self.reference.sentence(self.state.sentence_index)
    }

    pub fn current_word(&self) -> Option<&str> {
        self.reference
            .word(self.state.sentence_index, self.state.word_index)
    }

    /// Forget all progress; the next keystroke starts the clocks again.
    pub fn reset(&mut self) {
        self.state = SegmentationState::default();
        self.timers = None;
        self.finished = false;
    }

    /// Record one key press and return the events it triggers, `KeyPressed` first.
    pub fn observe(&mut self, key: Option<char>, clock: &dyn Clock) -> Vec<TimingEvent> {
        let now = clock.now();
        if self.timers.is_none() {
            debug!("first keystroke, starting task timers");
            self.timers = Some(Timers::starting_at(now));
        }

        let mut events = vec![TimingEvent::KeyPressed { key, at: now }];
        let Some(ch) = key else {
            // Editing keys still break a run of word chars or punctuation.
            self.state.last_char = Some(NO_TEXT);
            return events;
        };

        if is_word_terminator(ch) {
            self.finish_word(ch, now, &mut events);
        } else if is_word_char(ch) && self.state.last_char.is_some_and(|c| !c.is_alphanumeric()) {
            debug!("new word started");
            self.timers_mut(now).word = now;
        }

        self.state.last_char = Some(ch);
        events
    }

    fn timers_mut(&mut self, now: OffsetDateTime) -> &mut Timers {
        self.timers.get_or_insert_with(|| Timers::starting_at(now))
    }

    fn finish_word(&mut self, ch: char, now: OffsetDateTime, events: &mut Vec<TimingEvent>) {
        // A space right after `,;:.!?` belongs to the boundary already counted.
        if ch == ' ' && self.state.last_char.is_some_and(is_punctuation_terminator) {
            return;
        }

        let start = self.timers_mut(now).word;
        let word = self.current_word().map(str::to_string);
        debug!(?word, "word finished");
        events.push(TimingEvent::WordCompleted {
            word,
            interval: Interval { start, end: now },
        });
        self.state.word_index += 1;

        if is_sentence_terminator(ch) {
            self.finish_sentence(now, events);
        }
    }

    fn finish_sentence(&mut self, now: OffsetDateTime, events: &mut Vec<TimingEvent>) {
        let start = self.timers_mut(now).sentence;
        let sentence = self.current_sentence().map(|s| s.text.clone());
        debug!(?sentence, "sentence finished");
        events.push(TimingEvent::SentenceCompleted {
            sentence,
            interval: Interval { start, end: now },
        });

        self.state.word_index = 0;
        self.state.sentence_index += 1;

        if self.state.sentence_index < self.reference.sentence_count() {
            self.timers_mut(now).sentence = now;
        } else if !self.finished {
            self.finished = true;
            let start = self.timers_mut(now).task;
            debug!("task finished");
            events.push(TimingEvent::TaskCompleted {
                text: self.reference.full_text().to_string(),
                interval: Interval { start, end: now },
            });
        }
    }
}
