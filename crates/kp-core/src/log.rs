//! Timing sinks: where key, word, sentence and task events end up.
//!
//! The study appends one CSV line per event to a shared log file; each
//! line is tagged with the participant, the condition and whether the
//! autocomplete popup was active.

use std::io::{self, Write};

use serde::Serialize;
use time::OffsetDateTime;

use crate::timing::TimingEvent;

/// Who typed, under which condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialContext {
    pub participant_id: u32,
    pub condition: String,
    pub autocompletion: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub trait TimingSink {
    fn record(&mut self, ctx: &TrialContext, event: &TimingEvent) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Event type names as they appear in the CSV log.
pub fn event_type_name(event: &TimingEvent) -> &'static str {
    match event {
        TimingEvent::KeyPressed { .. } => "key_pressed",
        TimingEvent::WordCompleted { .. } => "word_typed",
        TimingEvent::SentenceCompleted { .. } => "sentence_typed",
        TimingEvent::TaskCompleted { .. } => "test_finished",
    }
}

fn unix_seconds(t: OffsetDateTime) -> f64 {
    t.unix_timestamp_nanos() as f64 / 1e9
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    event_type: &'static str,
    timestamp: f64,
    participant_id: u32,
    condition: &'a str,
    with_autocompletion: bool,
    entered_content: String,
    start_time_in_s: f64,
    end_time_in_s: f64,
    duration_in_s: f64,
}

impl<'a> CsvRow<'a> {
    fn new(ctx: &'a TrialContext, event: &TimingEvent) -> Self {
        let interval = event.interval();
        Self {
            event_type: event_type_name(event),
            timestamp: unix_seconds(interval.end),
            participant_id: ctx.participant_id,
            condition: &ctx.condition,
            with_autocompletion: ctx.autocompletion,
            entered_content: event.content(),
            start_time_in_s: unix_seconds(interval.start),
            end_time_in_s: unix_seconds(interval.end),
            duration_in_s: interval.duration().as_seconds_f64(),
        }
    }
}

/// Line-oriented CSV log, one row per event.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// `write_header` emits the column names before the first row; turn it
    /// off when appending to a log that already has them.
    pub fn new(inner: W, write_header: bool) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(inner);
        Self { writer }
    }

    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> TimingSink for CsvSink<W> {
    fn record(&mut self, ctx: &TrialContext, event: &TimingEvent) -> Result<(), SinkError> {
        self.writer.serialize(CsvRow::new(ctx, event))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<(TrialContext, TimingEvent)>,
}

impl TimingSink for MemorySink {
    fn record(&mut self, ctx: &TrialContext, event: &TimingEvent) -> Result<(), SinkError> {
        self.records.push((ctx.clone(), event.clone()));
        Ok(())
    }
}
