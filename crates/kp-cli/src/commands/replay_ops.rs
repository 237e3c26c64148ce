use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use kp_core::corpus::CorpusFormat;
use kp_core::log::{CsvSink, TimingSink, TrialContext};
use kp_core::segment::ReferenceText;
use kp_core::settings::settings;
use kp_core::timing::ManualClock;
use kp_core::vocab::Vocabulary;
use kp_session::{CompletionSession, KeyEvent};

use crate::script::parse_script;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub struct ReplayOptions {
    pub corpus: String,
    pub format: CorpusFormat,
    pub reference: String,
    pub keys: String,
    pub participant: u32,
    pub condition: String,
    pub autocomplete: bool,
    /// Simulated time between two key presses.
    pub interval_ms: u64,
    /// CSV destination; stdout when `None`.
    pub output: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub keys: usize,
    pub commits: usize,
    pub events: usize,
    pub sink_errors: usize,
    pub finished: bool,
}

/// Feed `events` through `session`, advancing `clock` by `interval` before
/// each key, and hand every timing event to `sink`. Sink failures are
/// counted and logged; the replay keeps going.
pub fn run_script(
    session: &mut CompletionSession,
    events: &[KeyEvent],
    clock: &ManualClock,
    interval: Duration,
    ctx: &TrialContext,
    sink: &mut dyn TimingSink,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for event in events {
        clock.advance(interval);
        let resp = session.handle_key(*event, clock);
        summary.keys += 1;

        if let Some(text) = &resp.commit {
            debug!(%text, "replay commit");
            summary.commits += 1;
        }
        for timing in &resp.timing {
            summary.events += 1;
            if let Err(e) = sink.record(ctx, timing) {
                warn!(error = %e, "timing sink rejected event");
                summary.sink_errors += 1;
            }
        }
    }

    if let Err(e) = sink.flush() {
        warn!(error = %e, "timing sink flush failed");
        summary.sink_errors += 1;
    }
    summary.finished = session.tracker().is_some_and(|t| t.is_finished());
    summary
}

pub fn replay(opts: &ReplayOptions) {
    let vocab = die!(
        Vocabulary::load(Path::new(&opts.corpus), opts.format),
        "Error loading corpus {}: {}",
        opts.corpus
    );
    let reference_text = die!(
        fs::read_to_string(&opts.reference),
        "Error reading {}: {}",
        opts.reference
    );
    let script = die!(
        fs::read_to_string(&opts.keys),
        "Error reading {}: {}",
        opts.keys
    );
    let events = die!(parse_script(&script), "Error in key script: {}");

    let writer: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(die!(
            File::create(path),
            "Error creating {path}: {}"
        ))),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = CsvSink::new(writer, settings().log.write_header);

    let mut session = CompletionSession::new(Arc::new(vocab));
    session.set_completion_enabled(opts.autocomplete);
    session.begin_trial(ReferenceText::split(&reference_text));

    let ctx = TrialContext {
        participant_id: opts.participant,
        condition: opts.condition.clone(),
        autocompletion: opts.autocomplete,
    };
    let clock = ManualClock::new(OffsetDateTime::now_utc());
    let interval = Duration::milliseconds(opts.interval_ms as i64);
    let summary = run_script(&mut session, &events, &clock, interval, &ctx, &mut sink);

    if let Err(e) = sink.into_inner().and_then(|mut w| w.flush().map_err(Into::into)) {
        warn!(error = %e, "closing timing log failed");
    }

    eprintln!(
        "{} keys, {} completions, {} events, {} sink errors, task {}",
        summary.keys,
        summary.commits,
        summary.events,
        summary.sink_errors,
        if summary.finished { "finished" } else { "unfinished" }
    );
    eprintln!("Final text: {:?}", session.text());
}
