//! Subscriber setup for `kptool`.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG` (default
//! `warn`). Built with the `trace` feature, a JSON-lines copy of the
//! session and timing spans is also written to `<log_dir>/kptool-trace.jsonl`.

use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;

fn stderr_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Keeps the background log writer alive; drop it at the end of `main`.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::prelude::*;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(stderr_filter());

    let mut worker = None;
    let json_layer = log_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::never(dir, "kptool-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        worker = Some(guard);
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new("kp_core=debug,kp_session=debug,kp_cli=debug"))
    });

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init();

    TraceGuard { _worker: worker }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    if log_dir.is_some() {
        eprintln!("Note: built without the `trace` feature, --trace-dir is ignored");
    }
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(stderr_filter())
        .try_init();
    TraceGuard {}
}
