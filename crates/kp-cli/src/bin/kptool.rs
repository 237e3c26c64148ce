use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use kp_cli::commands::{config_ops, query_ops, replay_ops, resolve_format, split_ops};
use kp_cli::trace_init::init_tracing;
use kp_core::settings::CorpusFormatName;

#[derive(Parser)]
#[command(name = "kptool", about = "Autocomplete text-entry diagnostics and replay")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Conll,
    Plain,
}

impl From<FormatArg> for CorpusFormatName {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Conll => CorpusFormatName::Conll,
            FormatArg::Plain => CorpusFormatName::Plain,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List vocabulary terms starting with a prefix
    Query {
        /// Corpus file (CoNLL or plain word list)
        corpus: String,
        /// Typed prefix
        prefix: String,
        /// Corpus format (defaults to [corpus] in settings)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Maximum number of terms to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Split a task text into sentences and words
    Split {
        /// Text file
        text_file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Type a key script against a reference text and log timing events as CSV
    Replay {
        /// Corpus file (CoNLL or plain word list)
        corpus: String,
        /// Reference text the participant copies
        reference_file: String,
        /// Key script (literal text plus <BS>, <LEFT>, <ENTER>, ...)
        keys_file: String,
        /// Corpus format (defaults to [corpus] in settings)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[arg(long, default_value = "0")]
        participant: u32,
        #[arg(long, default_value = "replay")]
        condition: String,
        /// Plain typing: timing only, no popup
        #[arg(long)]
        no_autocomplete: bool,
        /// Simulated milliseconds between key presses
        #[arg(long, default_value = "200")]
        interval_ms: u64,
        /// CSV output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = init_tracing(cli.trace_dir.as_deref());

    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Query {
            corpus,
            prefix,
            format,
            limit,
        } => {
            let format = resolve_format(format.map(Into::into));
            query_ops::query(&corpus, format, &prefix, limit);
        }
        Command::Split { text_file, json } => split_ops::split(&text_file, json),
        Command::Replay {
            corpus,
            reference_file,
            keys_file,
            format,
            participant,
            condition,
            no_autocomplete,
            interval_ms,
            output,
        } => {
            let opts = replay_ops::ReplayOptions {
                corpus,
                format: resolve_format(format.map(Into::into)),
                reference: reference_file,
                keys: keys_file,
                participant,
                condition,
                autocomplete: !no_autocomplete,
                interval_ms,
                output,
            };
            replay_ops::replay(&opts);
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
