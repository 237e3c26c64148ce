use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Load a settings file into the process-wide singleton. Must run before
/// anything calls `settings()`.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        kp_core::settings::init_custom(content),
        "Error in settings {file}: {}"
    );
}

pub fn settings_export() {
    print!("{}", kp_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kp_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: completion.min_prefix_chars={}, completion.max_visible={}, corpus.format={:?}",
        s.completion.min_prefix_chars, s.completion.max_visible, s.corpus.format
    );
}
