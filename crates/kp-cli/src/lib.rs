//! Library side of `kptool`: key-script parsing, subcommand
//! implementations and tracing setup.

pub mod commands;
pub mod script;
pub mod trace_init;
