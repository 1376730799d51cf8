//! Command-line adapter: parses arguments into a session run and writes the
//! final frame to an image file.

pub mod args;
pub mod errors;
pub mod run_cli;

pub use args::{CliOptions, build_command, cli_options_from_matches, parse_args};
pub use errors::CliError;
pub use run_cli::{RunCliCommand, init_logging};
