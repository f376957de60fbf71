//! numseq CLI - run operations on number sequences.

mod cli;
mod commands;
mod common;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use common::error::exit_code;

fn main() -> ExitCode {
    // Install panic handler for user-friendly crash reporting
    common::panic::install_handler();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let no_color = cli.no_color;
    match cli.command {
        Command::Eval(args) => commands::eval::run(args, no_color),
        Command::Run(args) => commands::run::run(args, no_color),
        Command::Synonyms(args) => exit_code(commands::synonyms::run(args), no_color),
        Command::Completions(args) => {
            commands::completions::run(args);
            ExitCode::SUCCESS
        }
    }
}
