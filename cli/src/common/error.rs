//! Error handling utilities for the CLI.

use std::process::ExitCode;

use numseq::{Error, RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Error>;

/// Render config for the current color setting.
pub fn render_config(no_color: bool) -> RenderConfig<'static> {
    RenderConfig {
        color: !no_color,
        ..Default::default()
    }
}

/// Render an error to stderr without exiting.
pub fn render(error: &Error, no_color: bool) {
    render_error_to(error, &mut std::io::stderr(), &render_config(no_color)).ok();
}

/// Render the error, if any, and turn the result into an exit code.
pub fn exit_code(result: CliResult<()>, no_color: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            render(&error, no_color);
            ExitCode::FAILURE
        }
    }
}
