//! The `run` command - run a script file.

use std::process::ExitCode;

use numseq::script::RunOptions;

use crate::cli::RunArgs;
use crate::common::error::render;
use crate::common::input::read_input;

use super::eval::interpret_input;

/// Run the run command.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let (content, display_name) = match read_input(&args.file) {
        Ok(c) => c,
        Err(e) => {
            render(&e, no_color);
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        stop_on_error: args.stop_on_error,
    };
    interpret_input(
        &args.numbers,
        &content,
        Some(&display_name),
        args.backing,
        &options,
        no_color,
    )
}
