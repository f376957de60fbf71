//! The `eval` command - run operations given on the command line.

use std::process::ExitCode;

use numseq::script::{self, RunOptions, Transcript};
use numseq::{Error, SequenceKind};

use crate::cli::{Backing, EvalArgs};
use crate::common::error::render;
use crate::common::panic::{clear_current_script, set_current_script};

/// Run the eval command.
pub fn run(args: EvalArgs, no_color: bool) -> ExitCode {
    let source = args.operations.join("\n");
    let options = RunOptions {
        stop_on_error: args.stop_on_error,
    };
    interpret_input(
        &args.numbers,
        &source,
        None, // operations come from arguments, not a file
        args.backing,
        &options,
        no_color,
    )
}

/// Parse `numbers` and `source`, run the script and print the transcript.
pub fn interpret_input(
    numbers: &str,
    source: &str,
    filename: Option<&str>,
    backing: Backing,
    options: &RunOptions,
    no_color: bool,
) -> ExitCode {
    let render_err = |e: Error| render(&e, no_color);

    let numbers = match script::parse_numbers(numbers) {
        Ok(numbers) => numbers,
        Err(e) => {
            render_err(Error::script(e, numbers).with_filename("<numbers>"));
            return ExitCode::FAILURE;
        }
    };

    let script = match script::parse(source) {
        Ok(script) => script,
        Err(e) => {
            render_err(Error::script(e, source).with_filename_opt(filename));
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        numbers = numbers.len(),
        statements = script.len(),
        ?backing,
        "Running script"
    );

    set_current_script(source);
    let result = match backing {
        Backing::Array => run_single(SequenceKind::Array, &script, &numbers, options),
        Backing::Linked => run_single(SequenceKind::Linked, &script, &numbers, options),
        Backing::Both => script::run_all(&script, &numbers, options)
            .map(output_both_results)
            .map_err(Error::from),
    };
    clear_current_script();

    match result {
        Ok(code) => code,
        Err(e) => {
            render_err(e);
            ExitCode::FAILURE
        }
    }
}

fn run_single(
    kind: SequenceKind,
    script: &script::Script,
    numbers: &[f64],
    options: &RunOptions,
) -> Result<ExitCode, Error> {
    let mut sequence = kind.build(numbers)?;
    let transcript = script.run(&mut *sequence, options);
    print!("{}", transcript);
    Ok(ExitCode::SUCCESS)
}

/// Output transcripts from both representations, checking for mismatches.
fn output_both_results(transcripts: Vec<(SequenceKind, Transcript)>) -> ExitCode {
    let Some(((_, first), rest)) = transcripts.split_first() else {
        return ExitCode::SUCCESS;
    };

    if rest.iter().all(|(_, transcript)| transcript == first) {
        print!("{}", first);
        return ExitCode::SUCCESS;
    }

    eprintln!("MISMATCH!");
    for (kind, transcript) in &transcripts {
        eprintln!("  {}:", kind);
        for line in transcript.to_string().lines() {
            eprintln!("    {}", line);
        }
    }
    ExitCode::FAILURE
}
