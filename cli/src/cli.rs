//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// numseq - Run operations on number sequences
#[derive(Parser, Debug)]
#[command(name = "numseq", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run operations given as arguments
    Eval(EvalArgs),

    /// Run an operation script file
    Run(RunArgs),

    /// Look up or edit a synonym file
    Synonyms(SynonymsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Initial numbers, e.g. "5, 1, 3"
    #[arg(allow_hyphen_values = true)]
    pub numbers: String,

    /// Operations, one statement per argument (e.g. "insert 1 9" "show")
    pub operations: Vec<String>,

    /// Representation to run the operations on
    #[arg(long, default_value = "both")]
    pub backing: Backing,

    /// Stop after the first failing operation
    #[arg(long)]
    pub stop_on_error: bool,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to run (use "-" for stdin)
    pub file: String,

    /// Initial numbers, e.g. "5, 1, 3"
    #[arg(long, short, allow_hyphen_values = true)]
    pub numbers: String,

    /// Representation to run the script on
    #[arg(long, default_value = "both")]
    pub backing: Backing,

    /// Stop after the first failing operation
    #[arg(long)]
    pub stop_on_error: bool,
}

/// Arguments for the `synonyms` command.
#[derive(Args, Debug)]
pub struct SynonymsArgs {
    /// Synonym file (`word | synonym, synonym` per line)
    pub file: PathBuf,

    /// Write changes here instead of back to FILE
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub action: SynonymAction,
}

#[derive(Subcommand, Debug)]
pub enum SynonymAction {
    /// Print the line for a word
    Lookup { word: String },
    /// Append a line, e.g. "cold | chilly, icy"
    AddLine { line: String },
    /// Remove the line for a word
    RemoveLine { word: String },
    /// Add a synonym to a word
    Add { word: String, synonym: String },
    /// Remove a synonym from a word
    Remove { word: String, synonym: String },
    /// Sort lines and synonyms alphabetically
    Sort,
    /// Print the whole file
    Show,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Representation to run operations on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backing {
    /// Contiguous buffer
    Array,
    /// Chain of nodes
    Linked,
    /// Run both and compare results
    #[default]
    Both,
}
