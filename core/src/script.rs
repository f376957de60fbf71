//! Operation scripts: contract calls written as text, one per line.
//!
//! A script is parsed once and can then be run against any
//! [`NumberSequence`]. Running the same script against two representations
//! and comparing the resulting [`Transcript`]s is how their behavior is
//! checked for equality.
//!
//! ```text
//! # comments start with '#'
//! insert 1 9      # number 9 becomes the element at position 1
//! remove 0
//! at 2
//! show
//! ```
//!
//! | Statement             | Contract call            |
//! |-----------------------|--------------------------|
//! | `add N`               | `add(N)`                 |
//! | `insert P N`          | `insert(P, N)`           |
//! | `remove P`            | `remove_at(P)`           |
//! | `at P`                | `number_at(P)`           |
//! | `position N`          | `position_of(N)`         |
//! | `contains N`          | `contains(N)`            |
//! | `upper` / `lower`     | `upper_bound()` / `lower_bound()` |
//! | `len`                 | `len()`                  |
//! | `increasing` / `decreasing` | `is_increasing()` / `is_decreasing()` |
//! | `array`               | `to_vec()`               |
//! | `show`                | `Display`                |

use core::fmt;
use core::ops::Range;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::{format, vec};

use crate::error::SequenceError;
use crate::sequence::NumberSequence;

/// A single contract call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Add(f64),
    Insert { position: usize, number: f64 },
    Remove(usize),
    At(usize),
    Position(f64),
    Contains(f64),
    Upper,
    Lower,
    Len,
    Increasing,
    Decreasing,
    Array,
    Show,
}

/// Operation names accepted by the parser, with their argument kinds.
const OPERATIONS: &[(&str, &[Arg])] = &[
    ("add", &[Arg::Number]),
    ("insert", &[Arg::Position, Arg::Number]),
    ("remove", &[Arg::Position]),
    ("at", &[Arg::Position]),
    ("position", &[Arg::Number]),
    ("contains", &[Arg::Number]),
    ("upper", &[]),
    ("lower", &[]),
    ("len", &[]),
    ("increasing", &[]),
    ("decreasing", &[]),
    ("array", &[]),
    ("show", &[]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Position,
    Number,
}

/// An operation together with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub operation: Operation,
    pub span: Range<usize>,
}

/// Error found while parsing a script or a list of numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScriptError {
    pub message: String,
    /// Byte range in the parsed source.
    pub span: Range<usize>,
    /// Stable error code, e.g. `"P001"`.
    pub code: &'static str,
    pub help: Option<String>,
}

impl ScriptError {
    fn new(code: &'static str, message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span,
            code,
            help: None,
        }
    }

    fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Options for [`Script::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after the first step that fails.
    pub stop_on_error: bool,
}

/// Parsed script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    statements: Vec<Statement>,
}

/// Parses `source` into a script.
///
/// Each non-blank line holds one statement; `#` starts a comment that runs
/// to the end of the line.
pub fn parse(source: &str) -> Result<Script, ScriptError> {
    let mut statements = Vec::new();
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let code = match line.find('#') {
            Some(index) => &line[..index],
            None => line,
        };
        let tokens = tokenize(code, offset, |c| c.is_whitespace());
        if let Some(statement) = parse_statement(&tokens)? {
            statements.push(statement);
        }
        offset += line.len();
    }
    tracing::trace!(statements = statements.len(), "Parsed script");
    Ok(Script { statements })
}

/// Parses a list of numbers separated by commas and/or whitespace, such as
/// `"5.0, 1.0, 3.0"` or `"5 1 3"`.
pub fn parse_numbers(source: &str) -> Result<Vec<f64>, ScriptError> {
    tokenize(source, 0, |c| c == ',' || c.is_whitespace())
        .into_iter()
        .map(|token| parse_number(&token))
        .collect()
}

#[derive(Debug)]
struct Token<'a> {
    text: &'a str,
    span: Range<usize>,
}

fn tokenize<'a>(
    source: &'a str,
    offset: usize,
    separator: impl Fn(char) -> bool,
) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (index, c) in source.char_indices() {
        match (separator(c), start) {
            (true, Some(begin)) => {
                tokens.push(Token {
                    text: &source[begin..index],
                    span: offset + begin..offset + index,
                });
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(Token {
            text: &source[begin..],
            span: offset + begin..offset + source.len(),
        });
    }
    tokens
}

fn parse_statement(tokens: &[Token]) -> Result<Option<Statement>, ScriptError> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let span = match tokens.last() {
        Some(last) => name.span.start..last.span.end,
        None => name.span.clone(),
    };

    let Some((_, kinds)) = OPERATIONS.iter().find(|(op, _)| *op == name.text) else {
        let known: Vec<&str> = OPERATIONS.iter().map(|(op, _)| *op).collect();
        return Err(ScriptError::new(
            "P001",
            format!("Unknown operation `{}`", name.text),
            name.span.clone(),
        )
        .with_help(format!("Expected one of: {}", known.join(", "))));
    };
    if args.len() != kinds.len() {
        return Err(ScriptError::new(
            "P002",
            format!(
                "`{}` expects {} argument(s), found {}",
                name.text,
                kinds.len(),
                args.len()
            ),
            span,
        )
        .with_help(usage(name.text, kinds)));
    }

    let operation = match (name.text, args) {
        ("add", [n]) => Operation::Add(parse_number(n)?),
        ("insert", [p, n]) => Operation::Insert {
            position: parse_position(p)?,
            number: parse_number(n)?,
        },
        ("remove", [p]) => Operation::Remove(parse_position(p)?),
        ("at", [p]) => Operation::At(parse_position(p)?),
        ("position", [n]) => Operation::Position(parse_number(n)?),
        ("contains", [n]) => Operation::Contains(parse_number(n)?),
        ("upper", []) => Operation::Upper,
        ("lower", []) => Operation::Lower,
        ("len", []) => Operation::Len,
        ("increasing", []) => Operation::Increasing,
        ("decreasing", []) => Operation::Decreasing,
        ("array", []) => Operation::Array,
        ("show", []) => Operation::Show,
        _ => {
            return Err(ScriptError::new(
                "P001",
                format!("Unknown operation `{}`", name.text),
                name.span.clone(),
            ));
        }
    };
    Ok(Some(Statement { operation, span }))
}

fn usage(name: &str, kinds: &[Arg]) -> String {
    let mut usage = format!("Usage: {}", name);
    for kind in kinds {
        usage.push_str(match kind {
            Arg::Position => " <position>",
            Arg::Number => " <number>",
        });
    }
    usage
}

fn parse_number(token: &Token) -> Result<f64, ScriptError> {
    token.text.parse::<f64>().map_err(|_| {
        ScriptError::new(
            "P003",
            format!("Malformed number `{}`", token.text),
            token.span.clone(),
        )
    })
}

fn parse_position(token: &Token) -> Result<usize, ScriptError> {
    if let Ok(position) = token.text.parse::<usize>() {
        return Ok(position);
    }
    let error = ScriptError::new(
        "P004",
        format!("Malformed position `{}`", token.text),
        token.span.clone(),
    );
    Err(if token.text.parse::<i64>().is_ok() {
        error.with_help("Positions are 0-based and cannot be negative")
    } else {
        error.with_help("Positions are whole numbers such as 0, 1 or 2")
    })
}

impl Script {
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Runs every statement against `sequence`, recording one step per
    /// statement executed.
    pub fn run(&self, sequence: &mut dyn NumberSequence, options: &RunOptions) -> Transcript {
        let mut steps = Vec::with_capacity(self.statements.len());
        for statement in &self.statements {
            let step = execute(sequence, statement.operation);
            let failed = step.is_err();
            if let Err(error) = &step {
                tracing::debug!(operation = ?statement.operation, %error, "Step failed");
            }
            steps.push(step);
            if failed && options.stop_on_error {
                break;
            }
        }
        Transcript { steps }
    }
}

impl FromIterator<Operation> for Script {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Script {
            statements: iter
                .into_iter()
                .map(|operation| Statement {
                    operation,
                    span: 0..0,
                })
                .collect(),
        }
    }
}

/// Performs one contract call.
pub fn execute(sequence: &mut dyn NumberSequence, operation: Operation) -> Step {
    Ok(match operation {
        Operation::Add(number) => {
            sequence.add(number);
            Output::Done
        }
        Operation::Insert { position, number } => {
            sequence.insert(position, number)?;
            Output::Done
        }
        Operation::Remove(position) => Output::Number(sequence.remove_at(position)?),
        Operation::At(position) => Output::Number(sequence.number_at(position)?),
        Operation::Position(number) => Output::Position(sequence.position_of(number)),
        Operation::Contains(number) => Output::Bool(sequence.contains(number)),
        Operation::Upper => Output::Number(sequence.upper_bound()),
        Operation::Lower => Output::Number(sequence.lower_bound()),
        Operation::Len => Output::Length(sequence.len()),
        Operation::Increasing => Output::Bool(sequence.is_increasing()),
        Operation::Decreasing => Output::Bool(sequence.is_decreasing()),
        Operation::Array => Output::Numbers(sequence.to_vec()),
        Operation::Show => Output::Text(sequence.to_string()),
    })
}

/// Result of one step.
pub type Step = Result<Output, SequenceError>;

/// Value produced by a successful step.
#[derive(Debug, Clone)]
pub enum Output {
    /// A mutation that returns nothing.
    Done,
    Number(f64),
    Position(Option<usize>),
    Bool(bool),
    Length(usize),
    Numbers(Vec<f64>),
    Text(String),
}

// Numbers compare by bit pattern as well as by value, so two transcripts that
// both report `NaN` are still equal.
fn same_number(a: f64, b: f64) -> bool {
    a == b || a.to_bits() == b.to_bits()
}

impl PartialEq for Output {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Output::Done, Output::Done) => true,
            (Output::Number(a), Output::Number(b)) => same_number(*a, *b),
            (Output::Position(a), Output::Position(b)) => a == b,
            (Output::Bool(a), Output::Bool(b)) => a == b,
            (Output::Length(a), Output::Length(b)) => a == b,
            (Output::Numbers(a), Output::Numbers(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_number(*a, *b))
            }
            (Output::Text(a), Output::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Done => f.write_str("ok"),
            Output::Number(number) => write!(f, "{:?}", number),
            Output::Position(Some(position)) => write!(f, "{}", position),
            Output::Position(None) => f.write_str("-1"),
            Output::Bool(value) => write!(f, "{}", value),
            Output::Length(length) => write!(f, "{}", length),
            Output::Numbers(numbers) => {
                f.write_str("[")?;
                for (index, number) in numbers.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", number)?;
                }
                f.write_str("]")
            }
            Output::Text(text) => f.write_str(text),
        }
    }
}

/// Steps recorded by [`Script::run`], in statement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    steps: Vec<Step>,
}

impl Transcript {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Errors raised by failing steps, in order.
    pub fn errors(&self) -> impl Iterator<Item = &SequenceError> {
        self.steps.iter().filter_map(|step| step.as_ref().err())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl From<Vec<Step>> for Transcript {
    fn from(steps: Vec<Step>) -> Self {
        Transcript { steps }
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step {
                Ok(output) => writeln!(f, "{}", output)?,
                Err(error) => writeln!(f, "error: {}", error)?,
            }
        }
        Ok(())
    }
}

/// Runs `script` on a fresh sequence of every kind and returns the transcripts.
///
/// Construction errors are returned as-is; they do not depend on the kind.
pub fn run_all(
    script: &Script,
    numbers: &[f64],
    options: &RunOptions,
) -> Result<Vec<(crate::SequenceKind, Transcript)>, SequenceError> {
    let mut transcripts = vec![];
    for kind in crate::SequenceKind::ALL {
        let mut sequence = kind.build(numbers)?;
        transcripts.push((kind, script.run(&mut *sequence, options)));
    }
    Ok(transcripts)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;
