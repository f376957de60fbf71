//! Error rendering using ariadne
//!
//! Script errors are rendered with a snippet of the offending line; the
//! other errors have no source location and render as a single line.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use numseq_core::script::ScriptError;
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Used when the error does not carry its own filename.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use numseq::{Error, RenderConfig, render_error_to, script};
///
/// let source = "add 1\ninsert 2";
/// let error = Error::script(script::parse(source).unwrap_err(), source);
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&error, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("`insert` expects 2 argument(s), found 1"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Script {
            error,
            text,
            filename,
        } => {
            let filename = filename
                .as_deref()
                .or(config.filename)
                .unwrap_or("<unknown>");
            render_script_error(error, text, writer, config, filename)
        }
        other => match other.code() {
            Some(code) => writeln!(writer, "[{}] Error: {}", code, other),
            None => writeln!(writer, "Error: {}", other),
        },
    }
}

fn render_script_error(
    error: &ScriptError,
    text: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    // Script spans are byte offsets.
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (filename, error.span.clone()))
        .with_message(&error.message)
        .with_config(ariadne_config)
        .with_code(error.code);

    let color = colors.next();
    report = report.with_label(
        Label::new((filename, error.span.clone()))
            .with_message(&error.message)
            .with_color(color),
    );

    if let Some(help) = &error.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(text)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{Expect, expect};
    use numseq_core::script;
    use numseq_core::{SequenceError, SequenceKind};

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        filename: Some("ops.txt"),
        charset: CharSet::Ascii,
    };

    fn render(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn check_error(source: &str, config: &RenderConfig, expected: Expect) {
        expected.assert_eq(&render_parse_error_with(source, config));
    }

    fn render_parse_error_with(source: &str, config: &RenderConfig) -> String {
        let error = script::parse(source).expect_err("source should not parse");
        render(&Error::script(error, source), config)
    }

    fn render_parse_error(source: &str) -> String {
        render_parse_error_with(source, &ASCII_CONFIG)
    }

    #[test]
    fn test_unknown_operation_ascii() {
        check_error(
            "foo 1",
            &ASCII_CONFIG,
            expect![[r#"
                [P001] Error: Unknown operation `foo`
                   ,-[ ops.txt:1:1 ]
                   |
                 1 | foo 1
                   | ^|^  
                   |  `--- Unknown operation `foo`
                   | 
                   | Help: Expected one of: add, insert, remove, at, position, contains, upper, lower, len, increasing, decreasing, array, show
                ---'
            "#]],
        );
    }

    #[test]
    fn test_unknown_operation() {
        let output = render_parse_error("add 1\npush 2");
        assert!(output.contains("[P001] Error: Unknown operation `push`"), "{output}");
        assert!(output.contains("ops.txt:2:1"), "{output}");
        assert!(output.contains("push 2"), "{output}");
        assert!(output.contains("Help: Expected one of: add, insert"), "{output}");
    }

    #[test]
    fn test_span_after_non_ascii_line() {
        let output = render_parse_error("# h\u{e9}llo w\u{f6}rld\nadd \u{d7}");
        assert!(output.contains("[P003] Error: Malformed number `\u{d7}`"), "{output}");
        assert!(output.contains("ops.txt:2:5"), "{output}");
        assert!(output.contains(" 2 | add \u{d7}"), "{output}");
        assert_eq!(
            output.matches("Malformed number").count(),
            2,
            "label missing: {output}"
        );
    }

    #[test]
    fn test_negative_position() {
        let output = render_parse_error("at -1");
        assert!(output.contains("[P004] Error: Malformed position `-1`"), "{output}");
        assert!(output.contains("ops.txt:1:4"), "{output}");
        assert!(
            output.contains("Positions are 0-based and cannot be negative"),
            "{output}"
        );
    }

    #[test]
    fn test_error_filename_wins_over_config() {
        let source = "remove";
        let error = Error::script(script::parse(source).unwrap_err(), source)
            .with_filename("script.ops");
        let output = render(&error, &ASCII_CONFIG);
        assert!(output.contains("script.ops:1:1"), "{output}");
        assert!(!output.contains("ops.txt"), "{output}");
    }

    #[test]
    fn test_unknown_filename() {
        let source = "len 3";
        let error = Error::script(script::parse(source).unwrap_err(), source);
        let config = RenderConfig {
            color: false,
            filename: None,
            charset: CharSet::Unicode,
        };
        assert!(render(&error, &config).contains("<unknown>:1:1"));
    }

    #[test]
    fn test_sequence_error_single_line() {
        let error = Error::from(SequenceKind::Array.build(&[1.0]).unwrap_err());
        assert_eq!(
            render(&error, &ASCII_CONFIG),
            "[E001] Error: not a sequence: 1 number(s) given, at least 2 required\n"
        );
        let error = Error::from(SequenceError::MinimumLength);
        assert_eq!(
            render(&error, &ASCII_CONFIG),
            "[E003] Error: only two numbers in the sequence\n"
        );
    }

    #[test]
    fn test_input_error_has_no_code() {
        let error = Error::Input("missing.ops: No such file or directory".into());
        assert_eq!(
            render(&error, &ASCII_CONFIG),
            "Error: missing.ops: No such file or directory\n"
        );
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }
}
