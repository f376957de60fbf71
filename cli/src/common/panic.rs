//! Panic handler for user-friendly crash reporting.

use std::cell::RefCell;
use std::panic::PanicHookInfo;

thread_local! {
    /// The script being run (for crash reports).
    static CURRENT_SCRIPT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Record the script about to be run.
pub fn set_current_script(script: &str) {
    CURRENT_SCRIPT.with(|cell| {
        *cell.borrow_mut() = Some(script.to_string());
    });
}

/// Forget the current script once it has finished.
pub fn clear_current_script() {
    CURRENT_SCRIPT.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

fn get_current_script() -> Option<String> {
    CURRENT_SCRIPT.with(|cell| cell.borrow().clone())
}

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    eprintln!("\nnumseq crashed unexpectedly!\n");
    eprintln!("{info}");

    let report = CrashReport::from_hook(info);
    eprintln!("\nPlease open an issue with the following details:\n");
    eprint!("{}", report.render());
}

/// Details collected when the process panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    pub version: String,
    pub os: String,
    pub arch: String,
    pub location: String,
    /// Command line arguments (each arg as a separate element).
    pub command_line: Vec<String>,
    /// The script being run, if any.
    pub script: Option<String>,
    pub message: String,
}

impl CrashReport {
    fn from_hook(info: &PanicHookInfo<'_>) -> Self {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("unknown");

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        CrashReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            location,
            command_line: std::env::args().skip(1).collect(),
            script: get_current_script(),
            message: message.to_string(),
        }
    }

    /// Format the command line for display, properly shell-escaped.
    pub fn format_command_line(&self) -> Option<String> {
        if self.command_line.is_empty() {
            return None;
        }
        Some(format!(
            "numseq {}",
            shlex::try_join(self.command_line.iter().map(|s| s.as_str())).ok()?
        ))
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "  version:   {}\n  platform:  {}-{}\n  location:  {}\n  message:   {}\n",
            self.version, self.os, self.arch, self.location, self.message
        );
        if let Some(command) = self.format_command_line() {
            out.push_str(&format!("  command:   {}\n", command));
        }
        if let Some(script) = &self.script {
            out.push_str(&format!("  script:    {}\n", script));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(command_line: &[&str]) -> CrashReport {
        CrashReport {
            version: "0.1.0".to_string(),
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            location: "core/src/linked.rs:1:1".to_string(),
            command_line: command_line.iter().map(|s| s.to_string()).collect(),
            script: None,
            message: "panic".to_string(),
        }
    }

    #[test]
    fn format_command_line_escapes_spaces() {
        let info = report(&["eval", "5, 1, 3", "insert 1 9"]);
        assert_eq!(
            info.format_command_line(),
            Some("numseq eval '5, 1, 3' 'insert 1 9'".to_string())
        );
    }

    #[test]
    fn format_command_line_round_trips_quotes() {
        let info = report(&["run", "it's a \"test\".ops", "-n", "1 2"]);
        let formatted = info.format_command_line().unwrap();
        let parts = shlex::split(&formatted).unwrap();
        assert_eq!(parts, vec!["numseq", "run", "it's a \"test\".ops", "-n", "1 2"]);
    }

    #[test]
    fn format_command_line_empty_returns_none() {
        assert_eq!(report(&[]).format_command_line(), None);
    }

    #[test]
    fn render_includes_script_when_known() {
        let mut info = report(&["eval", "1 2", "at 0"]);
        assert!(!info.render().contains("script:"));
        info.script = Some("at 0".to_string());
        let rendered = info.render();
        assert!(rendered.contains("  script:    at 0\n"), "{rendered}");
        assert!(rendered.contains("  platform:  linux-x86_64\n"), "{rendered}");
    }

    #[test]
    fn thread_local_script_set_get_clear() {
        assert!(get_current_script().is_none());

        set_current_script("remove 0");
        assert_eq!(get_current_script(), Some("remove 0".to_string()));

        clear_current_script();
        assert!(get_current_script().is_none());
    }
}
