//! Output console and run-code orchestration.
//!
//! The console is an append-only line buffer the host renders below the
//! editor. [`run_code`] wires a document's text through the host
//! interpreter: expression first (so `1 + 1` prints `2` like a REPL), then
//! statement execution when the text is not a single expression, with any
//! raised failure rendered as an `[ERROR]` trace. A failing run never
//! terminates the editing session.

use tracing::debug;

use crate::eval::{EvalError, ScriptHost};

/// Destination for text produced while running script code.
pub trait OutputSink {
    /// Append `text` to the sink. Embedded newlines split into lines.
    fn write(&mut self, text: &str);
}

/// Append-only line buffer backing the panel's output area.
#[derive(Debug, Default, Clone)]
pub struct OutputConsole {
    lines: Vec<String>,
}

impl OutputConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full console text, newline-joined.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Append a tagged informational notice (file opened, file saved, ...).
    pub fn info(&mut self, message: &str) {
        self.write(&format!("[INFO] {message}"));
    }
}

impl OutputSink for OutputConsole {
    fn write(&mut self, text: &str) {
        // A newline-terminated write ends a line rather than opening a
        // blank one, so streamed host output does not accumulate gaps.
        let text = text.strip_suffix('\n').unwrap_or(text);
        for line in text.split('\n') {
            self.lines.push(line.to_string());
        }
    }
}

/// Run `code` against the host and render the outcome into `console`.
///
/// The console is cleared first, mirroring a fresh run. Empty (or
/// whitespace-only) code is a no-op.
pub fn run_code(host: &mut dyn ScriptHost, console: &mut OutputConsole, code: &str) {
    console.clear();
    let code = code.trim();
    if code.is_empty() {
        return;
    }

    match host.eval_expression(code, console) {
        Ok(Some(value)) => console.write(&value),
        Ok(None) => {}
        Err(EvalError::NotAnExpression) => {
            debug!("not a single expression, executing as a block");
            if let Err(err) = host.exec_block(code, console) {
                report_failure(console, &err);
            }
        }
        Err(err) => report_failure(console, &err),
    }
}

fn report_failure(console: &mut OutputConsole, err: &EvalError) {
    match err {
        EvalError::Raised { trace } => console.write(&format!("[ERROR]\n{trace}")),
        other => console.write(&format!("[ERROR]\n{other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal scripted host: a fixed response per operation.
    struct ScriptedHost {
        expression_value: Result<Option<String>, EvalError>,
        block_result: Result<(), EvalError>,
    }

    impl ScriptHost for ScriptedHost {
        fn eval_expression(
            &mut self,
            _expr: &str,
            out: &mut dyn OutputSink,
        ) -> Result<Option<String>, EvalError> {
            if let Ok(Some(_)) = &self.expression_value {
                out.write("side output");
            }
            self.expression_value.clone()
        }

        fn exec_block(&mut self, _code: &str, out: &mut dyn OutputSink) -> Result<(), EvalError> {
            out.write("block output");
            self.block_result.clone()
        }

        fn attribute_names(&mut self, _expr: &str) -> Result<Vec<String>, EvalError> {
            Err(EvalError::Unavailable)
        }
    }

    #[test]
    fn test_expression_value_is_printed() {
        let mut host = ScriptedHost {
            expression_value: Ok(Some("2".to_string())),
            block_result: Ok(()),
        };
        let mut console = OutputConsole::new();
        run_code(&mut host, &mut console, "1 + 1");
        assert_eq!(console.lines(), &["side output".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_statement_fallback() {
        let mut host = ScriptedHost {
            expression_value: Err(EvalError::NotAnExpression),
            block_result: Ok(()),
        };
        let mut console = OutputConsole::new();
        run_code(&mut host, &mut console, "x = 1\nprint(x)");
        assert_eq!(console.lines(), &["block output".to_string()]);
    }

    #[test]
    fn test_raised_failure_renders_error_trace() {
        let mut host = ScriptedHost {
            expression_value: Err(EvalError::Raised {
                trace: "Traceback (most recent call last):\nZeroDivisionError".to_string(),
            }),
            block_result: Ok(()),
        };
        let mut console = OutputConsole::new();
        run_code(&mut host, &mut console, "1 / 0");
        assert_eq!(console.lines()[0], "[ERROR]");
        assert_eq!(console.lines()[1], "Traceback (most recent call last):");
        assert_eq!(console.lines()[2], "ZeroDivisionError");
    }

    #[test]
    fn test_block_failure_after_fallback() {
        let mut host = ScriptedHost {
            expression_value: Err(EvalError::NotAnExpression),
            block_result: Err(EvalError::Raised { trace: "NameError".to_string() }),
        };
        let mut console = OutputConsole::new();
        run_code(&mut host, &mut console, "boom()");
        assert_eq!(
            console.lines(),
            &["block output".to_string(), "[ERROR]".to_string(), "NameError".to_string()]
        );
    }

    #[test]
    fn test_empty_code_is_a_no_op() {
        let mut host = ScriptedHost {
            expression_value: Err(EvalError::Unavailable),
            block_result: Ok(()),
        };
        let mut console = OutputConsole::new();
        console.info("stale");
        run_code(&mut host, &mut console, "   \n  ");
        assert!(console.is_empty());
    }

    #[test]
    fn test_run_clears_previous_output() {
        let mut host = ScriptedHost {
            expression_value: Ok(Some("ok".to_string())),
            block_result: Ok(()),
        };
        let mut console = OutputConsole::new();
        console.info("old run");
        run_code(&mut host, &mut console, "value");
        assert!(!console.text().contains("old run"));
    }

    #[test]
    fn test_newline_terminated_writes_do_not_leave_blank_lines() {
        let mut console = OutputConsole::new();
        console.write("hi\n");
        console.write("there\n");
        assert_eq!(console.lines(), &["hi".to_string(), "there".to_string()]);

        // Interior newlines still split into separate lines.
        console.write("a\nb\n");
        assert_eq!(console.lines().len(), 4);
    }

    #[test]
    fn test_info_lines_are_tagged() {
        let mut console = OutputConsole::new();
        console.info("Opened file: /tmp/a.py");
        assert_eq!(console.text(), "[INFO] Opened file: /tmp/a.py");
    }
}
