//! Candidate generation.

use tracing::debug;

use crate::completion::context::{LineContext, classify_line};
use crate::completion::keywords::{PRIVATE_MARKER, static_candidates};
use crate::eval::ScriptHost;

/// The outcome of resolving completions at a cursor position.
///
/// `prefix` is the partial identifier being typed and `prefix_start` the char
/// column where it begins; on accept, the caller replaces exactly the span
/// `prefix_start..column` with the chosen candidate. Candidates are NOT
/// filtered by the prefix here; the popup widget owns that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub prefix: String,
    pub prefix_start: usize,
    pub candidates: Vec<String>,
}

/// Resolve completion candidates for the line head ending at `column`.
///
/// Bare identifiers get the static keyword/builtin list. Dotted expressions
/// are introspected through the host; names carrying the private marker are
/// dropped. Introspection failure is the normal state while an expression is
/// half-typed, so it silently falls back to the static list: never an
/// error, never a partial mix of both sources.
///
/// Note that introspection evaluates `expr` in the host's live namespace and
/// may therefore have arbitrary side effects there; the line text itself is
/// never touched.
pub fn resolve_completions(
    line_text: &str,
    column: usize,
    host: &mut dyn ScriptHost,
) -> Resolution {
    let column = column.min(line_text.chars().count());

    match classify_line(line_text, column) {
        LineContext::DottedAttribute { expr, prefix } => {
            let candidates = match host.attribute_names(&expr) {
                Ok(names) => names
                    .into_iter()
                    .filter(|name| !name.starts_with(PRIVATE_MARKER))
                    .collect(),
                Err(err) => {
                    debug!(expr = %expr, error = %err, "introspection failed, using static candidates");
                    static_candidates()
                }
            };
            Resolution {
                prefix_start: column - prefix.chars().count(),
                prefix,
                candidates,
            }
        }
        LineContext::BareIdentifier { prefix } => Resolution {
            prefix_start: column - prefix.chars().count(),
            prefix,
            candidates: static_candidates(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::OutputSink;
    use crate::eval::EvalError;

    /// Host whose namespace contains a single object with fixed attributes.
    struct FixedHost {
        known: &'static str,
        attributes: Vec<&'static str>,
        calls: usize,
    }

    impl ScriptHost for FixedHost {
        fn eval_expression(
            &mut self,
            _expr: &str,
            _out: &mut dyn OutputSink,
        ) -> Result<Option<String>, EvalError> {
            Err(EvalError::Unavailable)
        }

        fn exec_block(&mut self, _code: &str, _out: &mut dyn OutputSink) -> Result<(), EvalError> {
            Err(EvalError::Unavailable)
        }

        fn attribute_names(&mut self, expr: &str) -> Result<Vec<String>, EvalError> {
            self.calls += 1;
            if expr == self.known {
                Ok(self.attributes.iter().map(|s| s.to_string()).collect())
            } else {
                Err(EvalError::Raised { trace: format!("NameError: name '{expr}' is not defined") })
            }
        }
    }

    fn os_host() -> FixedHost {
        FixedHost { known: "os", attributes: vec!["path", "getcwd", "_internal"], calls: 0 }
    }

    #[test]
    fn test_dotted_introspection_excludes_private() {
        let mut host = os_host();
        let resolution = resolve_completions("os.", 3, &mut host);
        assert_eq!(resolution.prefix, "");
        assert_eq!(resolution.prefix_start, 3);
        assert_eq!(resolution.candidates, vec!["path".to_string(), "getcwd".to_string()]);
    }

    #[test]
    fn test_failed_evaluation_falls_back_to_static_list() {
        let mut host = os_host();
        let resolution = resolve_completions("x = brokenname.", 15, &mut host);
        assert_eq!(resolution.prefix, "");
        assert_eq!(resolution.candidates, static_candidates());
    }

    #[test]
    fn test_bare_prefix_uses_static_list_without_evaluating() {
        let mut host = os_host();
        let resolution = resolve_completions("impo", 4, &mut host);
        assert_eq!(resolution.prefix, "impo");
        assert_eq!(resolution.prefix_start, 0);
        assert_eq!(resolution.candidates, static_candidates());
        assert_eq!(host.calls, 0);
    }

    #[test]
    fn test_prefix_span_for_dotted_partial() {
        let mut host = os_host();
        let resolution = resolve_completions("os.pa", 5, &mut host);
        assert_eq!(resolution.prefix, "pa");
        assert_eq!(resolution.prefix_start, 3);
        assert_eq!(resolution.candidates, vec!["path".to_string(), "getcwd".to_string()]);
    }

    #[test]
    fn test_idempotent_with_pure_host() {
        let mut host = os_host();
        let first = resolve_completions("os.g", 4, &mut host);
        let second = resolve_completions("os.g", 4, &mut host);
        assert_eq!(first, second);
    }
}
