//! The host interpreter seam.
//!
//! The panel never owns a language runtime. The hosting application hands it
//! a [`ScriptHost`]: a narrow capability for evaluating expressions,
//! executing statement blocks, and listing attribute names; nothing more.
//! This keeps the one legitimately dynamic, host-dependent dependency out of
//! the text-processing logic, and makes the completion fallback an explicit
//! `Result` branch instead of caught exceptions.

use thiserror::Error;

use crate::console::OutputSink;

/// Failure modes of host-side evaluation.
#[derive(Debug, Clone, Error)]
pub enum EvalError {
    /// The text does not parse as a single expression. The run orchestrator
    /// reacts by executing it as a statement block instead.
    #[error("not a single expression")]
    NotAnExpression,

    /// Evaluation started and raised inside the host interpreter. `trace` is
    /// the host's formatted traceback, ready for the output console.
    #[error("evaluation raised:\n{trace}")]
    Raised { trace: String },

    /// The host exposes no interpreter at all.
    #[error("no interpreter available")]
    Unavailable,
}

/// Capability the hosting application provides for running script text
/// against its live, mutable global namespace.
///
/// All three operations run arbitrary host-context code and may mutate host
/// state; the panel treats them as opaque.
pub trait ScriptHost {
    /// Evaluate `expr` as a single expression. Output produced while
    /// evaluating (e.g. prints) goes to `out`. Returns the value's display
    /// form, or `None` for a unit/None result.
    fn eval_expression(
        &mut self,
        expr: &str,
        out: &mut dyn OutputSink,
    ) -> Result<Option<String>, EvalError>;

    /// Execute `code` as a block of statements, streaming output to `out`.
    fn exec_block(&mut self, code: &str, out: &mut dyn OutputSink) -> Result<(), EvalError>;

    /// Evaluate `expr` and list ALL attribute names of the result, private
    /// ones included; filtering is the resolver's concern.
    fn attribute_names(&mut self, expr: &str) -> Result<Vec<String>, EvalError>;
}

/// Host stub for embedding the panel without an interpreter: every operation
/// reports [`EvalError::Unavailable`], so completion always uses the static
/// list and run-code renders an error into the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl ScriptHost for NullHost {
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

    fn attribute_names(&mut self, _expr: &str) -> Result<Vec<String>, EvalError> {
        Err(EvalError::Unavailable)
    }
}
