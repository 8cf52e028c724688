//! Per-line evaluation results and the document evaluation output.

use crate::value::{ObjectMap, Value};

/// Result of evaluating one document line.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    /// 1-based line number.
    pub line_number: usize,
    pub kind: ResultKind,
}

/// What a line produced.
///
/// Only `Value` and `Assignment` carry a value and only `Error` carries a
/// message; the remaining tags carry nothing beyond themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultKind {
    /// A bare expression evaluated to a value.
    Value(Value),
    /// An assignment stored `value` at `target`.
    Assignment { target: String, value: Value },
    /// A user function was (re)defined.
    FunctionDefined { name: String },
    Text,
    Comment,
    /// The line failed to evaluate.
    Error { message: String },
}

impl EvaluationResult {
    pub fn new(line_number: usize, kind: ResultKind) -> Self {
        EvaluationResult { line_number, kind }
    }

    /// The value produced by a `Value` or `Assignment` line.
    pub fn value(&self) -> Option<&Value> {
        match &self.kind {
            ResultKind::Value(value) | ResultKind::Assignment { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The failure message of an `Error` line.
    pub fn error_message(&self) -> Option<&str> {
        match &self.kind {
            ResultKind::Error { message } => Some(message),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, ResultKind::Error { .. })
    }
}

/// Everything a document evaluation hands back to its caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluationOutput {
    /// One result per input line, in line order.
    pub results: Vec<EvaluationResult>,
    /// Final top-level variables (functions stay internal).
    pub variables: ObjectMap,
}

impl EvaluationOutput {
    /// Look up a final top-level variable.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Number of lines that failed.
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }
}
