//! Evaluation settings.

use tally_stack::DEFAULT_MAX_CALL_DEPTH;

/// Knobs for a document evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested user-function calls on one line.
    pub max_call_depth: usize,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}
