//! Tally Eval - scope store, builtins and the document evaluator.
//!
//! # Architecture
//!
//! - `scope`: running variables (dot paths) and user functions
//! - `math` / `builtins`: the math allow-list and `sum`/`avg`/`min`/`max`
//! - `bindings`: per-line name table assembly
//! - `interpreter` / `operators`: tree-walking evaluation of parsed expressions
//! - `document`: the line-by-line loop with last-answer tracking
//!
//! Expressions see only their [`Bindings`]; there is no other environment.

mod bindings;
pub mod builtins;
mod config;
mod document;
mod errors;
mod interpreter;
pub mod math;
mod operators;
mod scope;

pub use bindings::{Bindings, LAST_ANSWER_NAMES};
pub use config::EvalConfig;
pub use document::{evaluate_document, evaluate_document_with, split_lines};
pub use errors::{
    binary_type_mismatch, call_depth_exceeded, not_callable, parse_error, property_of_nullish,
    unary_type_mismatch, undefined_variable, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, evaluate_unary};
pub use scope::Scope;

/// Evaluate expression text against `bindings` with default settings.
pub fn evaluate(expression_text: &str, bindings: &Bindings) -> EvalResult {
    evaluate_with(expression_text, bindings, &EvalConfig::default())
}

/// Evaluate expression text against `bindings`.
pub fn evaluate_with(expression_text: &str, bindings: &Bindings, config: &EvalConfig) -> EvalResult {
    Interpreter::new(bindings, config.max_call_depth).eval_text(expression_text)
}
