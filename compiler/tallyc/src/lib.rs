//! Tally - line-oriented notation language.
//!
//! A Tally document mixes prose with calculations. Each line is classified
//! (text, comment, assignment, expression, function definition) and code
//! lines are evaluated in order against a running scope.
//!
//! # Entry Points
//!
//! ```text
//! classify_line(text) ──► ClassifiedLine
//!
//! evaluate_document(text, external) ──► EvaluationOutput
//!     │
//!     ├─ results    one per line
//!     └─ variables  final top-level scope
//! ```
//!
//! The `tally` binary built from this crate is a thin terminal front end.

pub mod commands;
pub mod render;
pub mod tracing_setup;

pub use tally_eval::{evaluate_document, evaluate_document_with, EvalConfig};
pub use tally_ir::{
    ClassifiedLine, EvaluationOutput, EvaluationResult, LineKind, ObjectMap, ResultKind, Value,
};
pub use tally_parse::classify_line;
