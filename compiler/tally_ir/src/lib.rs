//! Tally IR - shared data types for the Tally notation language.
//!
//! This crate contains the data structures every other Tally crate agrees on:
//! - Spans and tokens for the expression lexer
//! - Expression AST nodes
//! - Runtime `Value`s (numbers, strings, objects, arrays, functions)
//! - Classified lines and per-line evaluation results
//!
//! # Design Philosophy
//!
//! - **Explicit tags**: every record that can be "one of" several shapes is an
//!   enum, so impossible combinations (an assignment that is also a function
//!   definition) cannot be built.
//! - **Cheap snapshots**: objects, arrays and strings live behind [`Heap`], a
//!   reference-counted handle with copy-on-write mutation.

pub mod ast;
pub mod line;
pub mod output;
mod span;
pub mod token;
pub mod value;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use line::{ClassifiedLine, LineKind};
pub use output::{EvaluationOutput, EvaluationResult, ResultKind};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{format_number, BuiltinFn, FunctionValue, Heap, ObjectMap, UserFunction, Value};
