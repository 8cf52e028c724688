//! Tally Parse - line classification and expression parsing.
//!
//! Two entry points:
//!
//! - [`classify_line`]: decides whether a document line is prose, a comment,
//!   an expression (optionally assigned to a dot-path) or a user function
//!   definition. Pure and total.
//! - [`parse_expression`]: turns expression text into an [`Expr`] tree.
//!
//! The classifier works on raw text with a fixed set of shape rules and
//! never calls the parser; a line can classify as an expression and still
//! fail to parse, which the evaluator reports as an error for that line.

mod classify;
mod error;
mod parser;

pub use classify::{classify_line, is_dot_path, is_identifier};
pub use error::ParseError;
pub use parser::parse_expression;

// Re-export for callers that only need the AST alongside the parser.
pub use tally_ir::Expr;
