//! Parse error types.

use tally_ir::{Span, TokenKind};
use tally_lexer::LexError;
use thiserror::Error;

/// A failure to parse expression text.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    /// The text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token appeared where it cannot start or continue an expression.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
        span: Span,
    },

    /// A lone `=` inside an expression (only whole-line assignment exists).
    #[error("unexpected `=`: assignment is only allowed at the start of a line (use `==` to compare)")]
    AssignmentInExpression { span: Span },

    /// The expression ended but more tokens followed.
    #[error("unexpected {found} after end of expression")]
    TrailingInput { found: TokenKind, span: Span },
}

impl ParseError {
    /// Location of the offending token, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(_) => None,
            ParseError::UnexpectedToken { span, .. }
            | ParseError::AssignmentInExpression { span }
            | ParseError::TrailingInput { span, .. } => Some(*span),
        }
    }
}
