//! Lexer error type.

use thiserror::Error;

/// A failure to tokenize expression text.
///
/// Offsets are byte offsets into the expression text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
}
