//! Tally Lexer - tokenizer for expression text.
//!
//! Turns the expression part of one document line into a `Vec<Token>`
//! terminated by `TokenKind::Eof`. Keywords (`true`, `false`, `null`,
//! `undefined`) are resolved here; number literals are converted to `f64`
//! and string escapes are cooked.
//!
//! # Architecture
//!
//! - `cursor`: byte cursor with lookahead over the source text
//! - `scanner`: byte-dispatch scanner producing one token per call
//! - `error`: `LexError`, the only failure mode

mod cursor;
mod error;
mod scanner;

pub use error::LexError;

use tally_ir::{Token, TokenKind};

use crate::scanner::Scanner;

/// Tokenize expression text.
///
/// The returned list always ends with a single `Eof` token.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
