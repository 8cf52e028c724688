//! Recursive-descent expression parser.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Parser` state, token cursor helpers, entry point
//! - `expr.rs`: ternary and the binary operator precedence chain
//! - `primary.rs`: unary, power, postfix (call, member, index) and literals
//!
//! # Precedence (lowest to highest)
//!
//! | Level | Operators              | Associativity |
//! |-------|------------------------|---------------|
//! | 1     | `? :`                  | right         |
//! | 2     | `\|\|`                 | left          |
//! | 3     | `&&`                   | left          |
//! | 4     | `== != === !==`        | left          |
//! | 5     | `< <= > >=`            | left          |
//! | 6     | `+ -`                  | left          |
//! | 7     | `* / %`                | left          |
//! | 8     | unary `- + !`          | prefix        |
//! | 9     | `** ^`                 | right         |
//! | 10    | call, `.field`, `[i]`  | postfix       |

mod expr;
mod primary;

use tally_ir::{Expr, Span, Token, TokenKind};

use crate::ParseError;

/// Parse one expression. The whole text must be consumed.
pub fn parse_expression(text: &str) -> Result<Expr, ParseError> {
    let tokens = tally_lexer::lex(text)?;
    let mut parser = Parser::new(&tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(expr)
}

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with `Eof` (guaranteed by `tally_lexer::lex`).
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    #[inline]
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        self.current().map_or(&TokenKind::Eof, |t| &t.kind)
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current()
            .or_else(|| self.tokens.last())
            .map_or(Span::default(), |t| t.span)
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Advance past the current token (never past `Eof`).
    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume `kind` if it is the current token.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report what was found instead.
    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    #[cold]
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        if self.check(&TokenKind::Eq) {
            return ParseError::AssignmentInExpression {
                span: self.current_span(),
            };
        }
        ParseError::UnexpectedToken {
            found: self.current_kind().clone(),
            expected,
            span: self.current_span(),
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Eof => Ok(()),
            TokenKind::Eq => Err(ParseError::AssignmentInExpression {
                span: self.current_span(),
            }),
            found => Err(ParseError::TrailingInput {
                found: found.clone(),
                span: self.current_span(),
            }),
        }
    }
}
