//! Hand-written byte-dispatch scanner.
//!
//! Each call to `next_token` skips whitespace, dispatches on the current byte
//! and returns one cooked token. Multi-character operators are matched
//! longest-first (`===` before `==` before `=`).

use tally_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::LexError;

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token. Returns `Eof` (repeatedly) once input is exhausted.
    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Ok(Token::new(TokenKind::Eof, Span::from_range(start..start)));
        }

        let kind = match self.cursor.current() {
            b if is_ident_start(b) => self.identifier(start),
            b'0'..=b'9' => self.number(start)?,
            b'.' if self.cursor.peek_at(1).is_ascii_digit() => self.number(start)?,
            quote @ (b'"' | b'\'') => self.string(start, quote)?,
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b':' => self.single(TokenKind::Colon),
            b'?' => self.single(TokenKind::Question),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'^' => self.single(TokenKind::Caret),
            b'*' => self.star(),
            b'=' => self.equal(),
            b'!' => self.bang(),
            b'<' => self.angle(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.angle(TokenKind::Gt, TokenKind::GtEq),
            b'&' if self.cursor.peek_at(1) == b'&' => self.double(TokenKind::AmpAmp),
            b'|' if self.cursor.peek_at(1) == b'|' => self.double(TokenKind::PipePipe),
            _ => return Err(self.unexpected(start)),
        };

        Ok(Token::new(
            kind,
            Span::from_range(start..self.cursor.pos()),
        ))
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn double(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance_n(2);
        kind
    }

    fn star(&mut self) -> TokenKind {
        if self.cursor.peek_at(1) == b'*' {
            self.double(TokenKind::StarStar)
        } else {
            self.single(TokenKind::Star)
        }
    }

    fn equal(&mut self) -> TokenKind {
        match (self.cursor.peek_at(1), self.cursor.peek_at(2)) {
            (b'=', b'=') => {
                self.cursor.advance_n(3);
                TokenKind::EqEqEq
            }
            (b'=', _) => self.double(TokenKind::EqEq),
            _ => self.single(TokenKind::Eq),
        }
    }

    fn bang(&mut self) -> TokenKind {
        match (self.cursor.peek_at(1), self.cursor.peek_at(2)) {
            (b'=', b'=') => {
                self.cursor.advance_n(3);
                TokenKind::NotEqEq
            }
            (b'=', _) => self.double(TokenKind::NotEq),
            _ => self.single(TokenKind::Bang),
        }
    }

    fn angle(&mut self, bare: TokenKind, with_eq: TokenKind) -> TokenKind {
        if self.cursor.peek_at(1) == b'=' {
            self.double(with_eq)
        } else {
            self.single(bare)
        }
    }

    // ─── Literals ──────────────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }

    /// `12`, `3.5`, `.5`, `1.`, `1e3`, `2.5E-2`
    fn number(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            let sign = usize::from(matches!(self.cursor.peek_at(1), b'+' | b'-'));
            if self.cursor.peek_at(1 + sign).is_ascii_digit() {
                self.cursor.advance_n(1 + sign);
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }
        let text = self.cursor.slice_from(start);
        text.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| LexError::InvalidNumber {
                text: text.to_string(),
            })
    }

    fn string(&mut self, start: usize, quote: u8) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        let mut cooked = String::new();
        loop {
            if self.cursor.is_eof() {
                return Err(LexError::UnterminatedString { offset: start });
            }
            match self.cursor.current() {
                b if b == quote => {
                    self.cursor.advance();
                    return Ok(TokenKind::String(cooked));
                }
                b'\\' => {
                    self.cursor.advance();
                    let Some(escaped) = self.cursor.current_char() else {
                        return Err(LexError::UnterminatedString { offset: start });
                    };
                    cooked.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => other,
                    });
                    self.cursor.advance_char();
                }
                _ => {
                    if let Some(ch) = self.cursor.current_char() {
                        cooked.push(ch);
                    }
                    self.cursor.advance_char();
                }
            }
        }
    }

    #[cold]
    fn unexpected(&self, offset: usize) -> LexError {
        LexError::UnexpectedChar {
            ch: self.cursor.current_char().unwrap_or('\0'),
            offset,
        }
    }
}
