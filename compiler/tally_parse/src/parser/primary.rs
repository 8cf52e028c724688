//! Unary, power, postfix and primary expressions.

use tally_ir::{format_number, BinaryOp, Expr, TokenKind, UnaryOp};
use tally_stack::ensure_sufficient_stack;

use super::Parser;
use crate::ParseError;

impl Parser<'_> {
    /// Prefix `- + !`, binding looser than `**` so `-2 ** 2` is `-(2 ** 2)`.
    pub(crate) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.parse_power(),
        };
        self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Expr::unary(op, operand))
    }

    /// `base ** exponent` / `base ^ exponent`, right associative.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_postfix()?;
        if matches!(self.current_kind(), TokenKind::StarStar | TokenKind::Caret) {
            self.advance();
            let exponent = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    /// Calls, member access and indexing, applied left to right.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_list(&TokenKind::RParen, "`)` after arguments")?;
                    expr = Expr::Call {
                        callee: Box::new(expr),
                        args,
                    };
                }
                TokenKind::Dot => {
                    self.advance();
                    let TokenKind::Ident(property) = self.current_kind() else {
                        return Err(self.unexpected("property name after `.`"));
                    };
                    let property = property.clone();
                    self.advance();
                    expr = Expr::Member {
                        object: Box::new(expr),
                        property,
                    };
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(&TokenKind::RBracket, "`]` after index")?;
                    expr = Expr::Index {
                        object: Box::new(expr),
                        index: Box::new(index),
                    };
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.current_kind() {
            TokenKind::Number(n) => Expr::Number(*n),
            TokenKind::String(s) => Expr::String(s.clone()),
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),
            TokenKind::Null => Expr::Null,
            TokenKind::Undefined => Expr::Undefined,
            TokenKind::Ident(name) => Expr::Ident(name.clone()),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "`)`")?;
                return Ok(inner);
            }
            TokenKind::LBracket => {
                self.advance();
                let items = self.parse_list(&TokenKind::RBracket, "`]` after array items")?;
                return Ok(Expr::Array(items));
            }
            TokenKind::LBrace => {
                self.advance();
                return self.parse_object_literal();
            }
            _ => return Err(self.unexpected("an expression")),
        };
        self.advance();
        Ok(expr)
    }

    /// Comma-separated expressions up to `close`; a trailing comma is allowed.
    fn parse_list(&mut self, close: &TokenKind, expected: &'static str) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) {
            items.push(self.parse_expr()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(close, expected)?;
        Ok(items)
    }

    /// `{ key: value, "quoted": value, 3: value }` after the opening brace.
    fn parse_object_literal(&mut self) -> Result<Expr, ParseError> {
        let mut entries = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            let key = match self.current_kind() {
                TokenKind::Ident(name) | TokenKind::String(name) => name.clone(),
                TokenKind::Number(n) => format_number(*n),
                _ => return Err(self.unexpected("object key")),
            };
            self.advance();
            self.expect(&TokenKind::Colon, "`:` after object key")?;
            let value = self.parse_expr()?;
            entries.push((key, value));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RBrace, "`}` after object entries")?;
        Ok(Expr::Object(entries))
    }
}
