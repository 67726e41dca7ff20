// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pratt parser for formula text.

use crate::ast::{BinaryOp, Builtin, Expr, UnaryOp, constant};
use crate::error::{ParseError, ParseResult};
use crate::token::{Span, Token, TokenKind};

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse a single expression spanning the whole input.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        if self.is_at_end() {
            return Err(ParseError::syntax("empty expression"));
        }
        let expr = self.parse_expr(0)?;
        if !self.is_at_end() {
            let tok = self.peek();
            return Err(
                ParseError::syntax(format!("unexpected token after expression: {:?}", tok.kind))
                    .with_span(tok.span),
            );
        }
        Ok(expr)
    }

    /// Pratt loop: parse an expression with the given minimum binding power.
    fn parse_expr(&mut self, min_bp: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let (op, left_bp, right_bp) = match self.peek_kind() {
                TokenKind::Plus => (BinaryOp::Add, 9, 10),
                TokenKind::Minus => (BinaryOp::Sub, 9, 10),
                TokenKind::Star => (BinaryOp::Mul, 11, 12),
                TokenKind::Slash => (BinaryOp::Div, 11, 12),
                TokenKind::Percent => (BinaryOp::Rem, 11, 12),
                TokenKind::Caret => (BinaryOp::Pow, 16, 15), // right-associative
                _ => break,
            };

            if left_bp < min_bp {
                break;
            }

            self.advance();
            let rhs = self.parse_expr(right_bp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let tok = self.advance();
        match tok.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => {
                if self.peek_kind() == &TokenKind::LParen {
                    self.parse_call(&name, tok.span)
                } else {
                    resolve_atom(&name, tok.span)
                }
            }
            TokenKind::LParen => {
                let expr = self.parse_expr(0)?;
                self.expect_rparen()?;
                Ok(expr)
            }
            TokenKind::Minus => {
                // Unary minus binds tighter than +/- but looser than ^,
                // so -x^2 parses as -(x^2).
                let operand = self.parse_expr(13)?;
                Ok(Expr::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                })
            }
            TokenKind::Plus => self.parse_expr(13),
            other => Err(
                ParseError::syntax(format!("expected expression, found {other:?}"))
                    .with_span(tok.span),
            ),
        }
    }

    fn parse_call(&mut self, name: &str, name_span: Span) -> ParseResult<Expr> {
        let Some(func) = Builtin::from_name(name) else {
            return Err(
                ParseError::name(format!("unknown function: '{name}'")).with_span(name_span)
            );
        };

        self.advance(); // consume '('
        let mut args = Vec::new();
        if self.peek_kind() != &TokenKind::RParen {
            args.push(self.parse_expr(0)?);
            while self.peek_kind() == &TokenKind::Comma {
                self.advance();
                args.push(self.parse_expr(0)?);
            }
        }
        let close = self.expect_rparen()?;

        let arity = func.arity();
        if !arity.accepts(args.len()) {
            return Err(ParseError::arity(format!(
                "'{name}' expects {}, got {}",
                arity.describe(),
                args.len()
            ))
            .with_span(name_span.merge(close.span)));
        }

        Ok(Expr::Call { func, args })
    }

    fn expect_rparen(&mut self) -> ParseResult<Token> {
        let tok = self.peek().clone();
        if tok.kind == TokenKind::RParen {
            Ok(self.advance())
        } else {
            Err(
                ParseError::syntax(format!("expected ')', found {:?}", tok.kind))
                    .with_span(tok.span),
            )
        }
    }

    // --- Token helpers ---

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }
}

/// Resolve a bare identifier: the variable, or a named constant.
fn resolve_atom(name: &str, span: Span) -> ParseResult<Expr> {
    if name == "x" {
        return Ok(Expr::Var);
    }
    if let Some(value) = constant(name) {
        return Ok(Expr::Number(value));
    }
    Err(ParseError::name(format!("unknown variable: '{name}'")).with_span(span))
}
