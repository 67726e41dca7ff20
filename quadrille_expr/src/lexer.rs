// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lexer for formula text.
//!
//! Besides the usual tokenization, the lexer inserts implicit multiplication
//! between adjacent value-like tokens, so `3x`, `2(x+1)`, and `(x+1)(x-1)`
//! all lex the way a reader of mathematical notation expects. An identifier
//! directly followed by `(` is left alone; that shape is a function call.

use crate::error::{ParseError, ParseResult};
use crate::token::{Span, Token, TokenKind};

pub(crate) struct Lexer {
    source: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        while !self.is_at_end() {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            let token = self.next_token()?;
            if let Some(prev) = self.tokens.last() {
                if prev.kind.can_end_implicit_mul() && token.kind.can_start_implicit_mul() {
                    // An identifier directly before '(' is a function call,
                    // not multiplication.
                    let is_call = matches!(&prev.kind, TokenKind::Ident(_))
                        && matches!(&token.kind, TokenKind::LParen);
                    if !is_call {
                        let span = Span::new(prev.span.end, token.span.start);
                        self.tokens.push(Token::new(TokenKind::Star, span));
                    }
                }
            }
            self.tokens.push(token);
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        let start = self.pos;
        let ch = self.advance();

        match ch {
            '+' => Ok(Token::new(TokenKind::Plus, Span::new(start, self.pos))),
            '-' => Ok(Token::new(TokenKind::Minus, Span::new(start, self.pos))),
            '*' => Ok(Token::new(TokenKind::Star, Span::new(start, self.pos))),
            '/' => Ok(Token::new(TokenKind::Slash, Span::new(start, self.pos))),
            '%' => Ok(Token::new(TokenKind::Percent, Span::new(start, self.pos))),
            '^' => Ok(Token::new(TokenKind::Caret, Span::new(start, self.pos))),
            '(' => Ok(Token::new(TokenKind::LParen, Span::new(start, self.pos))),
            ')' => Ok(Token::new(TokenKind::RParen, Span::new(start, self.pos))),
            ',' => Ok(Token::new(TokenKind::Comma, Span::new(start, self.pos))),
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number(start)
                } else {
                    Err(ParseError::lex("unexpected '.'").with_span(Span::new(start, self.pos)))
                }
            }
            c if c.is_ascii_digit() => self.read_number(start),
            c if is_ident_start(c) => self.read_identifier(start),
            _ => Err(ParseError::lex(format!("unexpected character: '{ch}'"))
                .with_span(Span::new(start, self.pos))),
        }
    }

    fn read_number(&mut self, start: usize) -> ParseResult<Token> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Scientific notation, e.g. 1e-3. Only taken when real digits follow,
        // so `2e` stays Number(2) Ident(e) and lexes as 2*e.
        if self.peek() == Some('e') || self.peek() == Some('E') {
            let sign_len = usize::from(matches!(self.peek_at(1), Some('+') | Some('-')));
            if self
                .peek_at(1 + sign_len)
                .is_some_and(|c| c.is_ascii_digit())
            {
                self.advance();
                for _ in 0..sign_len {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        let text: String = self.source[start..self.pos].iter().collect();
        let value: f64 = text
            .parse()
            .map_err(|_| ParseError::lex(format!("invalid number: {text}")))?;
        Ok(Token::new(
            TokenKind::Number(value),
            Span::new(start, self.pos),
        ))
    }

    fn read_identifier(&mut self, start: usize) -> ParseResult<Token> {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        let text: String = self.source[start..self.pos].iter().collect();
        Ok(Token::new(
            TokenKind::Ident(text),
            Span::new(start, self.pos),
        ))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
