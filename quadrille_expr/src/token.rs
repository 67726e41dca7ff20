// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokens and source spans.

/// Source location span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Creates a span from start and end offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    LParen,
    RParen,
    Comma,

    Eof,
}

impl TokenKind {
    /// Whether this token can appear as the last token before implicit multiplication.
    pub(crate) fn can_end_implicit_mul(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Ident(_) | Self::RParen)
    }

    /// Whether this token can appear as the first token after implicit multiplication.
    pub(crate) fn can_start_implicit_mul(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Ident(_) | Self::LParen)
    }
}
