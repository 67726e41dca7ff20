// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for compilation and evaluation.

use std::fmt;

use crate::token::Span;

/// Error produced while compiling an expression.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Which stage or rule rejected the input.
    pub kind: ParseErrorKind,
    /// Human-readable description of the problem.
    pub message: String,
    /// Byte range of the offending input, when known.
    pub span: Option<Span>,
}

/// Classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input contained characters or literals the lexer rejects.
    LexError,
    /// The token stream does not form a valid expression.
    SyntaxError,
    /// An identifier does not name the variable, a constant, or a function.
    NameError,
    /// A function was called with the wrong number of arguments.
    ArityError,
    /// The expression compiled but failed a trial evaluation.
    ///
    /// Produced by callers that probe-evaluate freshly compiled expressions,
    /// not by the bundled compiler itself.
    EvalError,
}

impl ParseError {
    /// Creates an error with an explicit kind.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    /// Attaches the source span the error refers to.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Creates a [`ParseErrorKind::LexError`].
    pub fn lex(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::LexError, message)
    }

    /// Creates a [`ParseErrorKind::SyntaxError`].
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::SyntaxError, message)
    }

    /// Creates a [`ParseErrorKind::NameError`].
    pub fn name(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::NameError, message)
    }

    /// Creates a [`ParseErrorKind::ArityError`].
    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::ArityError, message)
    }

    /// Creates a [`ParseErrorKind::EvalError`].
    pub fn eval(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::EvalError, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Error produced while evaluating a compiled expression.
///
/// The bundled [`Compiler`](crate::Compiler) resolves every name at compile
/// time and follows IEEE 754 semantics at run time, so its expressions never
/// fail to evaluate. The type exists for [`Expression`](crate::Expression)
/// implementations that can only discover problems at call time.
#[derive(Debug, Clone)]
pub struct EvalError {
    /// Human-readable description of the problem.
    pub message: String,
}

impl EvalError {
    /// Creates an evaluation error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

/// Result alias for compilation.
pub type ParseResult<T> = Result<T, ParseError>;
