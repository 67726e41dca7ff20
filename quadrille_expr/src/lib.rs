// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrille_expr --heading-base-level=0

//! Quadrille Expr: formula compiler for function plotting.
//!
//! This crate turns formula text like `x^2 + 1`, `sin(2x)`, or `1/x` into
//! compiled functions of one variable. It decides what counts as a valid
//! formula; the rest of Quadrille treats compiled expressions as black boxes
//! behind the [`Expression`] trait.
//!
//! # Language
//!
//! - Arithmetic `+ - * / % ^` with standard precedence; `^` is
//!   right-associative and binds tighter than unary minus, so `-x^2` is
//!   `-(x^2)`.
//! - Implicit multiplication between adjacent values: `3x`, `2(x+1)`,
//!   `(x+1)(x-1)`.
//! - The variable `x` and the constants `pi`, `e`, `tau`.
//! - Builtins: trigonometry and inverses (`sin` through `atan2`, plus the
//!   hyperbolics), exponentials and logarithms (`exp`, `ln`, `log`, `log10`,
//!   `log2`), roots (`sqrt`, `cbrt`), and `abs`, `floor`, `ceil`, `round`,
//!   `sign`, `pow`, `min`, `max`.
//!
//! Every name is resolved during compilation, so a typo or a wrong argument
//! count is a [`ParseError`] up front rather than a surprise during a
//! redraw. Evaluation itself is total over `f64`: out-of-domain inputs
//! follow IEEE 754 and produce infinities or NaNs, which the plotting layer
//! renders as gaps in the curve.
//!
//! # Example
//!
//! ```
//! use quadrille_expr::{Compiler, Expression, ExpressionCompiler};
//!
//! let compiler = Compiler::new();
//! let parabola = compiler.compile("x^2 - 2x + 1")?;
//! assert_eq!(parabola.evaluate(3.0)?, 4.0);
//!
//! // Out-of-domain values are IEEE infinities and NaNs, not errors.
//! let reciprocal = compiler.compile("1/x")?;
//! assert!(reciprocal.evaluate(0.0)?.is_infinite());
//!
//! // Unknown names fail at compile time.
//! assert!(compiler.compile("foo(x)").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ast;
mod error;
mod eval;
mod lexer;
mod parser;
mod token;

pub use error::{EvalError, ParseError, ParseErrorKind, ParseResult};
pub use token::Span;

/// A compiled, reusable function of one variable.
pub trait Expression {
    /// Evaluates the function at `x`.
    ///
    /// Non-finite results (NaN, ±∞) are ordinary `Ok` values. `Err` is
    /// reserved for implementations that can only discover problems at call
    /// time, such as evaluators that bind names lazily.
    fn evaluate(&self, x: f64) -> Result<f64, EvalError>;
}

/// Compiles formula text into reusable [`Expression`]s.
pub trait ExpressionCompiler {
    /// Compiles `source` into an evaluatable expression.
    fn compile(&self, source: &str) -> Result<Box<dyn Expression>, ParseError>;
}

/// The bundled compiler: lexes, parses, and resolves names eagerly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler;

impl Compiler {
    /// Creates a compiler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExpressionCompiler for Compiler {
    fn compile(&self, source: &str) -> Result<Box<dyn Expression>, ParseError> {
        let expr = CompiledExpression::parse(source)?;
        Ok(Box::new(expr))
    }
}

/// An expression compiled by the bundled [`Compiler`].
#[derive(Clone, Debug)]
pub struct CompiledExpression {
    expr: ast::Expr,
}

impl CompiledExpression {
    /// Compiles `source` into a concrete expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = lexer::Lexer::new(source).tokenize()?;
        let expr = parser::Parser::new(tokens).parse_expression()?;
        Ok(Self { expr })
    }

    /// Evaluates at `x`.
    ///
    /// Infallible counterpart of [`Expression::evaluate`] for callers that
    /// hold the concrete type.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        eval::eval(&self.expr, x)
    }
}

impl Expression for CompiledExpression {
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        Ok(self.eval(x))
    }
}
