// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expression tree with names already resolved.
//!
//! The parser resolves every identifier while building the tree: `x` becomes
//! [`Expr::Var`], known constants are folded into [`Expr::Number`], and call
//! targets become [`Builtin`]s with their arity checked. Whatever survives to
//! evaluation is total over `f64`.

/// A compiled expression node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    /// Numeric literal or folded constant.
    Number(f64),
    /// The free variable `x`.
    Var,
    /// Unary operator application.
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Binary operator application.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Built-in function call with parse-checked arity.
    Call {
        func: Builtin,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// Argument-count contract of a [`Builtin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub(crate) fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(k) => n == k,
            Self::Range(lo, hi) => (lo..=hi).contains(&n),
            Self::AtLeast(lo) => n >= lo,
        }
    }

    pub(crate) fn describe(self) -> String {
        match self {
            Self::Exact(1) => "1 argument".to_string(),
            Self::Exact(k) => format!("{k} arguments"),
            Self::Range(lo, hi) => format!("{lo} to {hi} arguments"),
            Self::AtLeast(lo) => format!("at least {lo} arguments"),
        }
    }
}

/// Built-in functions available in formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
    Atan2,
    Pow,
    Min,
    Max,
}

impl Builtin {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "sign" => Self::Sign,
            "atan2" => Self::Atan2,
            "pow" => Self::Pow,
            "min" => Self::Min,
            "max" => Self::Max,
            _ => return None,
        };
        Some(builtin)
    }

    pub(crate) fn arity(self) -> Arity {
        match self {
            // log(x) is the natural log; log(x, b) uses base b.
            Self::Log => Arity::Range(1, 2),
            Self::Atan2 | Self::Pow => Arity::Exact(2),
            Self::Min | Self::Max => Arity::AtLeast(2),
            _ => Arity::Exact(1),
        }
    }
}

/// Value of a named constant, if `name` is one.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}
