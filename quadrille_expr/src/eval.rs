// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree-walking evaluator.
//!
//! Evaluation is total: every expression that survives parsing evaluates to
//! some `f64` at every `x`. Out-of-domain inputs follow IEEE 754, so `1/0`
//! is infinite and `sqrt(-1)` or `ln(-1)` are NaN rather than errors. The
//! plot sampler treats non-finite values as gaps in the curve.

use crate::ast::{BinaryOp, Builtin, Expr, UnaryOp};

pub(crate) fn eval(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Number(value) => *value,
        Expr::Var => x,
        Expr::Unary { op, operand } => match op {
            UnaryOp::Neg => -eval(operand, x),
        },
        Expr::Binary { op, lhs, rhs } => {
            let l = eval(lhs, x);
            let r = eval(rhs, x);
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Rem => l % r,
                BinaryOp::Pow => l.powf(r),
            }
        }
        Expr::Call { func, args } => {
            let values: Vec<f64> = args.iter().map(|arg| eval(arg, x)).collect();
            call_builtin(*func, &values)
        }
    }
}

/// Apply a builtin to already-evaluated arguments.
///
/// Arity was checked at parse time, so the slice always has an accepted
/// length.
fn call_builtin(func: Builtin, args: &[f64]) -> f64 {
    match func {
        Builtin::Sin => args[0].sin(),
        Builtin::Cos => args[0].cos(),
        Builtin::Tan => args[0].tan(),
        Builtin::Asin => args[0].asin(),
        Builtin::Acos => args[0].acos(),
        Builtin::Atan => args[0].atan(),
        Builtin::Sinh => args[0].sinh(),
        Builtin::Cosh => args[0].cosh(),
        Builtin::Tanh => args[0].tanh(),
        Builtin::Exp => args[0].exp(),
        Builtin::Ln => args[0].ln(),
        Builtin::Log => {
            if args.len() == 2 {
                args[0].ln() / args[1].ln()
            } else {
                args[0].ln()
            }
        }
        Builtin::Log10 => args[0].log10(),
        Builtin::Log2 => args[0].log2(),
        Builtin::Sqrt => args[0].sqrt(),
        Builtin::Cbrt => args[0].cbrt(),
        Builtin::Abs => args[0].abs(),
        Builtin::Floor => args[0].floor(),
        Builtin::Ceil => args[0].ceil(),
        Builtin::Round => args[0].round(),
        Builtin::Sign => {
            let v = args[0];
            if v == 0.0 { 0.0 } else { v.signum() }
        }
        Builtin::Atan2 => args[0].atan2(args[1]),
        Builtin::Pow => args[0].powf(args[1]),
        Builtin::Min => args.iter().copied().fold(f64::INFINITY, f64::min),
        Builtin::Max => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}
