// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization of user-typed formula text.
//!
//! People write `y = 2x(x+1)`; compilers want `2*x*(x+1)`. Normalization
//! strips an optional `y =` or `f(x) =` prefix and makes implicit
//! multiplication explicit for three adjacencies: digit-letter, `)`-digit,
//! and digit-`(`. A letter directly before `(` is left alone since that is a
//! function call.

use std::sync::LazyLock;

use regex::Regex;

static EQUATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(y|f\(x\))\s*=\s*").expect("prefix pattern is valid"));
static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)([a-zA-Z])").expect("digit-letter pattern is valid"));
static PAREN_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\))(\d)").expect("paren-digit pattern is valid"));
static DIGIT_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(\()").expect("digit-paren pattern is valid"));

/// Prepares user-typed formula text for compilation.
///
/// ```
/// use quadrille_engine::normalize_expression;
///
/// assert_eq!(normalize_expression("y = 2x^2"), "2*x^2");
/// assert_eq!(normalize_expression("3sin(x)"), "3*sin(x)");
/// assert_eq!(normalize_expression("(x+1)2"), "(x+1)*2");
/// ```
#[must_use]
pub fn normalize_expression(input: &str) -> String {
    let text = EQUATION_PREFIX.replace(input, "");
    let text = DIGIT_LETTER.replace_all(&text, "${1}*${2}");
    let text = PAREN_DIGIT.replace_all(&text, "${1}*${2}");
    let text = DIGIT_PAREN.replace_all(&text, "${1}*${2}");
    text.into_owned()
}
