// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered collection of registered functions.

use std::fmt;

use peniko::Color;
use quadrille_expr::{EvalError, Expression};

use crate::palette;

/// Stable identity of a plotted function within one engine session.
///
/// Ids are monotonic and never reused, so hosts can keep them across
/// removals without aliasing a later registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(u64);

/// A function registered with the engine.
pub struct PlottedFunction {
    /// Identity handle, unique within the owning engine session.
    pub id: FunctionId,
    /// The formula as the user typed it.
    pub expression: String,
    /// The formula after normalization, as handed to the compiler.
    pub normalized: String,
    /// Palette color the curve is stroked with.
    pub color: Color,
    /// Hidden functions stay registered but are neither drawn nor auto-fitted.
    pub visible: bool,
    pub(crate) evaluator: Box<dyn Expression>,
}

impl PlottedFunction {
    /// Evaluates the compiled expression at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.evaluator.evaluate(x)
    }
}

impl fmt::Debug for PlottedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlottedFunction")
            .field("id", &self.id)
            .field("expression", &self.expression)
            .field("normalized", &self.normalized)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Registered functions in insertion order, which is also draw order.
///
/// The palette cursor advances once per successful registration and resets
/// only on [`Registry::clear`]; removals leave it alone so colors are not
/// silently reshuffled under existing entries.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: Vec<PlottedFunction>,
    next_id: u64,
    palette_cursor: usize,
}

impl Registry {
    pub(crate) fn entries(&self) -> &[PlottedFunction] {
        &self.entries
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry, assigning it a fresh id and the next palette
    /// color.
    pub(crate) fn register(
        &mut self,
        expression: String,
        normalized: String,
        evaluator: Box<dyn Expression>,
    ) -> &PlottedFunction {
        let id = FunctionId(self.next_id);
        self.next_id += 1;
        let color = palette::color_for(self.palette_cursor);
        self.palette_cursor += 1;
        self.entries.push(PlottedFunction {
            id,
            expression,
            normalized,
            color,
            visible: true,
            evaluator,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Removes the entry with `id`, reporting whether it was present.
    pub(crate) fn remove(&mut self, id: FunctionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.id != id);
        self.entries.len() != before
    }

    /// Flips the visibility of the entry with `id`, returning the updated
    /// entry, or `None` when the id is unknown.
    pub(crate) fn toggle(&mut self, id: FunctionId) -> Option<&PlottedFunction> {
        let entry = self.entries.iter_mut().find(|f| f.id == id)?;
        entry.visible = !entry.visible;
        Some(entry)
    }

    /// Drops every entry and restarts the palette cycle. Ids keep counting.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.palette_cursor = 0;
    }
}
