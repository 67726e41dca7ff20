// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized interaction events and drag tracking.

use kurbo::{Point, Size, Vec2};

/// A windowing-toolkit-agnostic input event.
///
/// Hosts translate whatever their toolkit delivers into these and feed them
/// to [`PlotEngine::handle_event`](crate::PlotEngine::handle_event). All
/// positions are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas.
    PointerDown(Point),
    /// Pointer moved over the canvas.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Pointer left the canvas entirely.
    PointerLeave,
    /// Scroll wheel turned over the canvas.
    Wheel {
        /// Pointer position the zoom anchors to.
        position: Point,
        /// Vertical wheel motion; positive zooms out, negative zooms in.
        delta_y: f64,
    },
    /// The canvas was resized by the host.
    Resized(Size),
}

/// Tracks the pointer position across a pan drag.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking from `pos`.
    pub(crate) fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the movement since the last one.
    ///
    /// Returns `None` while no drag is active.
    pub(crate) fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Stops tracking.
    pub(crate) fn end(&mut self) {
        self.last_pos = None;
    }

    /// Whether a drag is active.
    pub(crate) fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}
