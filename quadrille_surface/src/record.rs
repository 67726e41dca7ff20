// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording surface for op and state tracing.

use alloc::vec::Vec;
use kurbo::Point;
use peniko::Color;

use crate::{DrawOp, FontDesc, PlotSurface, StateOp, SurfaceOp, TextAlign, TextBaseline};

/// Snapshot of the drawing state inside a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current stroke color.
    pub stroke_color: Color,
    /// Current stroke width in pixels.
    pub stroke_width: f64,
    /// Current fill color used for text runs.
    pub fill_color: Color,
    /// Current font.
    pub font: FontDesc,
    /// Current horizontal text anchoring.
    pub text_align: TextAlign,
    /// Current vertical text anchoring.
    pub text_baseline: TextBaseline,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            fill_color: Color::BLACK,
            font: FontDesc::default(),
            text_align: TextAlign::Left,
            text_baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Event recorded by the recording surface.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Surface that records operations instead of producing output.
///
/// This is intentionally *not* a renderer:
/// - It does **not** rasterize anything.
/// - It tracks the sticky drawing state and logs an [`Event`] per operation,
///   so tests can assert on what was drawn and with which state at the time.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    events: Vec<Event>,
    ops: Vec<SurfaceOp>,
    state: StateSnapshot,
}

impl RecordingSurface {
    /// Creates an empty recording surface with default drawing state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in application order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the raw operations in application order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears recorded events and operations, keeping the drawing state.
    pub fn clear_log(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Iterates over recorded line segments with the state they were drawn in.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &StateSnapshot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw {
                op: DrawOp::Line { p0, p1 },
                state,
            } => Some((*p0, *p1, state)),
            _ => None,
        })
    }

    /// Iterates over recorded polylines with the state they were drawn in.
    pub fn polylines(&self) -> impl Iterator<Item = (&[Point], &StateSnapshot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw {
                op: DrawOp::Polyline { points },
                state,
            } => Some((&points[..], state)),
            _ => None,
        })
    }

    /// Iterates over recorded text runs with the state they were drawn in.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &StateSnapshot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw {
                op: DrawOp::Text { text, pos },
                state,
            } => Some((&text[..], *pos, state)),
            _ => None,
        })
    }
}

impl PlotSurface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetStrokeColor(color) => self.state.stroke_color = *color,
            StateOp::SetStrokeWidth(width) => self.state.stroke_width = *width,
            StateOp::SetFillColor(color) => self.state.fill_color = *color,
            StateOp::SetFont(font) => self.state.font = font.clone(),
            StateOp::SetTextAlign(align) => self.state.text_align = *align,
            StateOp::SetTextBaseline(baseline) => self.state.text_baseline = *baseline,
        }

        self.ops.push(SurfaceOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(SurfaceOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}
