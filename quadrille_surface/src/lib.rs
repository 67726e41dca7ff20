// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrille_surface --heading-base-level=0

//! Quadrille Surface: surface-agnostic drawing IR for plots.
//!
//! This crate defines the small drawing vocabulary the Quadrille plot
//! renderer speaks, plus traits for surfaces that consume it. It sits between
//! the plot engine and concrete output targets (an interactive canvas, a
//! raster image, an SVG document).
//!
//! # Position in the stack
//!
//! - **Engine**: viewport math, the function registry, curve sampling, and
//!   the redraw pipeline live in `quadrille_engine`.
//! - **Drawing IR (this crate)**: stroke/fill/text state and draw operations,
//!   expressed as [`StateOp`] and [`DrawOp`] and combined into [`SurfaceOp`]
//!   for recording.
//! - **Surfaces**: implementations of [`PlotSurface`]. This crate ships
//!   [`RecordingSurface`] for tests and debugging and [`SvgSurface`] for
//!   document export; embedders provide their own surface for interactive
//!   targets.
//!
//! The operation set is deliberately tiny. A grid-and-curves plot needs
//! clears, solid-color line work, and axis labels, and nothing else; the IR
//! will grow if the renderer does.
//!
//! # Example
//!
//! ```
//! use kurbo::Point;
//! use peniko::Color;
//! use quadrille_surface::{DrawOp, PlotSurface, PlotSurfaceExt, RecordingSurface, SurfaceOp};
//!
//! let mut surface = RecordingSurface::new();
//! surface.clear();
//! surface.set_stroke(Color::from_rgb8(0xe7, 0x4c, 0x3c), 2.5);
//! surface.polyline(vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)]);
//!
//! assert_eq!(surface.ops().len(), 4);
//! assert!(matches!(surface.ops()[0], SurfaceOp::Draw(DrawOp::Clear)));
//! ```

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use kurbo::Point;
use peniko::Color;

mod record;
mod svg;

pub use record::{Event, RecordingSurface, StateSnapshot};
pub use svg::SvgSurface;

/// Horizontal text anchoring relative to the text position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// The text starts at the anchor position.
    Left,
    /// The text is centered on the anchor position.
    Center,
    /// The text ends at the anchor position.
    Right,
}

/// Vertical text anchoring relative to the text position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The top of the em box sits on the anchor position.
    Top,
    /// The text is vertically centered on the anchor position.
    Middle,
    /// The alphabetic baseline sits on the anchor position.
    Alphabetic,
}

/// Font selection for text runs.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDesc {
    /// Font size in pixels.
    pub size: f32,
    /// Font family name, as the target surface understands it.
    pub family: Arc<str>,
}

impl FontDesc {
    /// Creates a font description from a size in pixels and a family name.
    pub fn new(size: f32, family: impl Into<Arc<str>>) -> Self {
        Self {
            size,
            family: family.into(),
        }
    }
}

impl Default for FontDesc {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

/// State operations that mutate the current drawing state.
///
/// State is sticky: it applies to every subsequent [`DrawOp`] until changed.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the color used for line work.
    SetStrokeColor(Color),
    /// Set the line width in pixels.
    SetStrokeWidth(f64),
    /// Set the color used for text runs.
    SetFillColor(Color),
    /// Set the font used for text runs.
    SetFont(FontDesc),
    /// Set the horizontal text anchoring.
    SetTextAlign(TextAlign),
    /// Set the vertical text anchoring.
    SetTextBaseline(TextBaseline),
}

/// Draw operations that produce output given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface back to its background.
    Clear,
    /// Stroke a single line segment with the current stroke state.
    Line {
        /// Start point in surface pixels.
        p0: Point,
        /// End point in surface pixels.
        p1: Point,
    },
    /// Stroke an open polyline through the given points.
    ///
    /// The shape is neither closed nor filled. A polyline with fewer than two
    /// points produces no output.
    Polyline {
        /// Vertices in surface pixels, in draw order.
        points: Arc<[Point]>,
    },
    /// Fill a text run with the current fill, font, and anchoring state.
    Text {
        /// The text to draw.
        text: Arc<str>,
        /// Anchor position in surface pixels.
        pos: Point,
    },
}

/// Unified surface operation used for recording.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Minimal plot surface trait.
///
/// Implementations consume [`StateOp`]s and [`DrawOp`]s in order. The trait
/// is deliberately dyn-compatible so the engine can hold `&mut dyn
/// PlotSurface`; generic conveniences live on [`PlotSurfaceExt`].
pub trait PlotSurface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Set the stroke color and width in one call.
    #[inline]
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.state(StateOp::SetStrokeColor(color));
        self.state(StateOp::SetStrokeWidth(width));
    }

    /// Set the color used for text runs.
    #[inline]
    fn set_fill(&mut self, color: Color) {
        self.state(StateOp::SetFillColor(color));
    }

    /// Set the horizontal and vertical text anchoring in one call.
    #[inline]
    fn set_text_anchor(&mut self, align: TextAlign, baseline: TextBaseline) {
        self.state(StateOp::SetTextAlign(align));
        self.state(StateOp::SetTextBaseline(baseline));
    }

    /// Clear the whole surface back to its background.
    #[inline]
    fn clear(&mut self) {
        self.draw(DrawOp::Clear);
    }

    /// Stroke a single line segment with the current stroke state.
    #[inline]
    fn line(&mut self, p0: Point, p1: Point) {
        self.draw(DrawOp::Line { p0, p1 });
    }
}

/// Convenience helpers for [`PlotSurface`] implementations and callers.
///
/// This is separate from [`PlotSurface`] so that methods can take generic
/// arguments without complicating trait object usage (`&mut dyn PlotSurface`).
pub trait PlotSurfaceExt: PlotSurface {
    /// Set the font used for subsequent text runs.
    #[inline]
    fn set_font(&mut self, size: f32, family: impl Into<Arc<str>>) {
        self.state(StateOp::SetFont(FontDesc::new(size, family)));
    }

    /// Stroke an open polyline through `points`.
    #[inline]
    fn polyline(&mut self, points: impl Into<Arc<[Point]>>) {
        self.draw(DrawOp::Polyline {
            points: points.into(),
        });
    }

    /// Fill a text run anchored at `pos`.
    #[inline]
    fn text(&mut self, text: impl Into<Arc<str>>, pos: Point) {
        self.draw(DrawOp::Text {
            text: text.into(),
            pos,
        });
    }
}

impl<S: PlotSurface + ?Sized> PlotSurfaceExt for S {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use kurbo::Point;
    use peniko::Color;

    use super::{
        DrawOp, PlotSurface, PlotSurfaceExt, RecordingSurface, StateOp, SurfaceOp, TextAlign,
        TextBaseline,
    };

    #[test]
    fn helpers_expand_to_expected_ops() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke(Color::from_rgb8(0x33, 0x33, 0x33), 2.0);
        surface.set_text_anchor(TextAlign::Right, TextBaseline::Middle);
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0));

        let ops = surface.ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(
            ops[0],
            SurfaceOp::State(StateOp::SetStrokeColor(_))
        ));
        assert!(matches!(
            ops[1],
            SurfaceOp::State(StateOp::SetStrokeWidth(w)) if w == 2.0
        ));
        assert!(matches!(
            ops[2],
            SurfaceOp::State(StateOp::SetTextAlign(TextAlign::Right))
        ));
        assert!(matches!(
            ops[3],
            SurfaceOp::State(StateOp::SetTextBaseline(TextBaseline::Middle))
        ));
        assert!(matches!(ops[4], SurfaceOp::Draw(DrawOp::Line { .. })));
    }

    #[test]
    fn ext_helpers_work_through_dyn_surfaces() {
        let mut surface = RecordingSurface::new();
        let dyn_surface: &mut dyn PlotSurface = &mut surface;
        dyn_surface.set_font(12.0, "Arial");
        dyn_surface.polyline(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        dyn_surface.text("1.5", Point::new(40.0, 305.0));

        assert_eq!(surface.ops().len(), 3);
        match &surface.ops()[1] {
            SurfaceOp::Draw(DrawOp::Polyline { points }) => assert_eq!(points.len(), 2),
            other => panic!("expected polyline, got {other:?}"),
        }
        match &surface.ops()[2] {
            SurfaceOp::Draw(DrawOp::Text { text, pos }) => {
                assert_eq!(&text[..], "1.5");
                assert_eq!(*pos, Point::new(40.0, 305.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
