// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrille_engine --heading-base-level=0

//! Quadrille Engine: the interactive function plotter core.
//!
//! This crate ties the Quadrille pieces together into one headless engine. A
//! [`PlotEngine`] owns a [`Viewport`](quadrille_viewport::Viewport) and a
//! registry of plotted functions, consumes pointer and wheel events, and
//! renders grid, axes, labels, and curves into any
//! [`PlotSurface`](quadrille_surface::PlotSurface). Hosts decide how events
//! arrive and where pixels go; the engine decides everything in between:
//!
//! - Formula intake: user text is normalized (equation prefixes stripped,
//!   implicit multiplication made explicit), compiled with
//!   [`quadrille_expr`], and probe-evaluated before it is accepted.
//! - A fixed eight-color palette assigned round-robin as functions are added.
//! - Per-pixel-column curve sampling that breaks the polyline at poles,
//!   domain gaps, and evaluation failures instead of drawing false
//!   connecting strokes.
//! - Grab-and-drag panning and cursor-anchored wheel zoom with scale limits.
//! - A y-only auto-fit that surveys the functions over a fixed x window.
//!
//! The engine never paints on its own. Mutations set an internal redraw
//! flag; hosts drain it with [`PlotEngine::take_redraw_request`] and call
//! [`PlotEngine::render`] when it reports `true`. Adding the first function
//! additionally schedules a deferred auto-fit, drained the same way via
//! [`PlotEngine::take_pending_auto_fit`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use quadrille_engine::{InputEvent, PlotEngine};
//! use quadrille_surface::RecordingSurface;
//!
//! let mut engine = PlotEngine::new(Size::new(800.0, 600.0));
//! engine.add_function("y = x^2")?;
//!
//! // One wheel step in, anchored at the canvas center.
//! engine.handle_event(InputEvent::Wheel {
//!     position: Point::new(400.0, 300.0),
//!     delta_y: -120.0,
//! });
//!
//! if engine.take_redraw_request() {
//!     let mut surface = RecordingSurface::new();
//!     engine.render(&mut surface);
//!     assert!(surface.polylines().count() > 0);
//! }
//! # Ok::<(), quadrille_expr::ParseError>(())
//! ```
//!
//! # Design notes
//!
//! - Rendering is a full repaint each time: clear, grid, axes, labels, then
//!   the visible curves in registration order. There is no damage tracking.
//! - Rejected interactions (a wheel step past the zoom limits, toggling an
//!   unknown id) request no redraw, so hosts that repaint on the flag do no
//!   wasted work.
//! - The compiler is pluggable through
//!   [`ExpressionCompiler`](quadrille_expr::ExpressionCompiler); the bundled
//!   one is used by [`PlotEngine::new`].

mod autofit;
mod engine;
mod input;
mod normalize;
mod palette;
mod registry;
mod render;
mod sample;

pub use engine::PlotEngine;
pub use input::InputEvent;
pub use normalize::normalize_expression;
pub use palette::PALETTE;
pub use registry::{FunctionId, PlottedFunction};
pub use render::format_axis_label;
pub use sample::sample_curve;
