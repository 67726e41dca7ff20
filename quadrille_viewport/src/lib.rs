// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrille_viewport --heading-base-level=0

//! Quadrille Viewport: the view-state model for a pannable/zoomable plot.
//!
//! This crate provides a small, headless camera over the mathematical plane.
//! The view is described by a center point in world coordinates and a single
//! `scale` in screen pixels per world unit. It focuses on:
//! - Exact world ↔ screen coordinate conversion (screen y grows downward).
//! - Grab-and-drag panning and cursor-anchored zooming with scale limits.
//! - Choosing a "nice" decimal grid spacing for the current zoom.
//!
//! It does **not** sample functions or draw anything. Callers are expected
//! to:
//! - Hold a [`Viewport`] alongside their own plotted content.
//! - Feed pointer deltas into [`Viewport::pan_by_screen`] and wheel events
//!   into [`Viewport::zoom_about_screen_point`] at a higher layer.
//! - Use [`Viewport::grid_spacing`] and the conversion helpers when painting
//!   grids, axes, and curves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use quadrille_viewport::Viewport;
//!
//! // An 800x600 canvas with the default view (origin centered, 50 px/unit).
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//!
//! // The world origin lands at the canvas center.
//! let origin = view.world_to_screen(Point::ZERO);
//! assert_eq!(origin, Point::new(400.0, 300.0));
//!
//! // Zoom in one step anchored at the canvas center.
//! let accepted = view.zoom_about_screen_point(Point::new(400.0, 300.0), 1.1);
//! assert!(accepted);
//! ```
//!
//! ## Design notes
//!
//! - The zoom model is uniform: one scale for both axes, no rotation.
//! - Out-of-range zoom requests are rejected as no-ops rather than clamped,
//!   so a wheel step at the limit leaves the view untouched.
//! - Interaction state (which pointer is down, drag anchors) lives in higher
//!   layers; this crate only mutates view state.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{Viewport, ViewportDebugInfo};
