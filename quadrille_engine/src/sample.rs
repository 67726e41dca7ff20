// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pixel curve sampling with discontinuity detection.
//!
//! Sampling walks every pixel column of the canvas, evaluates the function
//! at the corresponding world x, and groups the outcomes into polyline
//! segments. A segment ends at an evaluation failure, a non-finite value, or
//! a vertical jump larger than half the canvas height; the next valid sample
//! starts a fresh segment, so poles like `1/x` at zero are gaps instead of
//! near-vertical artifact lines.

use kurbo::Point;
use quadrille_expr::Expression;
use quadrille_viewport::Viewport;

/// Outcome of sampling one pixel column.
#[derive(Debug, Clone, Copy)]
enum Sample {
    /// A finite value, mapped to screen space.
    Valid(Point),
    /// Evaluation failed or produced a non-finite value.
    Invalid,
}

fn sample_column(function: &dyn Expression, viewport: &Viewport, screen_x: f64) -> Sample {
    let world_x = viewport.screen_to_world_x(screen_x);
    match function.evaluate(world_x) {
        Ok(world_y) if world_y.is_finite() => {
            Sample::Valid(Point::new(screen_x, viewport.world_to_screen_y(world_y)))
        }
        Ok(_) | Err(_) => Sample::Invalid,
    }
}

/// Samples `function` across every pixel column of the viewport.
///
/// Returns stroke-ready polyline segments in screen coordinates, left to
/// right. Segments with fewer than two points are dropped; they would have
/// no visible stroke. Cost is one evaluation per pixel column.
#[must_use]
pub fn sample_curve(function: &dyn Expression, viewport: &Viewport) -> Vec<Vec<Point>> {
    let width = viewport.canvas_size().width;
    // Half the canvas height; a bigger jump between adjacent columns is
    // treated as an asymptote rather than a steep slope.
    let jump_limit = viewport.canvas_size().height / 2.0;

    let mut segments = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut previous_y: Option<f64> = None;

    let mut screen_x = 0.0;
    while screen_x <= width {
        match sample_column(function, viewport, screen_x) {
            Sample::Valid(point) => {
                if previous_y.is_some_and(|previous| (point.y - previous).abs() > jump_limit) {
                    flush(&mut segments, &mut current);
                }
                current.push(point);
                previous_y = Some(point.y);
            }
            Sample::Invalid => {
                flush(&mut segments, &mut current);
                previous_y = None;
            }
        }
        screen_x += 1.0;
    }
    flush(&mut segments, &mut current);
    segments
}

fn flush(segments: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        segments.push(core::mem::take(current));
    } else {
        current.clear();
    }
}
