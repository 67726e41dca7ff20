// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The redraw pipeline: grid, axes, labels, then curves.

use kurbo::Point;
use peniko::Color;
use quadrille_surface::{PlotSurface, PlotSurfaceExt, TextAlign, TextBaseline};
use quadrille_viewport::Viewport;

use crate::registry::PlottedFunction;
use crate::sample;

/// Light gray grid lines.
const GRID_COLOR: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);
/// Near-black axes and labels.
const INK_COLOR: Color = Color::from_rgb8(0x33, 0x33, 0x33);

const GRID_WIDTH: f64 = 1.0;
const AXIS_WIDTH: f64 = 2.0;
const CURVE_WIDTH: f64 = 2.5;
const LABEL_FONT_SIZE: f32 = 12.0;

/// Renders one full frame into `surface`.
pub(crate) fn render_plot(
    viewport: &Viewport,
    functions: &[PlottedFunction],
    surface: &mut dyn PlotSurface,
) {
    surface.clear();
    draw_grid(viewport, surface);
    draw_axes(viewport, surface);
    draw_axis_labels(viewport, surface);
    for function in functions.iter().filter(|f| f.visible) {
        draw_curve(viewport, function, surface);
    }
}

/// Multiples of `spacing` covering `[start, end]`, widened outward to the
/// enclosing grid lines.
fn spacing_steps(start: f64, end: f64, spacing: f64) -> impl Iterator<Item = f64> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "grid indices stay tiny over the legal zoom range"
    )]
    let (first, last) = (
        (start / spacing).floor() as i64,
        (end / spacing).ceil() as i64,
    );
    (first..=last).map(move |step| step as f64 * spacing)
}

fn draw_grid(viewport: &Viewport, surface: &mut dyn PlotSurface) {
    let size = viewport.canvas_size();
    let spacing = viewport.grid_spacing();
    surface.set_stroke(GRID_COLOR, GRID_WIDTH);

    let left = viewport.screen_to_world_x(0.0);
    let right = viewport.screen_to_world_x(size.width);
    for world_x in spacing_steps(left, right, spacing) {
        let screen_x = viewport.world_to_screen_x(world_x);
        surface.line(Point::new(screen_x, 0.0), Point::new(screen_x, size.height));
    }

    let bottom = viewport.screen_to_world_y(size.height);
    let top = viewport.screen_to_world_y(0.0);
    for world_y in spacing_steps(bottom, top, spacing) {
        let screen_y = viewport.world_to_screen_y(world_y);
        surface.line(Point::new(0.0, screen_y), Point::new(size.width, screen_y));
    }
}

fn draw_axes(viewport: &Viewport, surface: &mut dyn PlotSurface) {
    let size = viewport.canvas_size();
    let origin = viewport.world_to_screen(Point::ZERO);
    surface.set_stroke(INK_COLOR, AXIS_WIDTH);

    if (0.0..=size.width).contains(&origin.x) {
        surface.line(Point::new(origin.x, 0.0), Point::new(origin.x, size.height));
    }
    if (0.0..=size.height).contains(&origin.y) {
        surface.line(Point::new(0.0, origin.y), Point::new(size.width, origin.y));
    }
}

fn draw_axis_labels(viewport: &Viewport, surface: &mut dyn PlotSurface) {
    let size = viewport.canvas_size();
    let spacing = viewport.grid_spacing();
    let origin = viewport.world_to_screen(Point::ZERO);

    surface.set_fill(INK_COLOR);
    surface.set_font(LABEL_FONT_SIZE, "Arial");

    // X labels sit just below the x axis, pulled back inside the canvas when
    // the axis scrolls out of view.
    surface.set_text_anchor(TextAlign::Center, TextBaseline::Top);
    let label_y = (origin.y + 5.0).max(15.0).min(size.height - 5.0);
    let left = viewport.screen_to_world_x(0.0);
    let right = viewport.screen_to_world_x(size.width);
    for world_x in spacing_steps(left, right, spacing) {
        // The origin gets its own shared label below.
        if world_x.abs() < spacing / 2.0 {
            continue;
        }
        let screen_x = viewport.world_to_screen_x(world_x);
        if (0.0..=size.width).contains(&screen_x) {
            surface.text(format_axis_label(world_x), Point::new(screen_x, label_y));
        }
    }

    // Y labels hang just left of the y axis.
    surface.set_text_anchor(TextAlign::Right, TextBaseline::Middle);
    let label_x = (origin.x - 5.0).max(40.0).min(size.width - 5.0);
    let bottom = viewport.screen_to_world_y(size.height);
    let top = viewport.screen_to_world_y(0.0);
    for world_y in spacing_steps(bottom, top, spacing) {
        if world_y.abs() < spacing / 2.0 {
            continue;
        }
        let screen_y = viewport.world_to_screen_y(world_y);
        if (0.0..=size.height).contains(&screen_y) {
            surface.text(format_axis_label(world_y), Point::new(label_x, screen_y));
        }
    }

    if (0.0..=size.width).contains(&origin.x) && (0.0..=size.height).contains(&origin.y) {
        surface.set_text_anchor(TextAlign::Right, TextBaseline::Top);
        surface.text("0", Point::new(origin.x - 5.0, origin.y + 5.0));
    }
}

fn draw_curve(viewport: &Viewport, function: &PlottedFunction, surface: &mut dyn PlotSurface) {
    surface.set_stroke(function.color, CURVE_WIDTH);
    for segment in sample::sample_curve(function.evaluator.as_ref(), viewport) {
        surface.polyline(segment);
    }
}

/// Formats a world coordinate for an axis label.
///
/// Values round to two decimals with trailing zeros trimmed; magnitudes
/// below `0.01` or at least `1000` switch to exponential notation with one
/// fractional digit (`5.0e-3`, `1.2e3`).
#[must_use]
pub fn format_axis_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if magnitude < 0.01 || magnitude >= 1000.0 {
        return format_exponential(value);
    }
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn format_exponential(value: f64) -> String {
    let exponent = value.abs().log10().floor();
    let mut mantissa = value / 10_f64.powf(exponent);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "axis label magnitudes keep the exponent tiny"
    )]
    let mut exponent = exponent as i32;
    // Round the mantissa to one fractional digit, carrying into the exponent
    // when it rounds up to 10.
    mantissa = (mantissa * 10.0).round() / 10.0;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    format!("{mantissa:.1}e{exponent}")
}
