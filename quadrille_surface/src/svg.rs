// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export surface.

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;
use kurbo::Size;
use peniko::Color;

use crate::{DrawOp, FontDesc, PlotSurface, StateOp, TextAlign, TextBaseline};

#[derive(Clone, Debug)]
struct SvgState {
    stroke_color: Color,
    stroke_width: f64,
    fill_color: Color,
    font: FontDesc,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl Default for SvgState {
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

/// Surface that renders draw operations into an SVG document.
///
/// This is intended for headless export and debugging, not pixel-perfect
/// parity with an interactive canvas:
/// - Text metrics are left to the SVG renderer, so label layout can differ
///   slightly from a canvas rasterizer.
/// - [`DrawOp::Clear`] drops everything drawn so far and repaints the
///   background.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    background: Option<Color>,
    state: SvgState,
    body: String,
}

impl SvgSurface {
    /// Creates a surface of the given pixel size with a white background.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let mut surface = Self {
            size,
            background: Some(Color::WHITE),
            state: SvgState::default(),
            body: String::new(),
        };
        surface.paint_background();
        surface
    }

    /// Sets the background painted by [`DrawOp::Clear`].
    ///
    /// `None` leaves the document transparent. Takes effect from the next
    /// clear.
    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Renders everything drawn since the last clear as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let width = fmt_f64(self.size.width);
        let height = fmt_f64(self.size.height);
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }

    fn paint_background(&mut self) {
        if let Some(color) = self.background {
            let (rgb, alpha) = color_to_svg(color);
            let _ = write!(
                self.body,
                "<rect width=\"{}\" height=\"{}\" fill=\"{rgb}\"",
                fmt_f64(self.size.width),
                fmt_f64(self.size.height),
            );
            if alpha < 1.0 {
                let _ = write!(self.body, " fill-opacity=\"{}\"", fmt_f64(f64::from(alpha)));
            }
            self.body.push_str("/>");
        }
    }

    fn stroke_attrs(&self) -> String {
        let (rgb, alpha) = color_to_svg(self.state.stroke_color);
        let mut out = String::new();
        let _ = write!(out, " stroke=\"{rgb}\"");
        if alpha < 1.0 {
            let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f64(f64::from(alpha)));
        }
        let _ = write!(
            out,
            " stroke-width=\"{}\"",
            fmt_f64(self.state.stroke_width)
        );
        out
    }
}

impl PlotSurface for SvgSurface {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetStrokeColor(color) => self.state.stroke_color = color,
            StateOp::SetStrokeWidth(width) => self.state.stroke_width = width,
            StateOp::SetFillColor(color) => self.state.fill_color = color,
            StateOp::SetFont(font) => self.state.font = font,
            StateOp::SetTextAlign(align) => self.state.text_align = align,
            StateOp::SetTextBaseline(baseline) => self.state.text_baseline = baseline,
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::Clear => {
                self.body.clear();
                self.paint_background();
            }
            DrawOp::Line { p0, p1 } => {
                let attrs = self.stroke_attrs();
                let _ = write!(
                    self.body,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{attrs}/>",
                    fmt_f64(p0.x),
                    fmt_f64(p0.y),
                    fmt_f64(p1.x),
                    fmt_f64(p1.y),
                );
            }
            DrawOp::Polyline { points } => {
                if points.len() < 2 {
                    return;
                }
                let attrs = self.stroke_attrs();
                self.body.push_str("<polyline points=\"");
                for (i, pt) in points.iter().enumerate() {
                    if i > 0 {
                        self.body.push(' ');
                    }
                    let _ = write!(self.body, "{},{}", fmt_f64(pt.x), fmt_f64(pt.y));
                }
                let _ = write!(self.body, "\" fill=\"none\"{attrs}/>");
            }
            DrawOp::Text { text, pos } => {
                let (rgb, alpha) = color_to_svg(self.state.fill_color);
                let mut attrs = String::new();
                let _ = write!(attrs, " fill=\"{rgb}\"");
                if alpha < 1.0 {
                    let _ = write!(attrs, " fill-opacity=\"{}\"", fmt_f64(f64::from(alpha)));
                }
                let _ = write!(
                    attrs,
                    " font-size=\"{}\" font-family=\"{}\"",
                    fmt_f64(f64::from(self.state.font.size)),
                    self.state.font.family,
                );
                if let Some(anchor) = text_anchor_svg(self.state.text_align) {
                    let _ = write!(attrs, " text-anchor=\"{anchor}\"");
                }
                if let Some(baseline) = dominant_baseline_svg(self.state.text_baseline) {
                    let _ = write!(attrs, " dominant-baseline=\"{baseline}\"");
                }
                let _ = write!(
                    self.body,
                    "<text x=\"{}\" y=\"{}\"{attrs}>{}</text>",
                    fmt_f64(pos.x),
                    fmt_f64(pos.y),
                    xml_escape(&text),
                );
            }
        }
    }
}

fn text_anchor_svg(align: TextAlign) -> Option<&'static str> {
    match align {
        TextAlign::Left => None,
        TextAlign::Center => Some("middle"),
        TextAlign::Right => Some("end"),
    }
}

fn dominant_baseline_svg(baseline: TextBaseline) -> Option<&'static str> {
    match baseline {
        TextBaseline::Top => Some("hanging"),
        TextBaseline::Middle => Some("central"),
        TextBaseline::Alphabetic => None,
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for debugging.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-9 && diff < 1e-9 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use kurbo::{Point, Size};
    use peniko::Color;

    use super::{SvgSurface, fmt_f64};
    use crate::{PlotSurface, PlotSurfaceExt, TextAlign, TextBaseline};

    fn surface() -> SvgSurface {
        SvgSurface::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn exports_line_with_stroke_attrs() {
        let mut svg = surface();
        svg.set_stroke(Color::from_rgb8(0x33, 0x33, 0x33), 2.0);
        svg.line(Point::new(0.0, 300.0), Point::new(800.0, 300.0));

        let doc = svg.to_svg();
        assert!(doc.contains("<svg"));
        assert!(doc.contains("viewBox=\"0 0 800 600\""));
        assert!(doc.contains(
            "<line x1=\"0\" y1=\"300\" x2=\"800\" y2=\"300\" stroke=\"#333333\" stroke-width=\"2\"/>"
        ));
    }

    #[test]
    fn clear_repaints_only_the_background() {
        let mut svg = surface();
        svg.line(Point::ZERO, Point::new(1.0, 1.0));
        svg.clear();

        let doc = svg.to_svg();
        assert!(!doc.contains("<line"));
        assert!(doc.contains("fill=\"#ffffff\""));

        svg.set_background(None);
        svg.clear();
        assert!(!svg.to_svg().contains("<rect"));
    }

    #[test]
    fn polyline_formats_points_and_skips_degenerate_runs() {
        let mut svg = surface();
        svg.polyline(vec![Point::new(0.0, 0.5)]);
        assert!(!svg.to_svg().contains("<polyline"));

        svg.polyline(vec![
            Point::new(0.0, 0.5),
            Point::new(10.0, 20.25),
            Point::new(20.0, 40.0),
        ]);
        assert!(
            svg.to_svg()
                .contains("<polyline points=\"0,0.5 10,20.25 20,40\" fill=\"none\"")
        );
    }

    #[test]
    fn text_anchoring_maps_to_svg_attributes() {
        let mut svg = surface();
        svg.set_font(12.0, "Arial");
        svg.set_text_anchor(TextAlign::Center, TextBaseline::Top);
        svg.text("-2.5", Point::new(125.0, 305.0));

        let doc = svg.to_svg();
        assert!(doc.contains("font-size=\"12\" font-family=\"Arial\""));
        assert!(doc.contains("text-anchor=\"middle\""));
        assert!(doc.contains("dominant-baseline=\"hanging\""));
        assert!(doc.contains(">-2.5</text>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut svg = surface();
        svg.text("a < b & c", Point::ZERO);
        assert!(svg.to_svg().contains(">a &lt; b &amp; c</text>"));
    }

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt_f64(2.0), "2");
        assert_eq!(fmt_f64(2.5), "2.5");
        assert_eq!(fmt_f64(2.250), "2.25");
        assert_eq!(fmt_f64(-0.1), "-0.1");
        assert_eq!(fmt_f64(f64::NAN), "NaN");
    }
}
