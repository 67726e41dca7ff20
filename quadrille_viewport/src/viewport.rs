// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Pan/zoom view state over the mathematical plane.
///
/// `Viewport` tracks the canvas size in pixels and a camera described by a
/// world-space center plus a uniform `scale` in pixels per world unit. It can
/// be used to:
/// - Convert points between world and screen coordinates (screen y grows
///   downward, so the y axis is flipped).
/// - Pan by pixel deltas and zoom about an arbitrary screen anchor.
/// - Choose a grid spacing that lands on nice decimal values at any zoom.
#[derive(Clone, Debug)]
pub struct Viewport {
    canvas_size: Size,
    center: Point,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Default scale in pixels per world unit.
    pub const DEFAULT_SCALE: f64 = 50.0;
    /// Smallest allowed scale (most zoomed out).
    pub const MIN_SCALE: f64 = 5.0;
    /// Largest allowed scale (most zoomed in).
    pub const MAX_SCALE: f64 = 500.0;

    /// Creates a viewport over a canvas of the given pixel size.
    ///
    /// - Initial center is the world origin.
    /// - Initial scale is [`Viewport::DEFAULT_SCALE`] pixels per unit.
    /// - Scale is limited to `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub fn new(canvas_size: Size) -> Self {
        Self {
            canvas_size,
            center: Point::ZERO,
            scale: Self::DEFAULT_SCALE,
            min_scale: Self::MIN_SCALE,
            max_scale: Self::MAX_SCALE,
        }
    }

    /// Returns the current canvas size in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Sets the canvas size in pixels.
    ///
    /// Center and scale are unchanged; only the visible world region grows or
    /// shrinks with the canvas.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas_size = size;
    }

    /// Returns the world-space center of the view.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the world-space center of the view.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Returns the current scale in pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamping it into the configured scale range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Returns the smallest allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`. The
    /// current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Restores the default view: origin-centered at the default scale.
    pub fn reset(&mut self) {
        self.center = Point::ZERO;
        self.scale = Self::DEFAULT_SCALE.clamp(self.min_scale, self.max_scale);
    }

    /// Converts a screen-space x coordinate into world space.
    #[must_use]
    pub fn screen_to_world_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.canvas_size.width / 2.0) / self.scale + self.center.x
    }

    /// Converts a screen-space y coordinate into world space.
    ///
    /// Screen y grows downward while world y grows upward, so the sign flips.
    #[must_use]
    pub fn screen_to_world_y(&self, screen_y: f64) -> f64 {
        -(screen_y - self.canvas_size.height / 2.0) / self.scale + self.center.y
    }

    /// Converts a world-space x coordinate into screen space.
    #[must_use]
    pub fn world_to_screen_x(&self, world_x: f64) -> f64 {
        (world_x - self.center.x) * self.scale + self.canvas_size.width / 2.0
    }

    /// Converts a world-space y coordinate into screen space.
    #[must_use]
    pub fn world_to_screen_y(&self, world_y: f64) -> f64 {
        -(world_y - self.center.y) * self.scale + self.canvas_size.height / 2.0
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(self.screen_to_world_x(pt.x), self.screen_to_world_y(pt.y))
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(self.world_to_screen_x(pt.x), self.world_to_screen_y(pt.y))
    }

    /// Pans the view by a pixel delta with grab-and-drag semantics.
    ///
    /// Dragging right (`delta.x > 0`) moves the center left so the world
    /// under the pointer follows the pointer; the vertical direction
    /// additionally absorbs the screen-space y flip.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.center.x -= delta.x / self.scale;
        self.center.y += delta.y / self.scale;
    }

    /// Zooms by `factor` about an anchor point in screen coordinates.
    ///
    /// The world coordinate under the anchor stays fixed on screen. A request
    /// whose resulting scale would leave `[min_scale, max_scale]` is rejected
    /// as a no-op (not clamped), so a wheel step at the limit changes
    /// nothing. Returns `true` if the view changed.
    pub fn zoom_about_screen_point(&mut self, anchor_screen: Point, factor: f64) -> bool {
        if factor <= 0.0 {
            return false;
        }
        let new_scale = self.scale * factor;
        if new_scale < self.min_scale || new_scale > self.max_scale {
            return false;
        }
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }

        let world_before = self.screen_to_world(anchor_screen);
        self.scale = new_scale;
        let world_after = self.screen_to_world(anchor_screen);
        self.center.x += world_before.x - world_after.x;
        self.center.y += world_before.y - world_after.y;
        true
    }

    /// Returns the world-space rectangle currently visible on the canvas.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let left = self.screen_to_world_x(0.0);
        let right = self.screen_to_world_x(self.canvas_size.width);
        let bottom = self.screen_to_world_y(self.canvas_size.height);
        let top = self.screen_to_world_y(0.0);
        Rect::new(left, bottom, right, top)
    }

    /// Chooses a grid spacing in world units for the current scale.
    ///
    /// Targets grid lines roughly 50 px apart and snaps the spacing onto a
    /// 1-2-5-10 ladder scaled by a power of ten, so grid lines always land on
    /// nice decimal values regardless of zoom.
    #[must_use]
    pub fn grid_spacing(&self) -> f64 {
        let target_px = 50.0_f64;
        let world_spacing = target_px / self.scale;

        // Largest power of ten not exceeding the desired spacing, found by
        // scaling loops so the crate stays free of `log10`.
        let mut magnitude = 1.0_f64;
        while magnitude * 10.0 <= world_spacing {
            magnitude *= 10.0;
        }
        while magnitude > world_spacing {
            magnitude /= 10.0;
        }

        let normalized = world_spacing / magnitude;
        if normalized <= 1.0 {
            magnitude
        } else if normalized <= 2.0 {
            2.0 * magnitude
        } else if normalized <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            canvas_size: self.canvas_size,
            center: self.center,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            visible_world_rect: self.visible_world_rect(),
            grid_spacing: self.grid_spacing(),
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current canvas size in pixels.
    pub canvas_size: Size,
    /// World-space center of the view.
    pub center: Point,
    /// Current scale in pixels per world unit.
    pub scale: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// World-space rectangle currently visible on the canvas.
    pub visible_world_rect: Rect,
    /// Grid spacing chosen for the current scale.
    pub grid_spacing: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Viewport;

    fn default_view() -> Viewport {
        Viewport::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn world_origin_maps_to_canvas_center() {
        let vp = default_view();
        let origin = vp.world_to_screen(Point::ZERO);
        assert_eq!(origin, Point::new(400.0, 300.0));
        let back = vp.screen_to_world(Point::new(400.0, 300.0));
        assert_eq!(back, Point::ZERO);
    }

    #[test]
    fn screen_y_axis_is_flipped() {
        let vp = default_view();
        // World y above the center must land above the canvas center, i.e.
        // at a smaller screen y.
        let up = vp.world_to_screen(Point::new(0.0, 1.0));
        assert!(up.y < 300.0);
        assert_eq!(up.y, 300.0 - vp.scale());
    }

    #[test]
    fn world_screen_roundtrip() {
        let mut vp = default_view();
        vp.set_center(Point::new(3.25, -1.75));
        vp.set_scale(87.0);

        for &(sx, sy) in &[(0.0, 0.0), (400.0, 300.0), (799.0, 1.0), (123.5, 456.25)] {
            let world = vp.screen_to_world(Point::new(sx, sy));
            let screen = vp.world_to_screen(world);
            assert!((screen.x - sx).abs() < 1e-9);
            assert!((screen.y - sy).abs() < 1e-9);
        }
    }

    #[test]
    fn pan_moves_center_against_drag_direction() {
        let mut vp = default_view();
        vp.pan_by_screen(Vec2::new(50.0, -25.0));
        // 50 px right at 50 px/unit is one world unit; dragging right shows
        // content further to the left.
        assert!((vp.center().x - (-1.0)).abs() < 1e-12);
        assert!((vp.center().y - (-0.5)).abs() < 1e-12);
    }

    #[test]
    fn pan_keeps_world_under_pointer() {
        let mut vp = default_view();
        let pointer = Point::new(250.0, 125.0);
        let before = vp.screen_to_world(pointer);

        let delta = Vec2::new(33.0, -17.0);
        vp.pan_by_screen(delta);
        let after = vp.screen_to_world(Point::new(pointer.x + delta.x, pointer.y + delta.y));

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = default_view();
        let anchor = Point::new(620.0, 140.0);
        let world_before = vp.screen_to_world(anchor);

        assert!(vp.zoom_about_screen_point(anchor, 1.1));
        let world_after = vp.screen_to_world(anchor);

        assert!((world_after.x - world_before.x).abs() < 1e-9);
        assert!((world_after.y - world_before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_rejects_requests_outside_limits() {
        let mut vp = default_view();
        let anchor = Point::new(400.0, 300.0);

        for _ in 0..200 {
            vp.zoom_about_screen_point(anchor, 0.9);
        }
        assert!(vp.scale() >= Viewport::MIN_SCALE);
        let at_floor = vp.scale();
        // The next zoom-out would undershoot the floor, so it is a no-op.
        assert!(!vp.zoom_about_screen_point(anchor, 0.9));
        assert_eq!(vp.scale(), at_floor);

        for _ in 0..200 {
            vp.zoom_about_screen_point(anchor, 1.1);
        }
        assert!(vp.scale() <= Viewport::MAX_SCALE);
        let at_ceiling = vp.scale();
        assert!(!vp.zoom_about_screen_point(anchor, 1.1));
        assert_eq!(vp.scale(), at_ceiling);
    }

    #[test]
    fn reset_restores_default_view() {
        let mut vp = default_view();
        vp.pan_by_screen(Vec2::new(123.0, -45.0));
        vp.zoom_about_screen_point(Point::new(100.0, 100.0), 1.1);

        vp.reset();
        assert_eq!(vp.center(), Point::ZERO);
        assert_eq!(vp.scale(), Viewport::DEFAULT_SCALE);
    }

    #[test]
    fn set_scale_limits_normalizes_and_clamps() {
        let mut vp = default_view();
        vp.set_scale_limits(100.0, 10.0);
        assert_eq!(vp.min_scale(), 10.0);
        assert_eq!(vp.max_scale(), 100.0);
        // Default scale 50 is inside the new range and stays put.
        assert_eq!(vp.scale(), 50.0);

        vp.set_scale_limits(200.0, 400.0);
        assert_eq!(vp.scale(), 200.0);
    }

    #[test]
    fn grid_spacing_lands_on_nice_values() {
        let mut vp = default_view();
        for &(scale, expected) in &[
            (50.0, 1.0),
            (500.0, 0.1),
            (5.0, 10.0),
            (100.0, 0.5),
            (200.0, 0.5),
            (40.0, 2.0),
            (30.0, 2.0),
            (12.0, 5.0),
            (7.0, 10.0),
        ] {
            vp.set_scale(scale);
            let spacing = vp.grid_spacing();
            assert!(
                (spacing - expected).abs() < 1e-12,
                "scale {scale}: got {spacing}, expected {expected}"
            );
        }
    }

    #[test]
    fn grid_spacing_is_monotonic_in_scale() {
        let mut vp = default_view();
        let mut prev = f64::INFINITY;
        let mut scale = Viewport::MIN_SCALE;
        while scale <= Viewport::MAX_SCALE {
            vp.set_scale(scale);
            let spacing = vp.grid_spacing();
            assert!(
                spacing <= prev,
                "spacing grew from {prev} to {spacing} at scale {scale}"
            );
            prev = spacing;
            scale += 0.5;
        }
    }

    #[test]
    fn visible_world_rect_matches_default_view() {
        let vp = default_view();
        let rect = vp.visible_world_rect();
        assert!((rect.x0 - (-8.0)).abs() < 1e-12);
        assert!((rect.x1 - 8.0).abs() < 1e-12);
        assert!((rect.y0 - (-6.0)).abs() < 1e-12);
        assert!((rect.y1 - 6.0).abs() < 1e-12);
    }

    #[test]
    fn resize_preserves_center_and_scale() {
        let mut vp = default_view();
        vp.set_center(Point::new(2.0, -3.0));
        vp.set_scale(80.0);

        vp.set_canvas_size(Size::new(400.0, 400.0));
        assert_eq!(vp.center(), Point::new(2.0, -3.0));
        assert_eq!(vp.scale(), 80.0);
        // The origin-relative mapping now uses the new canvas center.
        let screen = vp.world_to_screen(Point::new(2.0, -3.0));
        assert_eq!(screen, Point::new(200.0, 200.0));
    }

    #[test]
    fn debug_info_reflects_current_state() {
        let vp = default_view();
        let info = vp.debug_info();
        assert_eq!(info.canvas_size, Size::new(800.0, 600.0));
        assert_eq!(info.center, Point::ZERO);
        assert_eq!(info.scale, Viewport::DEFAULT_SCALE);
        assert!(info.min_scale <= info.max_scale);
        assert!((info.grid_spacing - 1.0).abs() < 1e-12);
    }
}
