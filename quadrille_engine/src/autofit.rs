// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting the view to the registered functions.

use kurbo::Point;
use quadrille_viewport::Viewport;

use crate::registry::PlottedFunction;

const SAMPLE_MIN_X: f64 = -20.0;
const SAMPLE_MAX_X: f64 = 20.0;
const SAMPLE_STEP: f64 = 0.5;
/// Sampled magnitudes at or above this are treated as asymptote blow-up
/// rather than curve shape.
const BLOWUP_LIMIT: f64 = 1000.0;
const PADDING: f64 = 0.1;

/// Recenters and rescales the viewport around the visible functions.
///
/// The world x window is fixed at `[-10, 10]`; only the y window adapts. It
/// is seeded at `[-10, 10]` and widened by every finite sampled value below
/// the blow-up cutoff. Returns whether the view changed; an empty registry
/// or a sweep with no usable samples leaves it untouched.
pub(crate) fn auto_scale(viewport: &mut Viewport, functions: &[PlottedFunction]) -> bool {
    if functions.is_empty() {
        return false;
    }

    let (min_x, max_x) = (-10.0_f64, 10.0_f64);
    let (mut min_y, mut max_y) = (-10.0_f64, 10.0_f64);
    let mut has_valid_points = false;

    for function in functions.iter().filter(|f| f.visible) {
        let mut x = SAMPLE_MIN_X;
        while x <= SAMPLE_MAX_X {
            if let Ok(y) = function.evaluate(x) {
                if y.is_finite() && y.abs() < BLOWUP_LIMIT {
                    min_y = min_y.min(y);
                    max_y = max_y.max(y);
                    has_valid_points = true;
                }
            }
            x += SAMPLE_STEP;
        }
    }

    if !has_valid_points {
        return false;
    }

    let size = viewport.canvas_size();
    viewport.set_center(Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0));
    let scale_x = size.width / ((max_x - min_x) * (1.0 + PADDING));
    let scale_y = size.height / ((max_y - min_y) * (1.0 + PADDING));
    viewport.set_scale(scale_x.min(scale_y));
    true
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use quadrille_expr::{CompiledExpression, EvalError, Expression};

    use super::*;
    use crate::registry::Registry;

    fn viewport() -> Viewport {
        Viewport::new(Size::new(800.0, 600.0))
    }

    fn register(registry: &mut Registry, source: &str) {
        let expr = CompiledExpression::parse(source).unwrap();
        registry.register(source.to_owned(), source.to_owned(), Box::new(expr));
    }

    #[test]
    fn empty_registry_is_untouched() {
        let mut viewport = viewport();
        assert!(!auto_scale(&mut viewport, &[]));
        assert_eq!(viewport.scale(), Viewport::DEFAULT_SCALE);
        assert_eq!(viewport.center(), Point::ZERO);
    }

    #[test]
    fn bounded_function_fits_the_seed_window() {
        let mut viewport = viewport();
        let mut registry = Registry::default();
        register(&mut registry, "sin(x)");

        assert!(auto_scale(&mut viewport, registry.entries()));
        // sin stays inside the seeded [-10, 10] window, so the y range is 20
        // world units padded by 10%, and height is the binding constraint.
        assert_eq!(viewport.center(), Point::ZERO);
        assert!((viewport.scale() - 600.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn blowup_values_are_ignored() {
        let mut viewport = viewport();
        let mut registry = Registry::default();
        register(&mut registry, "x^3");

        assert!(auto_scale(&mut viewport, registry.entries()));
        // The largest kept sample is 9.5^3 = 857.375; +-1000 and beyond are
        // dropped, and the resulting scale pins at the lower limit.
        assert_eq!(viewport.center().x, 0.0);
        assert_eq!(viewport.scale(), Viewport::MIN_SCALE);
    }

    #[test]
    fn hidden_functions_do_not_contribute() {
        let mut viewport = viewport();
        let mut registry = Registry::default();
        register(&mut registry, "x");
        register(&mut registry, "x*100");
        let loud = registry.entries()[1].id;
        registry.toggle(loud);

        assert!(auto_scale(&mut viewport, registry.entries()));
        // Only y = x contributes: range [-20, 20] padded by 10%.
        assert!((viewport.scale() - 600.0 / 44.0).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_range_moves_the_center() {
        let mut viewport = viewport();
        let mut registry = Registry::default();
        register(&mut registry, "x^2 + 5");

        assert!(auto_scale(&mut viewport, registry.entries()));
        // Samples span [5, 405]; the seed stretches the window to [-10, 405].
        assert!((viewport.center().y - (405.0 - 10.0) / 2.0).abs() < 1e-9);
        assert_eq!(viewport.center().x, 0.0);
    }

    #[test]
    fn sweep_without_usable_samples_changes_nothing() {
        struct NeverWorks;

        impl Expression for NeverWorks {
            fn evaluate(&self, _x: f64) -> Result<f64, EvalError> {
                Err(EvalError::new("no value anywhere"))
            }
        }

        let mut viewport = viewport();
        let mut registry = Registry::default();
        registry.register("?".to_owned(), "?".to_owned(), Box::new(NeverWorks));

        assert!(!auto_scale(&mut viewport, registry.entries()));
        assert_eq!(viewport.scale(), Viewport::DEFAULT_SCALE);
        assert_eq!(viewport.center(), Point::ZERO);
    }
}
