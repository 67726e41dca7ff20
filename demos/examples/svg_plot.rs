// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot a few functions and export the scene as SVG.
//!
//! Demonstrate the add/auto-fit/render flow of `quadrille_engine` without a
//! windowing host.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example svg_plot`

use kurbo::Size;
use quadrille_engine::PlotEngine;
use quadrille_surface::SvgSurface;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = Size::new(800.0, 600.0);
    let mut engine = PlotEngine::new(size);

    for formula in ["y = x^2/8 - 2", "sin(2x)", "1/x"] {
        let entry = engine.add_function(formula)?;
        println!("registered {:?} as {:?}", entry.expression, entry.normalized);
    }

    // Interactive hosts run the deferred fit after the first paint settles;
    // headless, it can run right away.
    if engine.take_pending_auto_fit() {
        engine.auto_scale();
    }

    if engine.take_redraw_request() {
        let mut surface = SvgSurface::new(size);
        engine.render(&mut surface);
        std::fs::write("quadrille_plot.svg", surface.to_svg())?;
        eprintln!("Wrote quadrille_plot.svg");
    }

    Ok(())
}
