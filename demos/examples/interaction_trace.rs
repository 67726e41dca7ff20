// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the engine with a scripted pointer session.
//!
//! Feed a drag and a few wheel steps through `quadrille_engine`, print how
//! the view reacts to each event, then export the final scene as SVG.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example interaction_trace`

use kurbo::{Point, Size};
use quadrille_engine::{InputEvent, PlotEngine};
use quadrille_surface::SvgSurface;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = Size::new(800.0, 600.0);
    let mut engine = PlotEngine::new(size);
    engine.add_function("tan(x)")?;
    engine.add_function("x^3 / 10")?;
    // Skip the deferred auto-fit; the point here is the interaction trace.
    let _ = engine.take_pending_auto_fit();

    let session = [
        InputEvent::PointerDown(Point::new(400.0, 300.0)),
        InputEvent::PointerMove(Point::new(430.0, 280.0)),
        InputEvent::PointerMove(Point::new(460.0, 260.0)),
        InputEvent::PointerUp(Point::new(460.0, 260.0)),
        InputEvent::Wheel {
            position: Point::new(200.0, 150.0),
            delta_y: -120.0,
        },
        InputEvent::Wheel {
            position: Point::new(200.0, 150.0),
            delta_y: -120.0,
        },
        InputEvent::Wheel {
            position: Point::new(600.0, 450.0),
            delta_y: 120.0,
        },
    ];

    for event in session {
        engine.handle_event(event);
        let info = engine.viewport().debug_info();
        println!(
            "{event:?} -> center ({:.3}, {:.3}), scale {:.1}",
            info.center.x, info.center.y, info.scale
        );
    }

    if engine.take_redraw_request() {
        let mut surface = SvgSurface::new(size);
        engine.render(&mut surface);
        std::fs::write("quadrille_interaction.svg", surface.to_svg())?;
        eprintln!("Wrote quadrille_interaction.svg");
    }

    Ok(())
}
