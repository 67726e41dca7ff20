// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine facade hosts talk to.

use std::fmt;
use std::mem;

use kurbo::Size;
use quadrille_expr::{Compiler, ExpressionCompiler, ParseError};
use quadrille_surface::PlotSurface;
use quadrille_viewport::Viewport;

use crate::autofit;
use crate::input::{DragState, InputEvent};
use crate::normalize::normalize_expression;
use crate::registry::{FunctionId, PlottedFunction, Registry};
use crate::render;

/// Interactive function plotter engine.
///
/// Owns the viewport and the function registry, consumes [`InputEvent`]s for
/// pan and zoom, and renders into any [`PlotSurface`]. The engine never
/// paints on its own: after feeding it events or API calls, hosts poll
/// [`take_redraw_request`](Self::take_redraw_request) and call
/// [`render`](Self::render) when it reports `true`.
pub struct PlotEngine {
    viewport: Viewport,
    registry: Registry,
    compiler: Box<dyn ExpressionCompiler>,
    drag: DragState,
    needs_redraw: bool,
    pending_auto_fit: bool,
}

impl PlotEngine {
    /// Creates an engine with the bundled expression compiler.
    #[must_use]
    pub fn new(canvas_size: Size) -> Self {
        Self::with_compiler(canvas_size, Box::new(Compiler::new()))
    }

    /// Creates an engine that compiles formulas with `compiler`.
    #[must_use]
    pub fn with_compiler(canvas_size: Size, compiler: Box<dyn ExpressionCompiler>) -> Self {
        Self {
            viewport: Viewport::new(canvas_size),
            registry: Registry::default(),
            compiler,
            drag: DragState::default(),
            // A fresh engine wants one paint of the empty grid.
            needs_redraw: true,
            pending_auto_fit: false,
        }
    }

    /// The current view state.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The registered functions in draw order.
    #[must_use]
    pub fn functions(&self) -> &[PlottedFunction] {
        self.registry.entries()
    }

    /// Whether a pan drag is in progress, for hosts that style cursors.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Registers a function from user-typed formula text.
    ///
    /// The text is normalized (equation prefix stripped, implicit
    /// multiplication made explicit), compiled, and probe-evaluated at
    /// `x = 0` to surface structural problems immediately. The probe accepts
    /// NaN and infinite values; plenty of perfectly plottable functions are
    /// undefined at zero. On success the entry gets the next palette color
    /// and a fresh id, and a redraw is requested. On failure the registry is
    /// untouched and no redraw is requested.
    pub fn add_function(&mut self, expression: &str) -> Result<&PlottedFunction, ParseError> {
        let normalized = normalize_expression(expression);
        let evaluator = self.compiler.compile(&normalized)?;
        if let Err(probe) = evaluator.evaluate(0.0) {
            return Err(ParseError::eval(probe.message));
        }

        if self.registry.is_empty() {
            // First function: ask the host to auto-fit once the paint
            // settles.
            self.pending_auto_fit = true;
        }
        self.needs_redraw = true;
        Ok(self
            .registry
            .register(expression.to_owned(), normalized, evaluator))
    }

    /// Removes a function, reporting whether it was present.
    ///
    /// A redraw is requested either way.
    pub fn remove_function(&mut self, id: FunctionId) -> bool {
        self.needs_redraw = true;
        self.registry.remove(id)
    }

    /// Flips a function's visibility, returning the updated entry.
    ///
    /// Unknown ids return `None` and request no redraw.
    pub fn toggle_function(&mut self, id: FunctionId) -> Option<&PlottedFunction> {
        let entry = self.registry.toggle(id)?;
        self.needs_redraw = true;
        Some(entry)
    }

    /// Deregisters everything and restarts the palette cycle.
    pub fn clear_all(&mut self) {
        self.registry.clear();
        self.needs_redraw = true;
    }

    /// Returns the view to the origin at the default zoom level.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.needs_redraw = true;
    }

    /// Fits the y window around the visible functions.
    ///
    /// Requests a redraw only when the view actually changed; see the fitting
    /// rules on the engine-internal sweep (fixed x window, seeded y window,
    /// blow-up cutoff).
    pub fn auto_scale(&mut self) {
        if autofit::auto_scale(&mut self.viewport, self.registry.entries()) {
            self.needs_redraw = true;
        }
    }

    /// Feeds one input event through the interaction state machine.
    ///
    /// Pointer down/move/up drive grab-and-drag panning; the wheel zooms
    /// about the pointer position, rejecting steps that would leave the
    /// scale limits; resize updates the canvas size without moving the view.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(pos) => self.drag.start(pos),
            InputEvent::PointerMove(pos) => {
                if let Some(delta) = self.drag.update(pos) {
                    self.viewport.pan_by_screen(delta);
                    self.needs_redraw = true;
                }
            }
            InputEvent::PointerUp(_) | InputEvent::PointerLeave => self.drag.end(),
            InputEvent::Wheel { position, delta_y } => {
                let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
                if self.viewport.zoom_about_screen_point(position, factor) {
                    self.needs_redraw = true;
                }
            }
            InputEvent::Resized(size) => {
                self.viewport.set_canvas_size(size);
                self.needs_redraw = true;
            }
        }
    }

    /// Renders the current scene into `surface`.
    pub fn render(&self, surface: &mut dyn PlotSurface) {
        render::render_plot(&self.viewport, self.registry.entries(), surface);
    }

    /// Takes the pending redraw request, clearing it.
    pub fn take_redraw_request(&mut self) -> bool {
        mem::take(&mut self.needs_redraw)
    }

    /// Takes the deferred auto-fit request, clearing it.
    ///
    /// The request is set exactly when the registry goes from empty to one
    /// entry. Hosts typically let the next paint settle and then call
    /// [`auto_scale`](Self::auto_scale) when this reports `true`.
    pub fn take_pending_auto_fit(&mut self) -> bool {
        mem::take(&mut self.pending_auto_fit)
    }
}

impl fmt::Debug for PlotEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotEngine")
            .field("viewport", &self.viewport)
            .field("registry", &self.registry)
            .field("drag", &self.drag)
            .field("needs_redraw", &self.needs_redraw)
            .field("pending_auto_fit", &self.pending_auto_fit)
            .finish_non_exhaustive()
    }
}
