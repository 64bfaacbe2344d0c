//! Kaleidoscope feedback canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It mirrors
//! pointer and touch movement into a rotationally symmetric pattern on a 2D
//! canvas, then feeds every rendered sample back into its own input pipeline
//! after a fixed delay, so a single stroke keeps echoing as an evolving
//! animation. A per-frame translucent fade decays old pixels, and the clear
//! button bumps a generation counter that silently drains all in-flight
//! feedback.
//!
//! All pipeline logic lives in the host-testable [`engine::EngineCore`];
//! browser types appear only in the thin [`engine::Engine`] shell, the
//! [`render`] module, and the [`host`] DOM glue.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pipeline core (generation filter, symmetry expansion) and canvas-owning shell |
//! | [`input`] | Normalized pointer samples and generation stamping |
//! | [`geom`] | Point rotation about the viewport center |
//! | [`color`] | Hue ramp across symmetry copies |
//! | [`render`] | Canvas2D side effects: dots, fade overlay, erase |
//! | [`host`] | DOM wiring: event listeners, frame loop, replay timers |
//! | [`consts`] | Fixed tuning constants (sides, radius, delay, fade) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod host;
pub mod input;
pub mod render;
