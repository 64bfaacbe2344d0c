use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color;
use crate::consts::{
    DOT_RADIUS_PX, FADE_ALPHA, FEEDBACK_DELAY_MS, HUE_SPREAD_DEG, HUE_START_DEG,
    MIN_FEEDBACK_DELAY_MS, SIDES,
};
use crate::geom::{self, Point};
use crate::input::PointerSample;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Pipeline tuning, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Rotated copies drawn per sample.
    pub sides: u32,
    /// Dot radius in CSS pixels.
    pub dot_radius_px: f64,
    /// Configured replay delay in milliseconds (before the floor).
    pub delay_ms: u32,
    /// Per-frame fade rectangle alpha.
    pub fade_alpha: f64,
    /// Hue of copy 0, in degrees.
    pub hue_start_deg: f64,
    /// Hue distance covered across all copies, in degrees.
    pub hue_spread_deg: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sides: SIDES,
            dot_radius_px: DOT_RADIUS_PX,
            delay_ms: FEEDBACK_DELAY_MS,
            fade_alpha: FADE_ALPHA,
            hue_start_deg: HUE_START_DEG,
            hue_spread_deg: HUE_SPREAD_DEG,
        }
    }
}

impl Config {
    /// Replay delay with the lower bound applied.
    #[must_use]
    pub fn effective_delay_ms(&self) -> u32 {
        self.delay_ms.max(MIN_FEEDBACK_DELAY_MS)
    }
}

/// One symmetry copy ready to draw, in viewport (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    /// Fill hue in degrees; saturation and lightness are fixed.
    pub hue_deg: f64,
}

/// Core pipeline state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub config: Config,
    /// Live clear counter. A sample stamped with any other value is stale.
    /// Starts at 0 and only ever increments, by exactly 1 per clear.
    pub generation: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            config: Config::default(),
            generation: 0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    /// The rotation pivot: the viewport center, in CSS pixels.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    /// Stamp a raw viewport position with the live generation.
    #[must_use]
    pub fn sample_at(&self, x: f64, y: f64) -> PointerSample {
        PointerSample::new(x, y, self.generation)
    }

    /// Push one sample through the generation filter and, if it survives,
    /// expand it into `sides` rotated, hue-shifted dots about the viewport
    /// center.
    ///
    /// Returns `None` iff the sample's stamp no longer matches the live
    /// counter — the sample is stale and must neither be drawn nor re-queued.
    /// The comparison reads the counter at call time, never a cached value.
    /// The sample itself is never mutated; the caller re-injects the identical
    /// record after the replay delay.
    #[must_use]
    pub fn process(&self, sample: &PointerSample) -> Option<Vec<Dot>> {
        if sample.generation != self.generation {
            return None;
        }
        let center = self.viewport_center();
        let p = Point::new(sample.x, sample.y);
        let sides = self.config.sides;
        let dots = (0..sides)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(sides);
                let rotated = geom::rotate_about(p, center, angle);
                let hue = color::symmetry_hue(
                    self.config.hue_start_deg,
                    self.config.hue_spread_deg,
                    i,
                    sides,
                );
                Dot { x: rotated.x, y: rotated.y, hue_deg: hue }
            })
            .collect();
        Some(dots)
    }

    /// The clear transition: bump the generation by exactly one and return
    /// the new value. Every in-flight feedback sample carrying the old stamp
    /// will fail [`Self::process`] when its delay elapses, so the feedback
    /// stream drains within one delay interval. No timer is cancelled.
    pub fn clear(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas and its
/// 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element and context.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx, core: EngineCore::new() }
    }

    /// Resize the backing store to device pixels and erase the surface.
    /// A resize wipes canvas content in the browser anyway; erasing makes
    /// that explicit and uniform across browsers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a Canvas2D call fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
        self.erase()
    }

    /// Draw one render pass worth of dots.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a Canvas2D call fails.
    pub fn draw(&self, dots: &[Dot]) -> Result<(), JsValue> {
        render::draw_dots(&self.ctx, dots, self.core.config.dot_radius_px, self.core.dpr)
    }

    /// Apply one frame of fade decay.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a Canvas2D call fails.
    pub fn fade(&self) -> Result<(), JsValue> {
        render::fade(
            &self.ctx,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.config.fade_alpha,
            self.core.dpr,
        )
    }

    /// Clear trigger: bump the generation and erase the surface immediately.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a Canvas2D call fails.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        let generation = self.core.clear();
        log::debug!("clear: generation now {generation}");
        self.erase()
    }

    fn erase(&self) -> Result<(), JsValue> {
        render::erase(
            &self.ctx,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
