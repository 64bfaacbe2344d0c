//! Rendering: the only module that touches [`web_sys::CanvasRenderingContext2d`].
//!
//! It receives plain data ([`Dot`] lists and viewport dimensions) and produces
//! pixels — it does not read or mutate any pipeline state. The renderer and
//! the fader both paint the same shared surface; there is no mutual exclusion
//! because everything runs on the single browser thread.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`.
//! Callers in [`crate::host`] decide whether to log or propagate.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color;
use crate::engine::Dot;

/// Draw one filled circle per symmetry copy.
///
/// `dots` carry viewport (CSS pixel) coordinates; `dpr` scales them to the
/// device-pixel backing store via the context transform.
///
/// # Errors
///
/// Returns `Err` if a Canvas2D call fails.
pub fn draw_dots(
    ctx: &CanvasRenderingContext2d,
    dots: &[Dot],
    radius_px: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    for dot in dots {
        ctx.set_fill_style_str(&color::hsl(dot.hue_deg));
        ctx.begin_path();
        ctx.arc(dot.x, dot.y, radius_px, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

/// Paint the full-viewport translucent fade rectangle. Runs once per frame
/// regardless of input activity; lower `alpha` leaves longer trails.
///
/// # Errors
///
/// Returns `Err` if a Canvas2D call fails.
pub fn fade(
    ctx: &CanvasRenderingContext2d,
    viewport_w: f64,
    viewport_h: f64,
    alpha: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {alpha})"));
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    Ok(())
}

/// Erase the whole surface. Used on clear and on viewport resize.
///
/// # Errors
///
/// Returns `Err` if a Canvas2D call fails.
pub fn erase(
    ctx: &CanvasRenderingContext2d,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    Ok(())
}
