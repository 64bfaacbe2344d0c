//! Input model: normalized pointer samples and generation stamping.
//!
//! Raw mouse and touch events are reduced here to the one record the rest of
//! the pipeline understands: a [`PointerSample`]. A mouse move only counts
//! while the primary button is held; any active touch point counts. Replayed
//! feedback re-emits samples unchanged, so downstream code never needs to
//! know whether a sample is fresh or an echo.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Bit set in the DOM `buttons` bitmask while the primary button is held.
pub const PRIMARY_BUTTON: u16 = 1;

/// One observed or replayed input position.
///
/// Immutable once created. `generation` is the value of the clear counter at
/// creation time; the filter in [`crate::engine::EngineCore::process`] drops
/// any sample whose stamp no longer matches the live counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Viewport x in CSS pixels.
    pub x: f64,
    /// Viewport y in CSS pixels.
    pub y: f64,
    /// Clear-counter stamp taken when the sample was first observed.
    pub generation: u64,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f64, y: f64, generation: u64) -> Self {
        Self { x, y, generation }
    }
}

/// Normalize a mouse move. Returns `None` unless the primary button is held;
/// an unpressed move is not an error, just a no-op.
#[must_use]
pub fn sample_from_mouse(x: f64, y: f64, buttons: u16, generation: u64) -> Option<PointerSample> {
    if buttons & PRIMARY_BUTTON == 0 {
        return None;
    }
    Some(PointerSample::new(x, y, generation))
}

/// Normalize a touch move. Every active touch point draws; relative order of
/// the points is preserved.
#[must_use]
pub fn samples_from_touches(points: &[(f64, f64)], generation: u64) -> Vec<PointerSample> {
    points
        .iter()
        .map(|&(x, y)| PointerSample::new(x, y, generation))
        .collect()
}
