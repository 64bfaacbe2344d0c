//! Fixed tuning constants. All of these are set once for the process
//! lifetime; there is no runtime configuration surface.

// ── Symmetry ────────────────────────────────────────────────────

/// Number of rotated copies drawn per sample.
pub const SIDES: u32 = 7;

/// Radius of each drawn dot in CSS pixels.
pub const DOT_RADIUS_PX: f64 = 5.0;

// ── Feedback ────────────────────────────────────────────────────

/// Delay before a rendered sample is re-injected, in milliseconds.
pub const FEEDBACK_DELAY_MS: u32 = 1500;

/// Lower bound on the replay delay. Configured delays below this are
/// silently raised to it; the floor is a defined behavior, not a clamp
/// against misuse.
pub const MIN_FEEDBACK_DELAY_MS: u32 = 100;

// ── Fade ────────────────────────────────────────────────────────

/// Alpha of the near-black rectangle painted every frame. Lower values
/// decay slower and leave longer trails.
pub const FADE_ALPHA: f64 = 0.1;

// ── Color ───────────────────────────────────────────────────────

/// Hue of symmetry copy 0, in degrees.
pub const HUE_START_DEG: f64 = 0.0;

/// Hue distance covered across all copies, in degrees.
pub const HUE_SPREAD_DEG: f64 = 360.0;
