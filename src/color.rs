//! Hue ramp across symmetry copies.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Hue in degrees for symmetry copy `index` of `sides`: the start hue plus
/// an even share of the spread.
#[must_use]
pub fn symmetry_hue(start_deg: f64, spread_deg: f64, index: u32, sides: u32) -> f64 {
    start_deg + spread_deg * f64::from(index) / f64::from(sides)
}

/// CSS color string at full saturation and half lightness.
#[must_use]
pub fn hsl(hue_deg: f64) -> String {
    format!("hsl({hue_deg}, 100%, 50%)")
}
