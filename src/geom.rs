#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport space (CSS pixels, y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rotate `p` about `center` by `angle` radians.
///
/// Rotating the center about itself is a no-op, and a full `2π` turn returns
/// the input point within floating-point tolerance.
#[must_use]
pub fn rotate_about(p: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}
