#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_copy_and_equality() {
    let p = Point::new(1.0, 2.0);
    let q = p;
    assert_eq!(p, q);
    assert_ne!(p, Point::new(1.0, 3.0));
}

// --- rotate_about ---

#[test]
fn zero_angle_is_identity() {
    let p = Point::new(12.5, -7.0);
    let center = Point::new(100.0, 100.0);
    assert!(point_approx_eq(rotate_about(p, center, 0.0), p));
}

#[test]
fn full_turn_is_identity() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(-33.3, 999.9),
        Point::new(640.0, 480.0),
    ];
    let center = Point::new(320.0, 240.0);
    for p in points {
        assert!(
            point_approx_eq(rotate_about(p, center, TAU), p),
            "2π rotation moved {p:?}"
        );
    }
}

#[test]
fn center_about_itself_is_noop() {
    let center = Point::new(100.0, 100.0);
    for i in 0..8 {
        let angle = TAU * f64::from(i) / 8.0;
        assert!(point_approx_eq(rotate_about(center, center, angle), center));
    }
}

#[test]
fn quarter_turn() {
    // y-down space: (150, 100) a quarter turn about (100, 100) lands below.
    let center = Point::new(100.0, 100.0);
    let rotated = rotate_about(Point::new(150.0, 100.0), center, FRAC_PI_2);
    assert!(point_approx_eq(rotated, Point::new(100.0, 150.0)));
}

#[test]
fn half_turn() {
    let center = Point::new(100.0, 100.0);
    let rotated = rotate_about(Point::new(150.0, 120.0), center, PI);
    assert!(point_approx_eq(rotated, Point::new(50.0, 80.0)));
}

#[test]
fn rotation_preserves_distance_from_center() {
    let center = Point::new(50.0, 50.0);
    let p = Point::new(80.0, 10.0);
    let d0 = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
    for i in 1..12 {
        let rotated = rotate_about(p, center, TAU * f64::from(i) / 12.0);
        let d = ((rotated.x - center.x).powi(2) + (rotated.y - center.y).powi(2)).sqrt();
        assert!(approx_eq(d0, d));
    }
}

#[test]
fn rotation_about_arbitrary_center() {
    // Rotating (2, 1) about (1, 1) by π/2 gives (1, 2).
    let rotated = rotate_about(Point::new(2.0, 1.0), Point::new(1.0, 1.0), FRAC_PI_2);
    assert!(point_approx_eq(rotated, Point::new(1.0, 2.0)));
}
