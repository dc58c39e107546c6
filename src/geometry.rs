//! Geometry helpers for the circular control surface
//!
//! All coordinates are in surface units (pixels for a pointer device, scaled
//! cells for the terminal front-end). The y axis grows downwards, so a
//! positive angle delta is a clockwise rotation on screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    pub center: Point,
    pub radius: f64,
}

impl BoundingCircle {
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

pub fn bounding_circle(rect: &Rect) -> BoundingCircle {
    BoundingCircle {
        center: Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0),
        radius: rect.width.max(rect.height) / 2.0,
    }
}

/// Angle of `point` around `center`, in whole degrees within (-180, 180].
pub fn angle_degrees(point: Point, center: Point) -> i32 {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    let degrees = round_half_up(dy.atan2(dx).to_degrees());
    // anything below -179.5 rounds onto the seam, which belongs to +180
    if degrees == -180 { 180 } else { degrees }
}

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Inclusive containment test.
pub fn point_in_rect(point: Point, rect: &Rect) -> bool {
    point.x >= rect.left
        && point.x <= rect.right()
        && point.y >= rect.top
        && point.y <= rect.bottom()
}
