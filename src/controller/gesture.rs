//! Click-wheel gesture classification
//!
//! A press on the wheel either spins it or taps it. While the pointer moves,
//! the angle swept around the wheel's center is measured against an anchor
//! point; every time it exceeds the angle threshold one rotate step is emitted
//! and the anchor moves to the pointer. On release, a pointer that stayed
//! within the pan threshold of where it went down is a tap.

use serde::{Deserialize, Serialize};

use crate::geometry::{angle_degrees, bounding_circle, Point, Rect};
use crate::model::{PointerId, RotateDirection};

pub const DEFAULT_ANGLE_THRESHOLD_DEG: i32 = 10;
pub const DEFAULT_PAN_THRESHOLD_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Angle the pointer has to sweep before one rotate step fires
    pub angle_threshold_deg: i32,
    /// Displacement below which a press counts as a tap
    pub pan_threshold_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            angle_threshold_deg: DEFAULT_ANGLE_THRESHOLD_DEG,
            pan_threshold_px: DEFAULT_PAN_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Rotate(RotateDirection),
    Tap(Point),
}

#[derive(Debug, Clone, Copy)]
struct GestureSession {
    pointer: PointerId,
    origin: Point,
    anchor: Point,
}

#[derive(Debug, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }

    /// Starts a session; returns false when one is already running.
    pub fn on_pointer_down(&mut self, pointer: PointerId, point: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(GestureSession {
            pointer,
            origin: point,
            anchor: point,
        });
        tracing::trace!(?pointer, x = point.x, y = point.y, "Gesture started");
        true
    }

    pub fn on_pointer_move(&mut self, pointer: PointerId, point: Point, control: &Rect) -> Option<Gesture> {
        let threshold = self.config.angle_threshold_deg;
        let session = self.session.as_mut().filter(|s| s.pointer == pointer)?;

        let center = bounding_circle(control).center;
        let delta = angle_degrees(point, center) - angle_degrees(session.anchor, center);
        if delta.abs() <= threshold {
            return None;
        }

        session.anchor = point;
        let direction = scroll_direction(delta, threshold);
        tracing::trace!(delta, ?direction, "Wheel rotated");
        Some(Gesture::Rotate(direction))
    }

    /// Ends the session. Yields a tap when the pointer stayed put.
    pub fn on_pointer_up(&mut self, pointer: PointerId, point: Point) -> Option<Gesture> {
        let session = match self.session {
            Some(session) if session.pointer == pointer => session,
            _ => return None,
        };
        self.session = None;

        let dx = point.x - session.origin.x;
        let dy = point.y - session.origin.y;
        let pan = self.config.pan_threshold_px;
        if dx.abs() < pan && dy.abs() < pan {
            tracing::trace!(x = point.x, y = point.y, "Tap recognised");
            Some(Gesture::Tap(point))
        } else {
            None
        }
    }

    pub fn on_capture_lost(&mut self, pointer: PointerId) {
        if self.active_pointer() == Some(pointer) {
            tracing::debug!(?pointer, "Pointer capture lost, gesture cancelled");
            self.session = None;
        }
    }
}

/// Maps an angle delta onto a direction. Deltas past twice the threshold can
/// only come from crossing the ±180° seam, which flips the sign.
pub fn scroll_direction(delta: i32, threshold: i32) -> RotateDirection {
    let positive = delta > 0;
    let wrapped = delta.abs() > threshold * 2;
    if positive != wrapped {
        RotateDirection::Clockwise
    } else {
        RotateDirection::CounterClockwise
    }
}
