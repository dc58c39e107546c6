//! Pointer event handling

use crate::geometry::{point_in_rect, Point, Rect};
use crate::model::{PointerId, RotateDirection, TapTarget};

use super::gesture::Gesture;
use super::AppController;

/// Pointer capture primitives of the input surface
pub trait PointerCapture {
    fn set_pointer_capture(&mut self, pointer: PointerId);
    fn release_pointer_capture(&mut self, pointer: PointerId);
}

/// Surface without capture semantics; every pointer already reaches the wheel.
#[derive(Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn set_pointer_capture(&mut self, _pointer: PointerId) {}
    fn release_pointer_capture(&mut self, _pointer: PointerId) {}
}

/// Screen placement of the wheel and its buttons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelLayout {
    pub wheel: Rect,
    targets: Vec<(TapTarget, Rect)>,
}

impl WheelLayout {
    pub fn new(wheel: Rect) -> Self {
        Self {
            wheel,
            targets: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: TapTarget, rect: Rect) -> Self {
        self.set_target(target, rect);
        self
    }

    pub fn set_target(&mut self, target: TapTarget, rect: Rect) {
        match self.targets.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = rect,
            None => self.targets.push((target, rect)),
        }
    }

    pub fn target_rect(&self, target: TapTarget) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, rect)| *rect)
    }

    /// First target, in resolution order, whose rect contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<TapTarget> {
        TapTarget::RESOLUTION_ORDER.into_iter().find(|target| {
            self.target_rect(*target)
                .is_some_and(|rect| point_in_rect(point, &rect))
        })
    }
}

impl AppController {
    pub(crate) fn on_pointer_down(&mut self, pointer: PointerId, point: Point) {
        if self.gesture.on_pointer_down(pointer, point) {
            self.capture.set_pointer_capture(pointer);
        }
    }

    pub(crate) fn on_pointer_move(&mut self, pointer: PointerId, point: Point) {
        if let Some(Gesture::Rotate(direction)) =
            self.gesture.on_pointer_move(pointer, point, &self.layout.wheel)
        {
            self.on_rotate(direction);
        }
    }

    pub(crate) fn on_pointer_up(&mut self, pointer: PointerId, point: Point) {
        let owned = self.gesture.active_pointer() == Some(pointer);
        let gesture = self.gesture.on_pointer_up(pointer, point);
        if owned {
            self.capture.release_pointer_capture(pointer);
        }

        if let Some(Gesture::Tap(point)) = gesture {
            match self.layout.hit_test(point) {
                Some(target) => self.on_tap(target),
                None => tracing::trace!(x = point.x, y = point.y, "Tap outside any button"),
            }
        }
    }

    pub(crate) fn on_capture_lost(&mut self, pointer: PointerId) {
        self.gesture.on_capture_lost(pointer);
    }

    pub(crate) fn on_rotate(&mut self, direction: RotateDirection) {
        match direction {
            RotateDirection::Clockwise => self.menu_down(),
            RotateDirection::CounterClockwise => self.menu_up(),
        }
    }

    pub(crate) fn on_tap(&mut self, target: TapTarget) {
        tracing::debug!(?target, "Wheel button tapped");
        match target {
            TapTarget::Select => self.select(),
            TapTarget::Menu => self.open_menu(),
            TapTarget::Prev => self.previous_track(),
            TapTarget::Next => self.next_track(),
            TapTarget::PlayPause => self.toggle_playback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> WheelLayout {
        WheelLayout::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_target(TapTarget::Menu, Rect::new(40.0, 0.0, 20.0, 15.0))
            .with_target(TapTarget::PlayPause, Rect::new(40.0, 85.0, 20.0, 15.0))
            .with_target(TapTarget::Select, Rect::new(35.0, 35.0, 30.0, 30.0))
            .with_target(TapTarget::Next, Rect::new(85.0, 40.0, 15.0, 20.0))
            // overlaps select on purpose
            .with_target(TapTarget::Prev, Rect::new(0.0, 40.0, 40.0, 20.0))
    }

    #[test]
    fn hit_test_finds_target() {
        let layout = layout();
        assert_eq!(layout.hit_test(Point::new(50.0, 5.0)), Some(TapTarget::Menu));
        assert_eq!(layout.hit_test(Point::new(95.0, 50.0)), Some(TapTarget::Next));
        assert_eq!(layout.hit_test(Point::new(50.0, 90.0)), Some(TapTarget::PlayPause));
        assert_eq!(layout.hit_test(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn first_target_in_resolution_order_wins() {
        let layout = layout();
        assert_eq!(layout.hit_test(Point::new(37.0, 50.0)), Some(TapTarget::Select));
        assert_eq!(layout.hit_test(Point::new(20.0, 50.0)), Some(TapTarget::Prev));
    }

    #[test]
    fn set_target_replaces_existing_rect() {
        let mut layout = layout();
        layout.set_target(TapTarget::Menu, Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(layout.hit_test(Point::new(50.0, 5.0)), None);
        assert_eq!(layout.hit_test(Point::new(2.0, 2.0)), Some(TapTarget::Menu));
    }
}
