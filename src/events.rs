use crate::controller::WheelLayout;
use crate::geometry::Point;
use crate::model::PointerId;
use crate::player::PlayerEvent;

/// Every input the controller reacts to
#[derive(Debug, Clone)]
pub enum AppEvent {
    PointerDown { pointer: PointerId, point: Point },
    PointerMove { pointer: PointerId, point: Point },
    PointerUp { pointer: PointerId, point: Point },
    CaptureLost { pointer: PointerId },
    Player(PlayerEvent),
    /// Progress sampling timer fired
    Tick,
    /// The wheel was laid out again (resize)
    Layout(WheelLayout),
}
