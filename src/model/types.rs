//! Core type definitions for the application

use serde::{Deserialize, Serialize};

/// Which screen the device is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Menu,
    NowPlaying,
}

/// Direction of a discrete scroll step on the wheel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Named hit regions on the wheel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapTarget {
    Select,
    Menu,
    Prev,
    Next,
    PlayPause,
}

impl TapTarget {
    /// Order in which overlapping targets are tested; first match wins.
    pub const RESOLUTION_ORDER: [TapTarget; 5] = [
        TapTarget::Select,
        TapTarget::Menu,
        TapTarget::Prev,
        TapTarget::Next,
        TapTarget::PlayPause,
    ];
}

/// Playback status as seen by the coordinator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
}

impl PlaybackStatus {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// Identifier of a pointer, used to key pointer capture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);
