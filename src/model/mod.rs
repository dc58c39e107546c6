//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (views, directions, tap targets, statuses)
//! - `track`: Track metadata and the read-only track list
//! - `navigation`: Menu / now-playing state machine
//! - `playback`: Playback status and timing

mod types;
mod track;
mod navigation;
mod playback;

pub use types::{PlaybackStatus, PointerId, RotateDirection, TapTarget, View};

pub use track::{Track, TrackList, TrackListError};

pub use navigation::{NavigationState, SelectOutcome};

pub use playback::{format_time, progress_ratio, PlaybackState};
