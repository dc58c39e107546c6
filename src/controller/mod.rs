//! Controller module - Application logic and event handling
//!
//! The controller owns every piece of mutable state and is driven by a single
//! inbound message type, `AppEvent`. Each event runs to completion before the
//! next one is handled.
//!
//! - `gesture`: Click-wheel gesture classification
//! - `input`: Pointer events, pointer capture and tap targets
//! - `navigation`: Menu scrolling, select and track skipping
//! - `playback`: Playback coordinator driving the media player
//! - `player_events`: Player lifecycle callbacks

pub mod gesture;
mod input;
mod navigation;
pub mod playback;
mod player_events;

use std::time::Duration;

pub use gesture::{Gesture, GestureClassifier, GestureConfig};
pub use input::{NoCapture, PointerCapture, WheelLayout};
pub use playback::{Autoplay, PlaybackConfig, PlaybackCoordinator, PlaybackSignal};

use crate::events::AppEvent;
use crate::model::{NavigationState, PlaybackState, Track, TrackList, View};
use crate::player::MediaPlayer;

/// Read-only view of the state for rendering
#[derive(Debug, Clone)]
pub struct AppSnapshot {
    pub view: View,
    pub menu_index: usize,
    pub current_index: usize,
    pub playback: PlaybackState,
    pub current_track: Option<Track>,
}

pub struct AppController {
    pub(crate) tracks: TrackList,
    pub(crate) navigation: NavigationState,
    pub(crate) playback: PlaybackCoordinator,
    pub(crate) gesture: GestureClassifier,
    pub(crate) layout: WheelLayout,
    pub(crate) capture: Box<dyn PointerCapture>,
}

impl AppController {
    /// `player` must have been created with the first track of `tracks` cued,
    /// when there is one.
    pub fn new(
        tracks: TrackList,
        player: Box<dyn MediaPlayer>,
        capture: Box<dyn PointerCapture>,
        gesture: GestureConfig,
        playback: PlaybackConfig,
    ) -> Self {
        let initial_index = (!tracks.is_empty()).then_some(0);
        tracing::info!(tracks = tracks.len(), "Controller created");
        Self {
            navigation: NavigationState::new(tracks.len()),
            playback: PlaybackCoordinator::new(player, initial_index, playback),
            gesture: GestureClassifier::new(gesture),
            layout: WheelLayout::default(),
            capture,
            tracks,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::PointerDown { pointer, point } => self.on_pointer_down(pointer, point),
            AppEvent::PointerMove { pointer, point } => self.on_pointer_move(pointer, point),
            AppEvent::PointerUp { pointer, point } => self.on_pointer_up(pointer, point),
            AppEvent::CaptureLost { pointer } => self.on_capture_lost(pointer),
            AppEvent::Player(event) => self.on_player_event(event),
            AppEvent::Tick => {
                self.playback.sample();
            }
            AppEvent::Layout(layout) => self.layout = layout,
        }
    }

    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn playback(&self) -> &PlaybackState {
        self.playback.state()
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn is_sampling(&self) -> bool {
        self.playback.is_sampling()
    }

    pub fn sample_interval(&self) -> Duration {
        self.playback.sample_interval()
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            view: self.navigation.view(),
            menu_index: self.navigation.menu_index(),
            current_index: self.navigation.current_index(),
            playback: self.playback.state().clone(),
            current_track: self.tracks.get(self.navigation.current_index()).cloned(),
        }
    }

    /// Tears down the player; the controller ignores the player afterwards.
    pub fn shutdown(&mut self) {
        self.playback.shutdown();
    }
}
