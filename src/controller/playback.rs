//! Playback coordination between navigation intents and the media player

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{PlaybackState, PlaybackStatus, Track};
use crate::player::{LoadId, MediaPlayer, PlayerError, PlayerEvent, PlayerState};

use super::AppController;

pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How often the current time is sampled while playing
    pub sample_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

/// Whether a freshly loaded track should start once the player is ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Always,
    /// Keep playing only if the previous track was playing
    IfPlaying,
    Never,
}

/// What a player event means for the rest of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSignal {
    Updated,
    TrackEnded,
}

pub struct PlaybackCoordinator {
    player: Option<Box<dyn MediaPlayer>>,
    state: PlaybackState,
    config: PlaybackConfig,
    /// Play as soon as the pending load reports ready
    pending_play: bool,
    /// Tag of the most recent load; events carrying another tag are stale
    load: LoadId,
}

impl PlaybackCoordinator {
    /// Takes ownership of a created player handle. `initial_index` is the
    /// track the handle was created with, if any.
    pub fn new(player: Box<dyn MediaPlayer>, initial_index: Option<usize>, config: PlaybackConfig) -> Self {
        let mut state = PlaybackState::default();
        if let Some(index) = initial_index {
            state.reset_for_load(index);
        }
        Self {
            player: Some(player),
            state,
            config,
            pending_play: false,
            load: LoadId::INITIAL,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn current_load(&self) -> LoadId {
        self.load
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.config.sample_interval_ms.max(1))
    }

    pub fn is_shut_down(&self) -> bool {
        self.player.is_none()
    }

    /// True while the progress sampling loop should run.
    pub fn is_sampling(&self) -> bool {
        self.player.is_some() && self.state.status == PlaybackStatus::Playing
    }

    pub fn load(&mut self, index: usize, track: &Track, autoplay: Autoplay) {
        if self.player.is_none() {
            tracing::debug!(index, "Load ignored, player destroyed");
            return;
        }

        // a superseded load hands its pending play on
        let was_playing = self.state.is_playing()
            || (self.state.status == PlaybackStatus::Loading && self.pending_play);
        self.pending_play = match autoplay {
            Autoplay::Always => true,
            Autoplay::IfPlaying => was_playing,
            Autoplay::Never => false,
        };

        self.set_status(PlaybackStatus::Loading);
        self.state.reset_for_load(index);
        self.load = self.load.next();
        if let Some(player) = self.player.as_mut() {
            player.load_track(&track.media_ref, self.load);
        }

        tracing::info!(
            index,
            load = self.load.0,
            title = %track.title,
            media = %track.media_ref,
            autoplay = self.pending_play,
            "Loading track"
        );
    }

    pub fn play_pause(&mut self) {
        if self.player.is_none() {
            return;
        }

        match self.state.status {
            PlaybackStatus::Idle => {
                tracing::debug!("Play/pause ignored, no track loaded");
            }
            PlaybackStatus::Loading => {
                self.pending_play = !self.pending_play;
                tracing::debug!(pending_play = self.pending_play, "Play/pause deferred until ready");
            }
            PlaybackStatus::Playing => {
                if let Some(player) = self.player.as_mut() {
                    player.pause();
                }
                self.set_status(PlaybackStatus::Paused);
            }
            PlaybackStatus::Paused => self.try_play(),
        }
    }

    pub fn on_player_event(&mut self, event: PlayerEvent) -> PlaybackSignal {
        if self.player.is_none() {
            tracing::debug!(?event, "Player event after shutdown ignored");
            return PlaybackSignal::Updated;
        }

        if event.load() != self.load {
            tracing::debug!(?event, current = self.load.0, "Stale player event ignored");
            return PlaybackSignal::Updated;
        }

        match event {
            PlayerEvent::Ready { duration, .. } => {
                self.on_player_ready(duration);
                PlaybackSignal::Updated
            }
            PlayerEvent::StateChanged { state, .. } => self.on_player_state_changed(state),
        }
    }

    fn on_player_ready(&mut self, reported: f64) {
        let duration = if reported.is_finite() && reported > 0.0 {
            reported
        } else {
            self.player.as_ref().map(|p| p.duration()).unwrap_or(0.0)
        };

        if duration.is_finite() && duration >= 0.0 {
            self.state.record_duration(duration);
        } else {
            tracing::warn!(duration, "Player reported an invalid duration");
        }

        if matches!(self.state.status, PlaybackStatus::Idle | PlaybackStatus::Loading) {
            self.set_status(PlaybackStatus::Paused);
        }
        tracing::debug!(duration = self.state.duration_secs, "Player ready");

        if std::mem::take(&mut self.pending_play) {
            self.try_play();
        }
    }

    fn on_player_state_changed(&mut self, state: PlayerState) -> PlaybackSignal {
        tracing::debug!(?state, "Player state changed");
        match state {
            PlayerState::Playing => {
                self.pending_play = false;
                self.set_status(PlaybackStatus::Playing);
                PlaybackSignal::Updated
            }
            PlayerState::Paused => {
                // a paused report during a load is the player cueing the new media
                if self.state.status != PlaybackStatus::Loading {
                    self.set_status(PlaybackStatus::Paused);
                }
                PlaybackSignal::Updated
            }
            PlayerState::Ended if self.state.status == PlaybackStatus::Loading => {
                tracing::debug!("Ended report while loading ignored");
                PlaybackSignal::Updated
            }
            PlayerState::Ended => {
                let duration = self.state.duration_secs;
                self.state.record_time(duration);
                self.set_status(PlaybackStatus::Paused);
                PlaybackSignal::TrackEnded
            }
        }
    }

    /// Samples the player's clock. Returns false when not sampling.
    pub fn sample(&mut self) -> bool {
        if !self.is_sampling() {
            return false;
        }
        if let Some(player) = self.player.as_ref() {
            let seconds = player.current_time();
            self.state.record_time(seconds);
        }
        true
    }

    /// Stops sampling and destroys the player handle.
    pub fn shutdown(&mut self) {
        if let Some(mut player) = self.player.take() {
            player.destroy();
            self.pending_play = false;
            tracing::info!("Player destroyed");
        }
    }

    fn try_play(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        match player.play() {
            Ok(()) => self.set_status(PlaybackStatus::Playing),
            Err(PlayerError::AutoplayBlocked) => {
                tracing::info!("Autoplay prevented, user needs to press play");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Play request failed");
            }
        }
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        let was_sampling = self.is_sampling();
        self.state.status = status;
        match (was_sampling, self.is_sampling()) {
            (false, true) => tracing::trace!("Progress sampling started"),
            (true, false) => tracing::trace!(time = self.state.current_time_secs, "Progress sampling stopped"),
            _ => {}
        }
    }
}

impl AppController {
    pub fn toggle_playback(&mut self) {
        tracing::debug!(status = ?self.playback.status(), "Toggling playback");
        self.playback.play_pause();
    }

    pub(crate) fn load_track(&mut self, index: usize, autoplay: Autoplay) {
        let Some(track) = self.tracks.get(index) else {
            debug_assert!(false, "load of track {index} outside the list");
            tracing::error!(index, "Cannot load track outside the list");
            return;
        };
        self.playback.load(index, track, autoplay);
    }
}
