//! Simulated media player backend
//!
//! Stands in for an embedded player in the terminal front-end. Media is never
//! decoded; each media reference gets a stable pseudo duration and a playback
//! clock. Ready and end-of-track reports are delivered through the event
//! channel from tokio timers, so a runtime must be running.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::PlayerSettings;
use crate::player::{
    LoadId, MediaPlayer, PlayerError, PlayerEvent, PlayerEventChannel, PlayerEventSender,
    PlayerOptions, PlayerState,
};

const DEVICE_NAME: &str = "clickwheel";
const MIN_TRACK_SECS: u64 = 90;
const TRACK_SPREAD_SECS: u64 = 150;

/// Playback clock that advances with wall time while playing
#[derive(Clone, Debug)]
struct PlaybackTiming {
    position_secs: f64,
    last_update: Instant,
    is_playing: bool,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            position_secs: 0.0,
            last_update: Instant::now(),
            is_playing: false,
        }
    }
}

impl PlaybackTiming {
    fn current_position(&self, duration_secs: f64) -> f64 {
        let position = if self.is_playing {
            self.position_secs + self.last_update.elapsed().as_secs_f64()
        } else {
            self.position_secs
        };
        position.min(duration_secs)
    }

    fn set_playing(&mut self, is_playing: bool, duration_secs: f64) {
        self.position_secs = self.current_position(duration_secs);
        self.last_update = Instant::now();
        self.is_playing = is_playing;
    }
}

pub struct SimulatedPlayer {
    options: PlayerOptions,
    settings: PlayerSettings,
    events: PlayerEventSender,
    media: String,
    load: LoadId,
    duration_secs: f64,
    ready_at: Instant,
    timing: PlaybackTiming,
    /// Set after the first play request when autoplay is blocked
    activated: bool,
    destroyed: bool,
    ready_task: Option<JoinHandle<()>>,
    end_task: Option<JoinHandle<()>>,
}

impl SimulatedPlayer {
    pub fn create_with(
        options: PlayerOptions,
        initial_media: &str,
        settings: PlayerSettings,
    ) -> (Self, PlayerEventChannel) {
        let (events, channel) = mpsc::unbounded_channel();
        let mut player = Self {
            options,
            settings,
            events,
            media: String::new(),
            load: LoadId::INITIAL,
            duration_secs: 0.0,
            ready_at: Instant::now(),
            timing: PlaybackTiming::default(),
            activated: false,
            destroyed: false,
            ready_task: None,
            end_task: None,
        };
        tracing::info!(
            container = %player.options.container,
            controls = player.options.controls,
            inline = player.options.inline,
            "Simulated player created"
        );
        if !initial_media.is_empty() {
            player.load_track(initial_media, LoadId::INITIAL);
        }
        (player, channel)
    }

    /// Container name unique to this machine
    pub fn device_id() -> String {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        format!("{}-{}", DEVICE_NAME, hostname)
    }

    pub fn media(&self) -> &str {
        &self.media
    }

    fn is_ready(&self) -> bool {
        Instant::now() >= self.ready_at
    }

    fn media_duration(&self, media: &str) -> f64 {
        if let Some(secs) = self.settings.track_length_secs {
            return secs.max(1) as f64;
        }
        let hash = media
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        (MIN_TRACK_SECS + hash % TRACK_SPREAD_SECS) as f64
    }

    fn cancel_timers(&mut self) {
        if let Some(task) = self.ready_task.take() {
            task.abort();
        }
        if let Some(task) = self.end_task.take() {
            task.abort();
        }
    }

    fn emit_state(&self, state: PlayerState) {
        // the receiver is gone once the application shuts down
        let _ = self.events.send(PlayerEvent::StateChanged {
            load: self.load,
            state,
        });
    }

    fn schedule_end(&mut self) {
        if let Some(task) = self.end_task.take() {
            task.abort();
        }
        let remaining = (self.duration_secs - self.timing.current_position(self.duration_secs)).max(0.0);
        let events = self.events.clone();
        let load = self.load;
        self.end_task = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs_f64(remaining)).await;
            let _ = events.send(PlayerEvent::StateChanged {
                load,
                state: PlayerState::Ended,
            });
        }));
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn create(options: PlayerOptions, initial_media: &str) -> Result<(Self, PlayerEventChannel), PlayerError> {
        Ok(Self::create_with(options, initial_media, PlayerSettings::default()))
    }

    fn load_track(&mut self, media: &str, load: LoadId) {
        if self.destroyed {
            return;
        }
        self.cancel_timers();

        self.media = media.to_string();
        self.load = load;
        self.duration_secs = self.media_duration(media);
        self.timing = PlaybackTiming::default();
        self.ready_at = Instant::now() + Duration::from_millis(self.settings.ready_latency_ms);

        let events = self.events.clone();
        let ready_at = tokio::time::Instant::from_std(self.ready_at);
        let duration = self.duration_secs;
        self.ready_task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(ready_at).await;
            let _ = events.send(PlayerEvent::Ready { load, duration });
        }));
        tracing::debug!(media, load = load.0, duration, "Simulated load");
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        if self.destroyed {
            return Err(PlayerError::Destroyed);
        }
        if !self.is_ready() {
            return Err(PlayerError::NotReady);
        }
        if self.settings.block_autoplay && !self.activated {
            self.activated = true;
            return Err(PlayerError::AutoplayBlocked);
        }

        if !self.timing.is_playing {
            self.timing.set_playing(true, self.duration_secs);
            self.schedule_end();
            self.emit_state(PlayerState::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.destroyed || !self.timing.is_playing {
            return;
        }
        self.timing.set_playing(false, self.duration_secs);
        if let Some(task) = self.end_task.take() {
            task.abort();
        }
        self.emit_state(PlayerState::Paused);
    }

    fn current_time(&self) -> f64 {
        self.timing.current_position(self.duration_secs)
    }

    fn duration(&self) -> f64 {
        if self.is_ready() { self.duration_secs } else { 0.0 }
    }

    fn destroy(&mut self) {
        self.cancel_timers();
        self.timing.is_playing = false;
        self.destroyed = true;
    }
}

impl Drop for SimulatedPlayer {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
