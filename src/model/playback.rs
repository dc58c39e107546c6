//! Playback-related state

use super::types::PlaybackStatus;

/// Playback status and timing of the loaded track
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    pub current_time_secs: f64,
    pub duration_secs: f64,
    /// Index of the most recently loaded track
    pub loaded_index: Option<usize>,
}

impl PlaybackState {
    /// A track counts as loaded once the player has reported its duration.
    pub fn is_track_loaded(&self) -> bool {
        self.duration_secs > 0.0
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.current_time_secs, self.duration_secs)
    }

    pub(crate) fn reset_for_load(&mut self, index: usize) {
        self.status = PlaybackStatus::Loading;
        self.current_time_secs = 0.0;
        self.duration_secs = 0.0;
        self.loaded_index = Some(index);
    }

    /// Records a time sample reported by the player, clamped to the duration
    /// once it is known.
    pub(crate) fn record_time(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.current_time_secs = if self.duration_secs > 0.0 {
            seconds.min(self.duration_secs)
        } else {
            seconds
        };
        self.check_invariants();
    }

    pub(crate) fn record_duration(&mut self, seconds: f64) {
        self.duration_secs = seconds;
        self.current_time_secs = self.current_time_secs.min(seconds);
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(self.duration_secs >= 0.0, "negative duration {}", self.duration_secs);
        debug_assert!(self.current_time_secs >= 0.0, "negative time {}", self.current_time_secs);
        debug_assert!(
            self.duration_secs == 0.0 || self.current_time_secs <= self.duration_secs,
            "time {} past duration {}",
            self.current_time_secs,
            self.duration_secs
        );
    }
}

pub fn progress_ratio(current_secs: f64, duration_secs: f64) -> f64 {
    if duration_secs > 0.0 {
        (current_secs / duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Formats seconds as `M:SS`
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total_seconds = seconds.floor() as u64;
    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", minutes, secs)
}
