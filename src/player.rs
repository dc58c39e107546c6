//! Contract of the embedded media player
//!
//! The player is an external collaborator: it accepts commands and reports
//! lifecycle changes over an event channel. Handles are created explicitly
//! once and destroyed explicitly.

use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Ended,
}

/// Tag of one `load_track` call. Events carry the tag of the load they
/// belong to, so reports queued before a newer load can be told apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LoadId(pub u64);

impl LoadId {
    /// The media cued when the player is created
    pub const INITIAL: LoadId = LoadId(0);

    pub fn next(self) -> Self {
        LoadId(self.0.wrapping_add(1))
    }
}

/// Callbacks delivered by the player
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    /// The loaded media is ready; `duration` is in seconds
    Ready { load: LoadId, duration: f64 },
    StateChanged { load: LoadId, state: PlayerState },
}

impl PlayerEvent {
    pub fn load(&self) -> LoadId {
        match self {
            Self::Ready { load, .. } | Self::StateChanged { load, .. } => *load,
        }
    }
}

pub type PlayerEventSender = mpsc::UnboundedSender<PlayerEvent>;
pub type PlayerEventChannel = mpsc::UnboundedReceiver<PlayerEvent>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The platform refused to start playback without a user gesture
    #[error("Autoplay prevented")]
    AutoplayBlocked,
    #[error("Player is not ready")]
    NotReady,
    #[error("Player handle has been destroyed")]
    Destroyed,
    #[error("Player backend error: {0}")]
    Backend(String),
}

/// Creation options for a player handle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Opaque reference to whatever hosts the player
    pub container: String,
    pub autoplay: bool,
    pub controls: bool,
    pub inline: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            container: "clickwheel-player".to_string(),
            autoplay: false,
            controls: false,
            inline: true,
        }
    }
}

pub trait MediaPlayer {
    /// Creates the player with `initial_media` cued under `LoadId::INITIAL`.
    /// The returned channel carries every lifecycle event of this handle.
    fn create(options: PlayerOptions, initial_media: &str) -> Result<(Self, PlayerEventChannel), PlayerError>
    where
        Self: Sized;

    /// Replaces the cued media. Every event about it is tagged with `load`.
    fn load_track(&mut self, media: &str, load: LoadId);

    /// May fail when the platform blocks autoplay; callers treat that as
    /// expected.
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self);

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    /// Duration of the loaded media in seconds, 0 when unknown
    fn duration(&self) -> f64;

    fn destroy(&mut self);
}
