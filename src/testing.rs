//! Test doubles for the player and pointer surface
//!
//! Both record what the controller asked of them so tests can assert on the
//! exact command sequence without a runtime.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::mpsc;

use crate::controller::PointerCapture;
use crate::model::PointerId;
use crate::player::{LoadId, MediaPlayer, PlayerError, PlayerEventChannel, PlayerOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Load(String),
    Play,
    Pause,
    Destroy,
}

#[derive(Debug, Default)]
struct RecordingState {
    commands: Vec<PlayerCommand>,
    last_load: LoadId,
    current_time: f64,
    duration: f64,
    play_error: Option<PlayerError>,
}

/// Player that records commands; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    inner: Rc<RefCell<RecordingState>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<PlayerCommand> {
        self.inner.borrow().commands.clone()
    }

    pub fn loads(&self) -> Vec<String> {
        self.inner
            .borrow()
            .commands
            .iter()
            .filter_map(|c| match c {
                PlayerCommand::Load(media) => Some(media.clone()),
                _ => None,
            })
            .collect()
    }

    /// Id of the most recent load, `LoadId::INITIAL` before any.
    pub fn last_load(&self) -> LoadId {
        self.inner.borrow().last_load
    }

    pub fn play_count(&self) -> usize {
        self.inner
            .borrow()
            .commands
            .iter()
            .filter(|c| **c == PlayerCommand::Play)
            .count()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().commands.clear();
    }

    pub fn set_current_time(&self, seconds: f64) {
        self.inner.borrow_mut().current_time = seconds;
    }

    pub fn set_duration(&self, seconds: f64) {
        self.inner.borrow_mut().duration = seconds;
    }

    /// Makes every following `play` fail with `error`, or succeed with `None`.
    pub fn reject_play(&self, error: Option<PlayerError>) {
        self.inner.borrow_mut().play_error = error;
    }
}

impl MediaPlayer for RecordingPlayer {
    fn create(_options: PlayerOptions, _initial_media: &str) -> Result<(Self, PlayerEventChannel), PlayerError> {
        let (_tx, rx) = mpsc::unbounded_channel();
        Ok((Self::new(), rx))
    }

    fn load_track(&mut self, media: &str, load: LoadId) {
        let mut inner = self.inner.borrow_mut();
        inner.last_load = load;
        inner.commands.push(PlayerCommand::Load(media.to_string()));
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let mut inner = self.inner.borrow_mut();
        inner.commands.push(PlayerCommand::Play);
        match inner.play_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.inner.borrow_mut().commands.push(PlayerCommand::Pause);
    }

    fn current_time(&self) -> f64 {
        self.inner.borrow().current_time
    }

    fn duration(&self) -> f64 {
        self.inner.borrow().duration
    }

    fn destroy(&mut self) {
        self.inner.borrow_mut().commands.push(PlayerCommand::Destroy);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCall {
    Set(PointerId),
    Release(PointerId),
}

/// Pointer surface that records capture calls; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingCapture {
    calls: Rc<RefCell<Vec<CaptureCall>>>,
}

impl RecordingCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CaptureCall> {
        self.calls.borrow().clone()
    }
}

impl PointerCapture for RecordingCapture {
    fn set_pointer_capture(&mut self, pointer: PointerId) {
        self.calls.borrow_mut().push(CaptureCall::Set(pointer));
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        self.calls.borrow_mut().push(CaptureCall::Release(pointer));
    }
}
