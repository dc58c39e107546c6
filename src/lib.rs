//! Click-wheel music player core
//!
//! - `geometry`: Points, rectangles and angles on the input surface
//! - `model`: Tracks, navigation and playback state
//! - `player`: Contract of the embedded media player
//! - `controller`: Gesture classification and the event-driven controller
//! - `audio`: Simulated media player used by the terminal front-end
//! - `config`: Layered settings
//! - `testing`: Recording doubles for the player and pointer capture

pub mod audio;
pub mod config;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod model;
pub mod player;
pub mod testing;
