//! View module - UI rendering
//!
//! This module draws the device using ratatui. It is organized into
//! submodules by component type:
//!
//! - `utils`: Shared helpers (scrollable lists, truncation)
//! - `layout`: Screen / wheel split and the wheel's hit targets
//! - `content`: Menu and now-playing screens
//! - `progress`: Progress bar rendering
//! - `overlays`: Empty-library notice

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

use ratatui::Frame;

use clickwheel_rs::controller::{AppSnapshot, WheelLayout};
use clickwheel_rs::model::{TrackList, View};

pub use layout::cell_point;

pub struct AppView;

impl AppView {
    /// Draws one frame and returns where the wheel ended up, so pointer
    /// input can be hit-tested against what is on screen.
    pub fn render(frame: &mut Frame, snapshot: &AppSnapshot, tracks: &TrackList) -> WheelLayout {
        let areas = layout::split_device(frame.area());

        if tracks.is_empty() {
            overlays::render_empty_notice(frame, areas.screen);
        } else {
            match snapshot.view {
                View::Menu => content::render_menu(frame, areas.screen, snapshot, tracks),
                View::NowPlaying => {
                    let chunks = layout::split_now_playing(areas.screen);
                    content::render_now_playing(frame, chunks[0], snapshot, tracks.len());
                    progress::render_progress_bar(frame, chunks[1], &snapshot.playback);
                }
            }
        }

        layout::render_wheel(frame, areas.wheel, snapshot.playback.is_playing())
    }
}
