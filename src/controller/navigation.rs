//! Navigation-related controller methods (menu scrolling, select, track skipping)

use crate::model::SelectOutcome;

use super::playback::Autoplay;
use super::AppController;

impl AppController {
    pub fn menu_up(&mut self) {
        self.navigation.menu_up();
        tracing::trace!(menu_index = self.navigation.menu_index(), "Menu up");
    }

    pub fn menu_down(&mut self) {
        self.navigation.menu_down();
        tracing::trace!(menu_index = self.navigation.menu_index(), "Menu down");
    }

    pub fn select(&mut self) {
        let track_loaded = self.playback.state().is_track_loaded();
        match self.navigation.select(track_loaded) {
            SelectOutcome::Ignored => {}
            SelectOutcome::Resume => {
                tracing::debug!(index = self.navigation.current_index(), "Showing loaded track");
            }
            SelectOutcome::Load(index) => {
                tracing::debug!(index, "Track selected");
                self.load_track(index, Autoplay::Always);
            }
        }
    }

    pub fn open_menu(&mut self) {
        self.navigation.open_menu();
    }

    pub fn next_track(&mut self) {
        self.advance(1);
    }

    pub fn previous_track(&mut self) {
        self.advance(-1);
    }

    fn advance(&mut self, step: isize) {
        if let Some(index) = self.navigation.advance(step) {
            tracing::debug!(index, step, "Skipping track");
            self.load_track(index, Autoplay::IfPlaying);
        }
    }
}
