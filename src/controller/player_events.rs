//! Player lifecycle event handling

use crate::player::PlayerEvent;

use super::playback::{Autoplay, PlaybackSignal};
use super::AppController;

impl AppController {
    /// Applies one player callback. An `Ended` report advances navigation
    /// and loads the next track in a single step; play follows when that
    /// load reports ready.
    pub(crate) fn on_player_event(&mut self, event: PlayerEvent) {
        tracing::trace!(?event, "Player event");

        if self.playback.on_player_event(event) != PlaybackSignal::TrackEnded {
            return;
        }

        match self.navigation.track_ended() {
            Some(index) => {
                tracing::info!(index, "Track ended, advancing");
                self.load_track(index, Autoplay::Always);
            }
            None => tracing::debug!("Track ended with an empty list"),
        }
    }
}
