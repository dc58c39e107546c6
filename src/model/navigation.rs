//! Menu / now-playing navigation state machine
//!
//! Index arithmetic wraps modulo the track count. With an empty track list
//! every operation is a no-op and the device stays in the menu view.

use super::types::View;

/// What `select` asks the caller to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Not in the menu view, or no tracks
    Ignored,
    /// Already loaded track: just show it
    Resume,
    /// Load the track at this index
    Load(usize),
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    view: View,
    menu_index: usize,
    current_index: usize,
    track_count: usize,
}

impl NavigationState {
    pub fn new(track_count: usize) -> Self {
        Self {
            view: View::Menu,
            menu_index: 0,
            current_index: 0,
            track_count,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    pub fn is_empty(&self) -> bool {
        self.track_count == 0
    }

    pub fn menu_up(&mut self) {
        if self.view != View::Menu || self.is_empty() {
            return;
        }
        self.menu_index = (self.menu_index + self.track_count - 1) % self.track_count;
        self.check_invariants();
    }

    pub fn menu_down(&mut self) {
        if self.view != View::Menu || self.is_empty() {
            return;
        }
        self.menu_index = (self.menu_index + 1) % self.track_count;
        self.check_invariants();
    }

    /// `track_loaded` is true when the player already knows the duration of
    /// the current track.
    pub fn select(&mut self, track_loaded: bool) -> SelectOutcome {
        if self.view != View::Menu || self.is_empty() {
            return SelectOutcome::Ignored;
        }

        self.view = View::NowPlaying;
        if self.menu_index == self.current_index && track_loaded {
            return SelectOutcome::Resume;
        }

        self.current_index = self.menu_index;
        self.check_invariants();
        SelectOutcome::Load(self.current_index)
    }

    pub fn open_menu(&mut self) {
        if self.view != View::NowPlaying {
            return;
        }
        self.view = View::Menu;
        // highlight the playing track
        self.menu_index = self.current_index;
    }

    /// Moves the current track by `step` (usually ±1) in either view and
    /// returns the index to load.
    pub fn advance(&mut self, step: isize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let count = self.track_count as isize;
        let next = (self.current_index as isize + step).rem_euclid(count) as usize;
        self.current_index = next;
        self.menu_index = next;
        self.check_invariants();
        Some(next)
    }

    pub fn track_ended(&mut self) -> Option<usize> {
        self.advance(1)
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.menu_index < self.track_count,
            "menu index {} out of range for {} tracks",
            self.menu_index,
            self.track_count
        );
        debug_assert!(
            self.current_index < self.track_count,
            "current index {} out of range for {} tracks",
            self.current_index,
            self.track_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_menu_at_first_track() {
        let nav = NavigationState::new(3);
        assert_eq!(nav.view(), View::Menu);
        assert_eq!(nav.menu_index(), 0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn menu_scrolling_wraps() {
        let mut nav = NavigationState::new(3);
        nav.menu_up();
        assert_eq!(nav.menu_index(), 2);
        nav.menu_down();
        nav.menu_down();
        assert_eq!(nav.menu_index(), 1);
    }

    #[test]
    fn menu_scrolling_ignored_in_now_playing() {
        let mut nav = NavigationState::new(3);
        nav.menu_down();
        assert_eq!(nav.select(false), SelectOutcome::Load(1));
        nav.menu_down();
        nav.menu_up();
        assert_eq!(nav.menu_index(), 1);
    }

    #[test]
    fn select_same_loaded_track_resumes() {
        let mut nav = NavigationState::new(3);
        assert_eq!(nav.select(true), SelectOutcome::Resume);
        assert_eq!(nav.view(), View::NowPlaying);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn select_same_unloaded_track_reloads() {
        let mut nav = NavigationState::new(3);
        assert_eq!(nav.select(false), SelectOutcome::Load(0));
    }

    #[test]
    fn select_outside_menu_is_ignored() {
        let mut nav = NavigationState::new(3);
        nav.select(false);
        assert_eq!(nav.select(false), SelectOutcome::Ignored);
    }

    #[test]
    fn open_menu_highlights_current_track() {
        let mut nav = NavigationState::new(4);
        nav.menu_down();
        nav.menu_down();
        nav.select(false);
        nav.advance(1);
        nav.open_menu();
        assert_eq!(nav.view(), View::Menu);
        assert_eq!(nav.menu_index(), 3);
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn open_menu_from_menu_is_noop() {
        let mut nav = NavigationState::new(4);
        nav.menu_down();
        nav.open_menu();
        assert_eq!(nav.menu_index(), 1);
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let mut nav = NavigationState::new(3);
        assert_eq!(nav.advance(-1), Some(2));
        assert_eq!(nav.menu_index(), 2);
        assert_eq!(nav.advance(1), Some(0));
        assert_eq!(nav.track_ended(), Some(1));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut nav = NavigationState::new(0);
        nav.menu_up();
        nav.menu_down();
        assert_eq!(nav.select(true), SelectOutcome::Ignored);
        assert_eq!(nav.advance(1), None);
        assert_eq!(nav.track_ended(), None);
        assert_eq!(nav.view(), View::Menu);
    }
}
