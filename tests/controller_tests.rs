//! End-to-end controller behaviour, driven through `AppEvent`s against the
//! recording player and capture surface.

use clickwheel_rs::controller::{AppController, GestureConfig, PlaybackConfig, WheelLayout};
use clickwheel_rs::events::AppEvent;
use clickwheel_rs::geometry::{Point, Rect};
use clickwheel_rs::model::{PlaybackStatus, PointerId, TapTarget, Track, TrackList, View};
use clickwheel_rs::player::{LoadId, PlayerError, PlayerEvent, PlayerState};
use clickwheel_rs::testing::{CaptureCall, PlayerCommand, RecordingCapture, RecordingPlayer};

// ===== Helpers =====

const FINGER: PointerId = PointerId(7);

struct Harness {
    controller: AppController,
    player: RecordingPlayer,
    capture: RecordingCapture,
}

fn tracks(count: usize) -> TrackList {
    let names = ["a", "b", "c", "d", "e"];
    TrackList::new(
        names[..count]
            .iter()
            .map(|n| Track::new(&n.to_uppercase(), "Artist", None, n))
            .collect(),
    )
}

fn harness(count: usize) -> Harness {
    let player = RecordingPlayer::new();
    let capture = RecordingCapture::new();
    let mut controller = AppController::new(
        tracks(count),
        Box::new(player.clone()),
        Box::new(capture.clone()),
        GestureConfig::default(),
        PlaybackConfig::default(),
    );
    controller.handle(AppEvent::Layout(wheel_layout()));
    Harness {
        controller,
        player,
        capture,
    }
}

/// 200x200 wheel centred on (100, 100) with the usual five buttons
fn wheel_layout() -> WheelLayout {
    WheelLayout::new(Rect::new(0.0, 0.0, 200.0, 200.0))
        .with_target(TapTarget::Menu, Rect::new(80.0, 0.0, 40.0, 30.0))
        .with_target(TapTarget::PlayPause, Rect::new(80.0, 170.0, 40.0, 30.0))
        .with_target(TapTarget::Prev, Rect::new(0.0, 80.0, 30.0, 40.0))
        .with_target(TapTarget::Next, Rect::new(170.0, 80.0, 30.0, 40.0))
        .with_target(TapTarget::Select, Rect::new(70.0, 70.0, 60.0, 60.0))
}

fn on_ring(degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point::new(100.0 + 85.0 * rad.cos(), 100.0 + 85.0 * rad.sin())
}

fn center_of(target: TapTarget) -> Point {
    let rect = wheel_layout().target_rect(target).unwrap();
    Point::new(rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
}

impl Harness {
    fn tap(&mut self, target: TapTarget) {
        let point = center_of(target);
        self.controller.handle(AppEvent::PointerDown { pointer: FINGER, point });
        self.controller.handle(AppEvent::PointerUp { pointer: FINGER, point });
    }

    /// Drags along the ring from `from` to `to` degrees in 5 degree steps.
    fn spin(&mut self, from: f64, to: f64) {
        let step = if to > from { 5.0 } else { -5.0 };
        self.controller.handle(AppEvent::PointerDown { pointer: FINGER, point: on_ring(from) });
        let mut angle = from;
        while (to - angle).abs() > f64::EPSILON {
            angle += step;
            self.controller.handle(AppEvent::PointerMove { pointer: FINGER, point: on_ring(angle) });
        }
        self.controller.handle(AppEvent::PointerUp { pointer: FINGER, point: on_ring(to) });
    }

    /// Reports the most recent load as ready.
    fn ready(&mut self, duration: f64) {
        let load = self.player.last_load();
        self.controller.handle(AppEvent::Player(PlayerEvent::Ready { load, duration }));
    }

    fn player_state(&mut self, state: PlayerState) {
        let load = self.player.last_load();
        self.controller.handle(AppEvent::Player(PlayerEvent::StateChanged { load, state }));
    }
}

// ===== Navigation =====

#[test]
fn spinning_the_wheel_scrolls_the_menu() {
    let mut h = harness(3);

    // a step fires at 15 and 30 degrees
    h.spin(0.0, 30.0);
    assert_eq!(h.controller.navigation().menu_index(), 2);

    h.spin(30.0, 0.0);
    assert_eq!(h.controller.navigation().menu_index(), 0);
    assert_eq!(h.controller.navigation().view(), View::Menu);
}

#[test]
fn rotation_in_now_playing_is_ignored() {
    let mut h = harness(3);
    h.ready(100.0);
    h.tap(TapTarget::Select);
    assert_eq!(h.controller.navigation().view(), View::NowPlaying);

    h.spin(0.0, 30.0);
    assert_eq!(h.controller.navigation().menu_index(), 0);
}

#[test]
fn select_then_ended_advances_and_plays() {
    let mut h = harness(3);
    h.ready(100.0);

    h.controller.menu_down();
    h.tap(TapTarget::Select);
    assert_eq!(h.controller.navigation().view(), View::NowPlaying);
    assert_eq!(h.controller.navigation().current_index(), 1);
    assert_eq!(h.player.commands(), vec![PlayerCommand::Load("b".into())]);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Loading);

    // play only goes out once the player is ready
    h.ready(120.0);
    h.player_state(PlayerState::Playing);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Playing);
    assert!(h.controller.is_sampling());

    h.player.clear();
    h.player_state(PlayerState::Ended);
    assert_eq!(h.controller.navigation().current_index(), 2);
    assert_eq!(h.controller.navigation().menu_index(), 2);
    assert_eq!(h.player.commands(), vec![PlayerCommand::Load("c".into())]);

    h.ready(90.0);
    assert_eq!(
        h.player.commands(),
        vec![PlayerCommand::Load("c".into()), PlayerCommand::Play]
    );
}

#[test]
fn ended_on_last_track_wraps_to_first() {
    let mut h = harness(2);
    h.ready(10.0);
    h.controller.menu_up();
    h.controller.select();
    h.ready(10.0);
    assert_eq!(h.controller.navigation().current_index(), 1);

    h.player_state(PlayerState::Ended);
    assert_eq!(h.controller.navigation().current_index(), 0);
    assert_eq!(h.player.loads().last().map(String::as_str), Some("a"));
}

#[test]
fn selecting_the_loaded_track_does_not_reload() {
    let mut h = harness(3);
    h.ready(100.0);

    h.tap(TapTarget::Select);
    assert_eq!(h.controller.navigation().view(), View::NowPlaying);
    assert!(h.player.commands().is_empty());
}

#[test]
fn menu_button_highlights_the_current_track() {
    let mut h = harness(4);
    h.ready(100.0);
    h.controller.menu_down();
    h.controller.menu_down();
    h.controller.select();
    h.controller.next_track();

    h.tap(TapTarget::Menu);
    assert_eq!(h.controller.navigation().view(), View::Menu);
    assert_eq!(h.controller.navigation().menu_index(), 3);
    assert_eq!(h.controller.navigation().current_index(), 3);
}

#[test]
fn skipping_keeps_the_play_state() {
    let mut h = harness(3);
    h.ready(100.0);

    // paused: skipping loads without playing
    h.tap(TapTarget::Next);
    h.ready(100.0);
    assert_eq!(h.player.commands(), vec![PlayerCommand::Load("b".into())]);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Paused);

    h.tap(TapTarget::PlayPause);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Playing);

    // playing: skipping back plays the new track once ready
    h.player.clear();
    h.tap(TapTarget::Prev);
    h.ready(100.0);
    assert_eq!(
        h.player.commands(),
        vec![PlayerCommand::Load("a".into()), PlayerCommand::Play]
    );
}

#[test]
fn late_ended_from_the_previous_track_does_not_skip() {
    let mut h = harness(4);
    h.ready(100.0);
    h.controller.toggle_playback();

    h.player.clear();
    h.controller.next_track();
    // the first track's end was already queued when "b" was requested
    h.controller.handle(AppEvent::Player(PlayerEvent::StateChanged {
        load: LoadId::INITIAL,
        state: PlayerState::Ended,
    }));

    assert_eq!(h.controller.navigation().current_index(), 1);
    assert_eq!(h.player.loads(), vec!["b".to_string()]);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Loading);
}

#[test]
fn late_ready_from_the_previous_track_does_not_start_playback() {
    let mut h = harness(3);
    h.ready(100.0);
    h.controller.toggle_playback();
    h.controller.next_track();
    let previous = h.player.last_load();
    h.controller.next_track();

    h.player.clear();
    h.controller.handle(AppEvent::Player(PlayerEvent::Ready {
        load: previous,
        duration: 30.0,
    }));
    assert!(h.player.commands().is_empty());
    assert_eq!(h.controller.playback().status, PlaybackStatus::Loading);

    h.ready(80.0);
    assert_eq!(h.player.commands(), vec![PlayerCommand::Play]);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Playing);
    assert_eq!(h.controller.playback().duration_secs, 80.0);
}

#[test]
fn play_pause_toggles() {
    let mut h = harness(1);
    h.ready(50.0);

    h.controller.toggle_playback();
    assert_eq!(h.controller.playback().status, PlaybackStatus::Playing);
    h.controller.toggle_playback();
    assert_eq!(h.controller.playback().status, PlaybackStatus::Paused);
    assert_eq!(
        h.player.commands(),
        vec![PlayerCommand::Play, PlayerCommand::Pause]
    );
}

#[test]
fn blocked_autoplay_leaves_the_track_paused() {
    let mut h = harness(2);
    h.ready(100.0);
    h.player.reject_play(Some(PlayerError::AutoplayBlocked));

    h.controller.menu_down();
    h.controller.select();
    h.ready(100.0);
    assert_eq!(h.player.play_count(), 1);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Paused);

    // a later explicit press goes through
    h.player.reject_play(None);
    h.controller.toggle_playback();
    assert_eq!(h.controller.playback().status, PlaybackStatus::Playing);
}

#[test]
fn progress_is_sampled_only_while_playing() {
    let mut h = harness(1);
    h.ready(200.0);
    h.player.set_current_time(12.0);

    h.controller.handle(AppEvent::Tick);
    assert_eq!(h.controller.playback().current_time_secs, 0.0);

    h.controller.toggle_playback();
    h.controller.handle(AppEvent::Tick);
    assert_eq!(h.controller.playback().current_time_secs, 12.0);

    h.controller.toggle_playback();
    h.player.set_current_time(30.0);
    h.controller.handle(AppEvent::Tick);
    assert_eq!(h.controller.playback().current_time_secs, 12.0);
}

// ===== Pointer capture =====

#[test]
fn capture_is_taken_on_press_and_released_on_lift() {
    let mut h = harness(3);
    let point = on_ring(0.0);

    h.controller.handle(AppEvent::PointerDown { pointer: FINGER, point });
    // a second pointer does not start another gesture
    h.controller.handle(AppEvent::PointerDown { pointer: PointerId(8), point });
    h.controller.handle(AppEvent::PointerUp { pointer: PointerId(8), point });
    h.controller.handle(AppEvent::PointerUp { pointer: FINGER, point });

    assert_eq!(
        h.capture.calls(),
        vec![CaptureCall::Set(FINGER), CaptureCall::Release(FINGER)]
    );
}

#[test]
fn lost_capture_cancels_the_gesture() {
    let mut h = harness(3);
    let point = center_of(TapTarget::Next);

    h.controller.handle(AppEvent::PointerDown { pointer: FINGER, point });
    h.controller.handle(AppEvent::CaptureLost { pointer: FINGER });
    h.controller.handle(AppEvent::PointerUp { pointer: FINGER, point });

    assert!(h.player.commands().is_empty());
    assert_eq!(h.capture.calls(), vec![CaptureCall::Set(FINGER)]);
}

#[test]
fn dragging_off_a_button_is_not_a_tap() {
    let mut h = harness(3);
    let start = center_of(TapTarget::Next);
    let end = Point::new(start.x, start.y + 12.0);

    h.controller.handle(AppEvent::PointerDown { pointer: FINGER, point: start });
    h.controller.handle(AppEvent::PointerMove { pointer: FINGER, point: end });
    h.controller.handle(AppEvent::PointerUp { pointer: FINGER, point: end });

    assert!(h.player.commands().is_empty());
}

// ===== Empty list and shutdown =====

#[test]
fn empty_track_list_is_inert() {
    let mut h = harness(0);

    h.spin(0.0, 40.0);
    for target in TapTarget::RESOLUTION_ORDER {
        h.tap(target);
    }

    assert_eq!(h.controller.navigation().view(), View::Menu);
    assert_eq!(h.controller.playback().status, PlaybackStatus::Idle);
    assert!(h.player.commands().is_empty());
    assert!(h.controller.snapshot().current_track.is_none());
}

#[test]
fn shutdown_destroys_the_player_once() {
    let mut h = harness(2);
    h.ready(100.0);
    h.controller.toggle_playback();

    h.controller.shutdown();
    h.controller.shutdown();
    assert!(!h.controller.is_sampling());

    h.player_state(PlayerState::Ended);
    h.controller.next_track();
    h.controller.handle(AppEvent::Tick);

    assert_eq!(
        h.player.commands(),
        vec![PlayerCommand::Play, PlayerCommand::Destroy]
    );
}
