mod logging;
mod view;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use clickwheel_rs::audio::SimulatedPlayer;
use clickwheel_rs::config::{self, Settings};
use clickwheel_rs::controller::{AppController, NoCapture, WheelLayout};
use clickwheel_rs::events::AppEvent;
use clickwheel_rs::model::{PointerId, TrackList};
use clickwheel_rs::player::{PlayerEventChannel, PlayerOptions};

use view::AppView;

/// The terminal reports a single mouse
const MOUSE: PointerId = PointerId(0);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (settings, config_error) = match config::load_config() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    let _log_guard = match logging::init_logging(&settings.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Clickwheel Starting ===");
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Using default settings");
    }

    let tracks = load_tracks(&settings);

    let initial_media = tracks.get(0).map(|t| t.media_ref.as_str()).unwrap_or_default();
    let options = PlayerOptions {
        container: SimulatedPlayer::device_id(),
        ..PlayerOptions::default()
    };
    let (player, player_events) = SimulatedPlayer::create_with(options, initial_media, settings.player);

    let controller = AppController::new(
        tracks,
        Box::new(player),
        Box::new(NoCapture),
        settings.gesture,
        settings.playback,
    );

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller, player_events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Clickwheel shutting down");
    Ok(())
}

fn load_tracks(settings: &Settings) -> TrackList {
    let Some(path) = &settings.library.tracks_path else {
        tracing::info!("No track list configured, using demo tracks");
        return TrackList::demo();
    };
    match TrackList::load_from_disk(path) {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Could not load track list");
            TrackList::default()
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController,
    mut player_events: PlayerEventChannel,
) -> io::Result<()> {
    let mut input = EventStream::new();
    let mut ticker = tokio::time::interval(controller.sample_interval());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let snapshot = controller.snapshot();
        let mut layout = WheelLayout::default();
        terminal.draw(|f| {
            layout = AppView::render(f, &snapshot, controller.tracks());
        })?;
        if &layout != controller.layout() {
            controller.handle(AppEvent::Layout(layout));
        }

        let event = tokio::select! {
            input_event = input.next() => match input_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    None
                }
                Some(Ok(Event::Mouse(mouse))) => pointer_event(mouse),
                Some(Ok(Event::FocusLost)) => Some(AppEvent::CaptureLost { pointer: MOUSE }),
                Some(Ok(_)) => None,
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Terminal input failed");
                    break;
                }
                None => break,
            },
            Some(event) = player_events.recv() => Some(AppEvent::Player(event)),
            _ = ticker.tick(), if controller.is_sampling() => Some(AppEvent::Tick),
        };

        if let Some(event) = event {
            controller.handle(event);
        }
    }

    controller.shutdown();
    Ok(())
}

fn pointer_event(mouse: MouseEvent) -> Option<AppEvent> {
    let point = view::cell_point(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::PointerDown { pointer: MOUSE, point }),
        MouseEventKind::Drag(MouseButton::Left) => Some(AppEvent::PointerMove { pointer: MOUSE, point }),
        MouseEventKind::Up(MouseButton::Left) => Some(AppEvent::PointerUp { pointer: MOUSE, point }),
        _ => None,
    }
}
