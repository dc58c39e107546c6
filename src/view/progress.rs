//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use clickwheel_rs::model::{format_time, PlaybackState, PlaybackStatus};

pub fn render_progress_bar(frame: &mut Frame, area: Rect, playback: &PlaybackState) {
    let status_text = match playback.status {
        PlaybackStatus::Idle => " Stopped ",
        PlaybackStatus::Loading => " Loading... ",
        PlaybackStatus::Playing => " ▶ Playing ",
        PlaybackStatus::Paused => " ⏸ Paused ",
    };

    let time_str = format!(
        "{} / {}",
        format_time(playback.current_time_secs),
        format_time(playback.duration_secs)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(status_text))
        .gauge_style(Style::default().fg(Color::LightBlue))
        .ratio(playback.progress_ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}
