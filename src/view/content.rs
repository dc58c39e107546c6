//! Menu and now-playing screens

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};

use clickwheel_rs::controller::AppSnapshot;
use clickwheel_rs::model::TrackList;

use super::utils::{render_scrollable_list, truncate_string};

pub fn render_menu(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, tracks: &TrackList) {
    let content_width = area.width.saturating_sub(4) as usize;
    let is_playing = snapshot.playback.is_playing();

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if i == snapshot.current_index && is_playing { "▶ " } else { "  " };
            let text = truncate_string(&track.display_name(), content_width.saturating_sub(2));
            let style = if i == snapshot.menu_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(text)])).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" All Songs ")
        .title_bottom(Line::from(format!(" {} songs ", tracks.len())).right_aligned());

    render_scrollable_list(frame, area, items, snapshot.menu_index, block);
}

pub fn render_now_playing(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, track_count: usize) {
    let Some(track) = &snapshot.current_track else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Now Playing ")
        .title_bottom(Line::from(format!(" {} of {} ", snapshot.current_index + 1, track_count)).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Artist
            Constraint::Length(1), // Album
            Constraint::Min(0),    // Artwork reference
        ])
        .split(inner);

    let title = Paragraph::new(track.title.as_str())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(title, chunks[0]);

    let artist = Paragraph::new(track.artist.as_str()).style(Style::default().fg(Color::Gray));
    frame.render_widget(artist, chunks[1]);

    if let Some(album) = &track.album {
        let album = Paragraph::new(album.as_str()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(album, chunks[2]);
    }

    if !track.artwork_ref.is_empty() {
        let artwork = Paragraph::new(track.artwork_ref.as_str())
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        frame.render_widget(artwork, chunks[3]);
    }
}
