//! Notices drawn over the screen area

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown instead of the menu when the track list is empty
pub fn render_empty_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new("\nNo songs loaded.\nCheck library.tracks_path.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" All Songs "));
    frame.render_widget(notice, area);
}
