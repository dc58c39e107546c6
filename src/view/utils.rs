//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

/// Renders `items` scrolled so the highlighted row keeps one row of context
/// above and below. Row styling is left to the items.
pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items).block(block).scroll_padding(1);
    let mut state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
