//! Layout rendering (screen / wheel split, wheel buttons)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use clickwheel_rs::controller::WheelLayout;
use clickwheel_rs::geometry::{self, Point};
use clickwheel_rs::model::TapTarget;

/// Terminal cells are roughly twice as tall as wide; surface units scale rows
/// so the wheel is round in pointer space.
const ROW_SCALE: f64 = 2.0;

const WHEEL_HEIGHT: u16 = 13;
const WHEEL_WIDTH: u16 = WHEEL_HEIGHT * 2;
const SCREEN_WIDTH: u16 = 44;

pub struct DeviceAreas {
    pub screen: Rect,
    pub wheel: Rect,
}

pub fn split_device(area: Rect) -> DeviceAreas {
    let [column] = Layout::horizontal([Constraint::Length(SCREEN_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),                // Screen
            Constraint::Length(1),             // Gap
            Constraint::Length(WHEEL_HEIGHT),  // Click wheel
        ])
        .split(column);

    let [wheel] = Layout::horizontal([Constraint::Length(WHEEL_WIDTH)])
        .flex(Flex::Center)
        .areas(chunks[2]);

    DeviceAreas {
        screen: chunks[0],
        wheel,
    }
}

pub fn split_now_playing(area: Rect) -> [Rect; 2] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Track metadata
            Constraint::Length(3), // Progress bar
        ])
        .areas(area)
}

/// Center of a terminal cell in surface units
pub fn cell_point(column: u16, row: u16) -> Point {
    Point::new(column as f64 + 0.5, (row as f64 + 0.5) * ROW_SCALE)
}

fn surface_rect(area: Rect) -> geometry::Rect {
    geometry::Rect::new(
        area.x as f64,
        area.y as f64 * ROW_SCALE,
        area.width as f64,
        area.height as f64 * ROW_SCALE,
    )
}

fn button_areas(wheel: Rect) -> [(TapTarget, Rect, &'static str); 5] {
    let mid_x = wheel.x + wheel.width / 2;
    let mid_y = wheel.y + wheel.height / 2;
    [
        (TapTarget::Menu, Rect::new(mid_x - 3, wheel.y + 1, 6, 1), "MENU"),
        (TapTarget::Prev, Rect::new(wheel.x + 2, mid_y, 4, 1), "|<<"),
        (TapTarget::Next, Rect::new(wheel.x + wheel.width - 6, mid_y, 4, 1), ">>|"),
        (
            TapTarget::PlayPause,
            Rect::new(mid_x - 3, wheel.y + wheel.height - 2, 6, 1),
            ">||",
        ),
        (TapTarget::Select, Rect::new(mid_x - 4, mid_y - 1, 8, 3), ""),
    ]
}

/// Draws the wheel and returns its layout in surface units
pub fn render_wheel(frame: &mut Frame, area: Rect, is_playing: bool) -> WheelLayout {
    let ring = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(ring, area);

    let mut layout = WheelLayout::new(surface_rect(area));
    if area.width < WHEEL_WIDTH || area.height < WHEEL_HEIGHT {
        // no room for the buttons; the wheel still scrolls
        return layout;
    }

    for (target, rect, label) in button_areas(area) {
        let widget = match target {
            TapTarget::Select => Paragraph::new("")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::White)),
                ),
            TapTarget::PlayPause => {
                let label = if is_playing { "||" } else { ">" };
                Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            }
            _ => Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        };
        frame.render_widget(widget, rect);
        layout.set_target(target, surface_rect(rect));
    }

    layout
}
