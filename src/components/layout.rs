//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Content area above a fixed-height key hint bar
pub struct ScreenLayout {
    pub content: Rect,
    pub hints: Rect,
}

pub fn with_hint_bar(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    ScreenLayout {
        content: chunks[0],
        hints: chunks[1],
    }
}

/// Left control column next to a wide display pane
pub fn controls_and_stage(area: Rect, controls_pct: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(controls_pct),
            Constraint::Percentage(100 - controls_pct),
        ])
        .split(area);
    (chunks[0], chunks[1])
}
