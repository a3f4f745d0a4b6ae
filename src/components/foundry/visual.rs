//! Shared panel for generated reference visuals
//!
//! A terminal cannot show the picture bytes inline, so the panel reports the
//! generation lifecycle and where the decoded image landed on disk.

use crate::components::SPINNER;
use crate::model::gen::VisualState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_visual_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    state: &VisualState,
    tick: u64,
) {
    let content: Vec<Line> = match state {
        VisualState::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Instrument interface simulation",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ],
        VisualState::Loading => {
            let spinner = SPINNER[(tick as usize) % SPINNER.len()];
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} GENERATING REALISTIC VISUAL...", spinner),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                )),
            ]
        }
        VisualState::Ready(image) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "✔ Visual ready",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} KB decoded", image.bytes_len / 1024),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("saved to {}", image.path.display()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("\"{}\"", image.prompt),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ],
        VisualState::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "⚠ Visual simulation failed",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let panel = Paragraph::new(content)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(Color::Blue)),
        );

    frame.render_widget(panel, area);
}
