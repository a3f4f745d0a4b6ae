//! AI technical assistant - chat over the text generation endpoint

use crate::components::foundry::FoundryComponent;
use crate::components::layout::with_hint_bar;
use crate::components::SPINNER;
use crate::model::chat::ChatRole;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const GREETING: &str = "Engineer, describe a foundry defect and I will troubleshoot the A-F \
    cycle root cause. Ctrl+r records a voice question, Ctrl+s reads my last answer back.";

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let screen = with_hint_bar(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(screen.content);

    draw_transcript(frame, chunks[0], state);
    draw_input(frame, chunks[1], state);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", hint(Color::Green)),
        Span::raw("Send  "),
        Span::styled(" Ctrl+s ", hint(Color::Cyan)),
        Span::raw("Speak reply  "),
        Span::styled(" Ctrl+r ", hint(Color::Cyan)),
        Span::raw("Voice input  "),
        Span::styled(" Esc ", hint(Color::Yellow)),
        Span::raw("Back to map"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn draw_transcript(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let mut lines = vec![
        Line::from(Span::styled(
            GREETING,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    if let Some(notice) = &state.speech_notice {
        lines.push(Line::from(Span::styled(
            format!("ⓘ {}", notice),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    for message in &state.transcript {
        let (label, label_color, text_color) = match message.role {
            ChatRole::User => ("YOU", Color::Blue, Color::White),
            ChatRole::Assistant => ("AI ", Color::Green, Color::Gray),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", message.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{} ", label),
                Style::default().fg(label_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.text.clone(), Style::default().fg(text_color)),
        ]));
        lines.push(Line::from(""));
    }

    if state.is_typing {
        let spinner = SPINNER[(state.tick as usize) % SPINNER.len()];
        lines.push(Line::from(Span::styled(
            format!("{} consulting the expert...", spinner),
            Style::default().fg(Color::Blue),
        )));
    }

    // Keep the tail of the conversation on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" AI Technical Talking Assistant ")
                .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(transcript, area);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let (title, border) = if state.listening {
        (" ● Listening... ", Color::Red)
    } else {
        (" Ask a question ", Color::DarkGray)
    };

    // Show the tail of long inputs so the cursor stays visible
    let inner_width = area.width.saturating_sub(4) as usize;
    let mut shown = state.input.as_str();
    while shown.width() > inner_width && !shown.is_empty() {
        let mut chars = shown.chars();
        chars.next();
        shown = chars.as_str();
    }

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Blue)),
        Span::styled(shown.to_string(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Blue)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    frame.render_widget(input, area);
}

fn hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
