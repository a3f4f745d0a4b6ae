//! Step detail - one process step with its quality checklist

use crate::components::foundry::{visual::draw_visual_panel, FoundryComponent};
use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::model::catalog::PROCESS_STEPS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let step = &PROCESS_STEPS[state.selected_step];
    let screen = with_hint_bar(area);
    let (text_area, side_area) = controls_and_stage(screen.content, 58);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" STEP {} ", step.id),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                step.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            step.subtitle.to_uppercase(),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
    ];

    for detail in step.details {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Blue)),
            Span::styled(*detail, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  QUALITY INSPECTOR'S FOCUS",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    for check in step.quality_checks {
        lines.push(Line::from(vec![
            Span::styled("  ✔ ", Style::default().fg(Color::Green)),
            Span::styled(*check, Style::default().fg(Color::Gray)),
        ]));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" Step {} of {} ", state.selected_step + 1, PROCESS_STEPS.len())),
    );
    frame.render_widget(detail, text_area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(side_area);

    draw_visual_panel(frame, side[0], "Step Visual", &state.visual, state.tick);

    let tip = Paragraph::new(Line::from(vec![
        Span::styled("ⓘ ", Style::default().fg(Color::Blue)),
        Span::styled(
            format!("\"{}\"", step.tip),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Foreman's Tip "),
    );
    frame.render_widget(tip, side[1]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ ", hint()),
        Span::raw("Prev/next step  "),
        Span::styled(" g ", hint()),
        Span::raw("Regenerate visual  "),
        Span::styled(" Esc ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("Back to map"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn hint() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}
