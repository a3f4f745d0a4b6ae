//! QC tool operational manual

use crate::components::foundry::{visual::draw_visual_panel, FoundryComponent};
use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::model::catalog::QC_TOOLS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let tool = &QC_TOOLS[state.selected_tool];
    let screen = with_hint_bar(area);
    let (manual_area, side_area) = controls_and_stage(screen.content, 58);

    let mut lines = vec![
        Line::from(Span::styled(
            tool.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            tool.category.to_uppercase(),
            Style::default().fg(Color::Indexed(99)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  CLINICAL WORKFLOW",
            Style::default()
                .fg(Color::Indexed(99))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (i, step) in tool.workflow.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  STEP 0{} ", i + 1),
                Style::default().fg(Color::Indexed(99)),
            ),
            Span::styled(*step, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  THE HOW-TO",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    for item in tool.dos {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Green)),
            Span::styled(*item, Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  THE HOW-NOT-TO",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    for item in tool.donts {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Red)),
            Span::styled(*item, Style::default().fg(Color::Gray)),
        ]));
    }

    let manual = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Indexed(99)))
            .title(" Operational Manual "),
    );
    frame.render_widget(manual, manual_area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3 + tool.parameters.len() as u16)])
        .split(side_area);

    draw_visual_panel(frame, side[0], "Instrument Visual", &state.visual, state.tick);

    let mut param_lines = Vec::new();
    for (key, value) in tool.parameters {
        param_lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                *value,
                Style::default()
                    .fg(Color::Indexed(111))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    let params = Paragraph::new(param_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Indexed(99)))
            .title(" Industrial Parameter Specs "),
    );
    frame.render_widget(params, side[1]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(
            " Esc ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Back to toolkit"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}
