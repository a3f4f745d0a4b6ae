//! ML overview - algorithm catalog and the advisor panel

use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::components::SPINNER;
use crate::components::ml::MlComponent;
use crate::model::catalog::ALGORITHM_CARDS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);
    let (list_area, side_area) = controls_and_stage(screen.content, 42);

    let items: Vec<ListItem> = ALGORITHM_CARDS
        .iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        card.title,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", card.category),
                        Style::default().fg(Color::Magenta),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {}", card.tagline),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ML Strategies ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_card));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(side_area);

    draw_card_detail(frame, side[0], state);
    draw_advisor(frame, side[1], state);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", hint(Color::Green)),
        Span::raw("Open widget  "),
        Span::styled(" / ", hint(Color::Cyan)),
        Span::raw("Ask the advisor  "),
        Span::styled(" Esc ", hint(Color::Yellow)),
        Span::raw("Launcher  "),
        Span::styled(" q ", hint(Color::Red)),
        Span::raw("Quit"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn draw_card_detail(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let card = &ALGORITHM_CARDS[state.selected_card];
    let mut lines = Vec::new();
    for detail in card.details {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Magenta)),
            Span::styled(*detail, Style::default().fg(Color::Gray)),
        ]));
    }
    let detail = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" {} ", card.title)),
    );
    frame.render_widget(detail, area);
}

fn draw_advisor(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let mut lines = Vec::new();

    if state.advisor_active {
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Magenta)),
            Span::styled(state.advisor_input.clone(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::Magenta)),
        ]));
        lines.push(Line::from(Span::styled(
            "Describe your problem, Enter to ask, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )));
    } else if state.advisor_loading {
        let spinner = SPINNER[(state.tick as usize) % SPINNER.len()];
        lines.push(Line::from(Span::styled(
            format!("{} consulting the advisor...", spinner),
            Style::default().fg(Color::Magenta),
        )));
    } else if let Some(reply) = &state.advisor_reply {
        lines.push(Line::from(vec![
            Span::styled("Problem type  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                reply.problem_type.clone(),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Recommended   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                reply.algorithm.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            reply.reasoning.clone(),
            Style::default().fg(Color::Gray),
        )));
    } else if let Some(error) = &state.advisor_error {
        lines.push(Line::from(Span::styled(
            "⚠ The advisor could not answer",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "Press / to try again",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Not sure which algorithm fits your problem?",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            "Press / and describe it; the advisor answers with a structured recommendation.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let advisor = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if state.advisor_active {
                Color::Magenta
            } else {
                Color::DarkGray
            }))
            .title(" Strategy Advisor "),
    );
    frame.render_widget(advisor, area);
}

fn hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
