//! QC toolkit dashboard - the four inspection tools

use crate::components::foundry::FoundryComponent;
use crate::components::layout::with_hint_bar;
use crate::model::catalog::QC_TOOLS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let screen = with_hint_bar(area);

    let items: Vec<ListItem> = QC_TOOLS
        .iter()
        .map(|tool| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        tool.title,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", tool.category),
                        Style::default().fg(Color::Indexed(99)),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {} workflow steps, {} parameters", tool.workflow.len(), tool.parameters.len()),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" The Quality Toolkit ")
                .title_style(
                    Style::default()
                        .fg(Color::Indexed(99))
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::Indexed(99))),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_tool));
    frame.render_stateful_widget(list, screen.content, &mut list_state);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Operational manual  "),
        Span::styled(
            " s ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Start UT simulation  "),
        Span::styled(
            " Esc ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Back to map"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}
