//! Process map - home screen of the foundry trainer
//!
//! The six-step A-F casting cycle as a selectable list, with the hero visual
//! alongside.

use crate::components::foundry::{visual::draw_visual_panel, FoundryComponent};
use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::model::catalog::PROCESS_STEPS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let screen = with_hint_bar(area);
    let (list_area, stage_area) = controls_and_stage(screen.content, 45);

    let items: Vec<ListItem> = PROCESS_STEPS
        .iter()
        .map(|step| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", step.id),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        step.title,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("     {}", step.subtitle),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" V-Process Cycle ")
                .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_step));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    draw_visual_panel(
        frame,
        stage_area,
        "Casting Intelligence",
        &state.visual,
        state.tick,
    );

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" Enter ", bold(Color::Green)),
        Span::raw("Step detail  "),
        Span::styled(" t ", bold(Color::Cyan)),
        Span::raw("QC toolkit  "),
        Span::styled(" p ", bold(Color::Cyan)),
        Span::raw("Physics lab  "),
        Span::styled(" a ", bold(Color::Cyan)),
        Span::raw("Assistant  "),
        Span::styled(" Esc ", bold(Color::Yellow)),
        Span::raw("Launcher  "),
        Span::styled(" q ", bold(Color::Red)),
        Span::raw("Quit"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(hints, screen.hints);
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
