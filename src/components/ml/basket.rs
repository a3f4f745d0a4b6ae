//! Market-basket rule matcher widget

use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::components::ml::MlComponent;
use crate::model::ml_sim::{BASKET_ITEMS, BASKET_RULES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);
    let (cart_area, rules_area) = controls_and_stage(screen.content, 40);

    let items: Vec<ListItem> = BASKET_ITEMS
        .iter()
        .map(|item| {
            let selected = state.basket.selected.contains(item);
            let marker = if selected { "[x] " } else { "[ ] " };
            let style = if selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(*item, style),
            ]))
        })
        .collect();

    let cart = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Your Cart "),
        )
        .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
        .highlight_symbol("▶ ");

    let mut cart_state = ListState::default();
    cart_state.select(Some(state.basket.cursor));
    frame.render_stateful_widget(cart, cart_area, &mut cart_state);

    let fired = state.basket.fired_rules();
    let mut lines = Vec::new();
    for rule in &BASKET_RULES {
        let firing = fired
            .iter()
            .any(|f| std::ptr::eq(*f, rule));
        let (marker, style) = if firing {
            (
                "⚡ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("   ", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(
                format!(
                    "{{{}}} → {}",
                    rule.antecedent.join(", "),
                    rule.consequent
                ),
                style,
            ),
            Span::styled(
                format!("   {}% confidence", rule.confidence_pct),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "A rule fires when everything on its left side is in the cart and its \
         suggestion is not already there.",
        Style::default().fg(Color::DarkGray),
    )));

    let rules = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Association Rules "),
    );
    frame.render_widget(rules, rules_area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" j/k ", hint(Color::Cyan)),
        Span::raw("Move  "),
        Span::styled(" Space ", hint(Color::Cyan)),
        Span::raw("Toggle item  "),
        Span::styled(" Esc ", hint(Color::Yellow)),
        Span::raw("Back"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
