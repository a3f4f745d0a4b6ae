//! Sigmoid credit classifier widget

use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::components::ml::MlComponent;
use crate::model::ml_sim::{approval_probability, CreditDecision, APPROVAL_MIDPOINT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);
    let (panel_area, curve_area) = controls_and_stage(screen.content, 35);

    let probability = state.classifier.probability();
    let decision = state.classifier.decision();
    let decision_color = match decision {
        CreditDecision::Approved => Color::Green,
        CreditDecision::Denied => Color::Red,
    };

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(4)])
        .split(panel_area);

    let score_ratio = (state.classifier.score - 300.0) / 550.0;
    let score = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Credit Score: {:.0} ", state.classifier.score)),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(score_ratio.clamp(0.0, 1.0));
    frame.render_widget(score, panel[0]);

    let prob = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Approval Probability: {:.1}% ", probability * 100.0)),
        )
        .gauge_style(Style::default().fg(decision_color))
        .ratio(probability);
    frame.render_widget(prob, panel[1]);

    let verdict = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            decision.label(),
            Style::default()
                .fg(decision_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("decision boundary at score {:.0}", APPROVAL_MIDPOINT),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(decision_color)),
    );
    frame.render_widget(verdict, panel[2]);

    let current_score = state.classifier.score;
    let curve = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Sigmoid Curve "),
        )
        .marker(Marker::Braille)
        .x_bounds([300.0, 850.0])
        .y_bounds([0.0, 1.0])
        .paint(move |ctx| {
            // The curve itself, sampled every 5 score points
            let mut prev = (300.0, approval_probability(300.0));
            let mut s = 305.0;
            while s <= 850.0 {
                let p = approval_probability(s);
                ctx.draw(&CanvasLine {
                    x1: prev.0,
                    y1: prev.1,
                    x2: s,
                    y2: p,
                    color: Color::Magenta,
                });
                prev = (s, p);
                s += 5.0;
            }

            // Threshold line and the current position marker
            ctx.draw(&CanvasLine {
                x1: 300.0,
                y1: 0.5,
                x2: 850.0,
                y2: 0.5,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &[(current_score, approval_probability(current_score))],
                color: Color::White,
            });
        });
    frame.render_widget(curve, curve_area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ ", hint(Color::Cyan)),
        Span::raw("Score -/+ 10  "),
        Span::styled(" r ", hint(Color::Cyan)),
        Span::raw("Reset  "),
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
