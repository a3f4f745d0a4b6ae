//! Linear-fit widget
//!
//! Drag a line through the fixed point set and watch the mean squared error
//! respond.

use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::components::ml::MlComponent;
use crate::model::ml_sim::{FitRating, FIT_POINTS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);
    let (panel_area, chart_area) = controls_and_stage(screen.content, 35);

    let mse = state.regression.mse();
    let rating = state.regression.rating();
    let rating_color = match rating {
        FitRating::Good => Color::Green,
        FitRating::Fair => Color::Yellow,
        FitRating::Poor => Color::Red,
    };

    let panel = Paragraph::new(vec![
        Line::from(Span::styled(
            "Fit the line to the data",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("slope      ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.1}", state.regression.slope),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled("intercept  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.0}", state.regression.intercept),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("MSE        ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.2}", mse), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            rating.label(),
            Style::default().fg(rating_color).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Linear Regression "),
    );
    frame.render_widget(panel, panel_area);

    let (slope, intercept) = (state.regression.slope, state.regression.intercept);
    let chart = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Hours Studied vs Exam Score "),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 120.0])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &FIT_POINTS,
                color: Color::White,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: intercept,
                x2: 100.0,
                y2: slope * 100.0 + intercept,
                color: Color::Magenta,
            });
        });
    frame.render_widget(chart, chart_area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ ", hint(Color::Cyan)),
        Span::raw("Slope  "),
        Span::styled(" ↑/↓ ", hint(Color::Cyan)),
        Span::raw("Intercept  "),
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
