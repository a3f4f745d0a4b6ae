//! Click-to-cluster canvas widget
//!
//! Move the cursor, drop a point, and the nearest fixed centroid claims it.

use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::components::ml::MlComponent;
use crate::model::ml_sim::CENTROIDS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

const CLUSTER_COLORS: [Color; 2] = [Color::Cyan, Color::Yellow];

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);
    let (panel_area, canvas_area) = controls_and_stage(screen.content, 30);

    let mut lines = vec![
        Line::from(Span::styled(
            "One-shot assignment",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Each dropped point joins the centroid with the smallest Euclidean distance. \
             The centroids never move.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, centroid) in CENTROIDS.iter().enumerate() {
        let count = state
            .clusters
            .points
            .iter()
            .filter(|p| p.cluster == i)
            .count();
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(CLUSTER_COLORS[i])),
            Span::styled(
                format!("{}: {} points", centroid.name, count),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("cursor ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("({:.0}, {:.0})", state.clusters.cursor_x, state.clusters.cursor_y),
            Style::default().fg(Color::White),
        ),
    ]));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" K-Means Clustering "),
    );
    frame.render_widget(panel, panel_area);

    let cursor = (state.clusters.cursor_x, state.clusters.cursor_y);
    let points = state.clusters.points.clone();
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Feature Space "),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(move |ctx| {
            for (i, centroid) in CENTROIDS.iter().enumerate() {
                ctx.print(
                    centroid.x,
                    centroid.y,
                    Line::from(Span::styled(
                        "◆",
                        Style::default()
                            .fg(CLUSTER_COLORS[i])
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }

            for (i, _) in CENTROIDS.iter().enumerate() {
                let coords: Vec<(f64, f64)> = points
                    .iter()
                    .filter(|p| p.cluster == i)
                    .map(|p| (p.x, p.y))
                    .collect();
                ctx.draw(&Points {
                    coords: &coords,
                    color: CLUSTER_COLORS[i],
                });
            }

            ctx.print(
                cursor.0,
                cursor.1,
                Line::from(Span::styled("+", Style::default().fg(Color::White))),
            );
        });
    frame.render_widget(canvas, canvas_area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←↑↓→ ", hint(Color::Cyan)),
        Span::raw("Move cursor  "),
        Span::styled(" Space ", hint(Color::Cyan)),
        Span::raw("Place point  "),
        Span::styled(" c ", hint(Color::Cyan)),
        Span::raw("Clear  "),
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
