//! UT inspection simulator
//!
//! Tune gain and frequency to find the hidden defect spike on the
//! oscilloscope, then call accept or reject.

use crate::components::foundry::FoundryComponent;
use crate::components::layout::{controls_and_stage, with_hint_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Gauge, Paragraph, Wrap,
    },
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let screen = with_hint_bar(area);
    let (controls_area, scope_area) = controls_and_stage(screen.content, 35);

    let controls = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(controls_area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "UT Inspection Simulator",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Sweep the probe. Calibration is key.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Indexed(99))));
    frame.render_widget(intro, controls[0]);

    let gain = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Probe Gain: {} dB ", state.scan.gain_db)),
        )
        .gauge_style(Style::default().fg(Color::Indexed(99)))
        .ratio(state.scan.gain_db as f64 / 100.0);
    frame.render_widget(gain, controls[1]);

    let freq_ratio = (state.scan.frequency_mhz - 2.0) / 8.0;
    let freq = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Frequency: {:.2} MHz ", state.scan.frequency_mhz)),
        )
        .gauge_style(Style::default().fg(Color::Indexed(111)))
        .ratio(freq_ratio.clamp(0.0, 1.0));
    frame.render_widget(freq, controls[2]);

    let verdict_lines = match &state.verdict {
        Some(verdict) => vec![
            Line::from(""),
            Line::from(Span::styled(
                verdict.message(),
                if verdict.is_correct() {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                },
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Awaiting your call, inspector.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };
    let verdict = Paragraph::new(verdict_lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inspection Verdict "),
    );
    frame.render_widget(verdict, controls[3]);

    draw_oscilloscope(frame, scope_area, state);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ ", hint(Color::Cyan)),
        Span::raw("Frequency  "),
        Span::styled(" ↑/↓ ", hint(Color::Cyan)),
        Span::raw("Gain  "),
        Span::styled(" a ", hint(Color::Green)),
        Span::raw("Accept part  "),
        Span::styled(" r ", hint(Color::Red)),
        Span::raw("Reject part  "),
        Span::styled(" Esc ", hint(Color::Yellow)),
        Span::raw("Exit simulation"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn draw_oscilloscope(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let flaw_visible = state.scan.flaw_visible();
    let spike = state.scan.spike_height();

    let status = if flaw_visible {
        " !!! CRITICAL FLAW INDICATION !!! "
    } else {
        " Scanning for sub-surface voids... "
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Indexed(99)))
                .title(" Live Oscilloscope Feed ")
                .title_bottom(Line::from(Span::styled(
                    status,
                    if flaw_visible {
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ))),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, 400.0])
        .y_bounds([0.0, 200.0])
        .paint(|ctx| {
            let trace = Color::Indexed(99);
            // Baseline with the fixed calibration echo near the left edge
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 20.0,
                x2: 80.0,
                y2: 20.0,
                color: trace,
            });
            ctx.draw(&CanvasLine {
                x1: 80.0,
                y1: 20.0,
                x2: 100.0,
                y2: 180.0,
                color: trace,
            });
            ctx.draw(&CanvasLine {
                x1: 100.0,
                y1: 180.0,
                x2: 120.0,
                y2: 20.0,
                color: trace,
            });
            ctx.draw(&CanvasLine {
                x1: 120.0,
                y1: 20.0,
                x2: 400.0,
                y2: 20.0,
                color: trace,
            });

            // Defect echo, visible only when tuned to the flaw frequency
            if flaw_visible {
                ctx.draw(&CanvasLine {
                    x1: 220.0,
                    y1: 20.0,
                    x2: 235.0,
                    y2: 20.0 + spike,
                    color: Color::Red,
                });
                ctx.draw(&CanvasLine {
                    x1: 235.0,
                    y1: 20.0 + spike,
                    x2: 250.0,
                    y2: 20.0,
                    color: Color::Red,
                });
            }
        });

    frame.render_widget(canvas, area);
}

fn hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
