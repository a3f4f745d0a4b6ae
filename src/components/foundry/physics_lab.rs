//! Physics lab - mould rigidity simulator
//!
//! Pressure and temperature sliders plus the vibration table. The sand pane
//! jitters while the table runs and locks solid when all three conditions
//! hold.

use crate::components::foundry::FoundryComponent;
use crate::components::layout::{controls_and_stage, with_hint_bar};
use crate::model::foundry_sim::{RIGID_PRESSURE_PSI, RIGID_TEMP_MAX_C, RIGID_TEMP_MIN_C};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points, Rectangle},
        Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &FoundryComponent) {
    let screen = with_hint_bar(area);
    let (controls_area, stage_area) = controls_and_stage(screen.content, 35);

    let controls = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(controls_area);

    let pressure = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Atmospheric Pressure: {:.1} PSI ", state.mould.pressure_psi)),
        )
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(state.mould.pressure_psi / 15.0);
    frame.render_widget(pressure, controls[0]);

    let temp_ratio = (state.mould.temperature_c as f64 - 20.0) / 180.0;
    let temperature = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Pattern Temperature: {}°C ", state.mould.temperature_c)),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(temp_ratio.clamp(0.0, 1.0));
    frame.render_widget(temperature, controls[1]);

    let vibe_label = if state.mould.vibration {
        Span::styled(
            "  Vibration Table: ACTIVE",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "  Vibration Table: IDLE",
            Style::default().fg(Color::DarkGray),
        )
    };
    let vibe = Paragraph::new(Line::from(vibe_label))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(vibe, controls[2]);

    let rigid = state.mould.is_rigid();
    let (status_title, status_note, status_color) = if rigid {
        ("MOULD IS RIGID", "Physics lock successful", Color::Green)
    } else {
        ("SAND IS FLUID", "Stabilization failed", Color::Red)
    };
    let status = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            status_title,
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            status_note,
            Style::default().fg(status_color),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "lock window: ≥{} PSI, {}-{}°C, table on",
                RIGID_PRESSURE_PSI, RIGID_TEMP_MIN_C, RIGID_TEMP_MAX_C
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(status_color)),
    );
    frame.render_widget(status, controls[3]);

    draw_flask(frame, stage_area, state, rigid);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ←/→ ", hint(Color::Cyan)),
        Span::raw("Pressure  "),
        Span::styled(" ↑/↓ ", hint(Color::Cyan)),
        Span::raw("Temperature  "),
        Span::styled(" v ", hint(Color::Cyan)),
        Span::raw("Vibration table  "),
        Span::styled(" Esc ", hint(Color::Yellow)),
        Span::raw("Back to map"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hints, screen.hints);
}

fn draw_flask(frame: &mut Frame, area: Rect, state: &FoundryComponent, rigid: bool) {
    // Jitter the sand while the table vibrates
    let jitter = if state.mould.vibration {
        match state.tick % 4 {
            0 => (0.6, -0.6),
            1 => (-0.9, 0.9),
            2 => (0.6, 0.6),
            _ => (0.0, 0.0),
        }
    } else {
        (0.0, 0.0)
    };

    let sand_color = if rigid { Color::Blue } else { Color::DarkGray };
    let title = if rigid { " Solid Locked " } else { " Fluid Phase " };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(sand_color))
                .title(title)
                .title_style(Style::default().fg(sand_color).add_modifier(Modifier::BOLD)),
        )
        .marker(Marker::Dot)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            // Flask walls
            ctx.draw(&Rectangle {
                x: 10.0,
                y: 5.0,
                width: 80.0,
                height: 90.0,
                color: sand_color,
            });

            let coords: Vec<(f64, f64)> = state
                .sand
                .iter()
                .map(|&(x, y)| {
                    (
                        (x * 0.78 + 11.0 + jitter.0).clamp(11.0, 89.0),
                        (y * 0.86 + 6.0 + jitter.1).clamp(6.0, 94.0),
                    )
                })
                .collect();
            ctx.draw(&Points {
                coords: &coords,
                color: sand_color,
            });
        });

    frame.render_widget(canvas, area);
}

fn hint(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
