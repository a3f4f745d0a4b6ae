//! Scripted decision tree widget

use crate::components::layout::with_hint_bar;
use crate::components::ml::MlComponent;
use crate::model::tree::{TreeNode, TreeOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &MlComponent) {
    let screen = with_hint_bar(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "The Loan Officer's Script",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (prompt, answered_yes) in &state.tree.trail {
        lines.push(Line::from(vec![
            Span::styled("  ✔ ", Style::default().fg(Color::DarkGray)),
            Span::styled(*prompt, Style::default().fg(Color::DarkGray)),
            Span::styled(
                if *answered_yes { "  → yes" } else { "  → no" },
                Style::default().fg(Color::Magenta),
            ),
        ]));
    }
    if !state.tree.trail.is_empty() {
        lines.push(Line::from(""));
    }

    match state.tree.current_node() {
        TreeNode::Question { prompt, .. } => {
            lines.push(Line::from(vec![
                Span::styled("  ? ", Style::default().fg(Color::Magenta)),
                Span::styled(
                    *prompt,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  answer with y or n",
                Style::default().fg(Color::DarkGray),
            )));
        }
        TreeNode::Outcome { outcome, text, .. } => {
            let color = match outcome {
                TreeOutcome::Approved => Color::Green,
                TreeOutcome::Denied => Color::Red,
            };
            lines.push(Line::from(Span::styled(
                match outcome {
                    TreeOutcome::Approved => "  ● APPROVED",
                    TreeOutcome::Denied => "  ● DENIED",
                },
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  press r to walk the tree again",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let tree = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Decision Tree ")
            .title_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(tree, screen.content);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" y/n ", hint(Color::Cyan)),
        Span::raw("Answer  "),
        Span::styled(" r ", hint(Color::Cyan)),
        Span::raw("Restart  "),
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
