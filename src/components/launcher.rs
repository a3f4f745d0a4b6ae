//! Launcher component - trainer selection screen

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::view::Trainer;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Trainer selection list
pub struct LauncherComponent {
    pub selected: usize,
}

impl Default for LauncherComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherComponent {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn selected_trainer(&self) -> Trainer {
        Trainer::all()[self.selected]
    }
}

impl Component for LauncherComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let trainers = Trainer::all();
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1) % trainers.len();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = (self.selected + trainers.len() - 1) % trainers.len();
                None
            }
            KeyCode::Enter => Some(Action::LaunchTrainer(self.selected_trainer())),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 64, 14);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Pick a training module",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, trainer) in Trainer::all().iter().enumerate() {
            let is_selected = i == self.selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            content.push(Line::from(vec![
                Span::styled(format!("  {}", marker), Style::default().fg(Color::Cyan)),
                Span::styled(trainer.title().to_string(), title_style),
            ]));
            content.push(Line::from(Span::styled(
                format!("      {}", trainer.tagline()),
                Style::default().fg(Color::DarkGray),
            )));
            content.push(Line::from(""));
        }

        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Open  "),
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Select  "),
            Span::styled(
                " ? ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help  "),
            Span::styled(
                " q ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" trainer-tui ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
