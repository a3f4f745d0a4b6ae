//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseOverlay),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Clear the area
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        // Render scrollbar if content exceeds visible area
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Helper to add a section header
    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    // Helper to add a shortcut line
    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Everywhere");
    add_shortcut(&mut lines, "Esc", "Back one view / return to the launcher");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit (from a top-level view)");

    add_section(&mut lines, "Launcher");
    add_shortcut(&mut lines, "j/k / ↑↓", "Select trainer");
    add_shortcut(&mut lines, "Enter", "Open trainer");

    add_section(&mut lines, "Foundry: Process Map");
    add_shortcut(&mut lines, "j/k / ↑↓", "Select process step");
    add_shortcut(&mut lines, "Enter", "Open step detail + quality checklist");
    add_shortcut(&mut lines, "t", "QC toolkit");
    add_shortcut(&mut lines, "p", "Physics lab");
    add_shortcut(&mut lines, "a", "AI assistant");

    add_section(&mut lines, "Foundry: Step Detail");
    add_shortcut(&mut lines, "h/l / ←→", "Previous / next step");
    add_shortcut(&mut lines, "g", "Regenerate the reference visual");

    add_section(&mut lines, "Foundry: QC Toolkit");
    add_shortcut(&mut lines, "j/k", "Select tool");
    add_shortcut(&mut lines, "Enter", "Open operational manual");
    add_shortcut(&mut lines, "s", "Start UT simulation");

    add_section(&mut lines, "Foundry: UT Simulator");
    add_shortcut(&mut lines, "←/→", "Probe frequency -/+ 0.25 MHz");
    add_shortcut(&mut lines, "↑/↓", "Probe gain +/- 5 dB");
    add_shortcut(&mut lines, "a / r", "Accept / reject the part");

    add_section(&mut lines, "Foundry: Physics Lab");
    add_shortcut(&mut lines, "←/→", "Vacuum pressure -/+ 0.5 PSI");
    add_shortcut(&mut lines, "↑/↓", "Pattern temperature +/- 5°C");
    add_shortcut(&mut lines, "v", "Toggle vibration table");

    add_section(&mut lines, "Foundry: Assistant");
    add_shortcut(&mut lines, "Enter", "Send question");
    add_shortcut(&mut lines, "Ctrl+s", "Speak the last reply aloud");
    add_shortcut(&mut lines, "Ctrl+r", "Voice input (if configured)");

    add_section(&mut lines, "ML: Overview");
    add_shortcut(&mut lines, "j/k", "Select algorithm card");
    add_shortcut(&mut lines, "Enter", "Open interactive widget");
    add_shortcut(&mut lines, "/", "Ask the advisor for a recommendation");

    add_section(&mut lines, "ML: Widgets");
    add_shortcut(&mut lines, "←/→ ↑/↓", "Adjust sliders / move the cursor");
    add_shortcut(&mut lines, "Space", "Place point / toggle cart item");
    add_shortcut(&mut lines, "y / n", "Answer the decision tree");
    add_shortcut(&mut lines, "r", "Reset the widget");
    add_shortcut(&mut lines, "c", "Clear placed points");

    // Footer
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
