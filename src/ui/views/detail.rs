use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{event::events::Event, http::RecipeDetail, util::colors};

/// Modal overlay for a single recipe. Scroll state only; the recipe itself
/// lives in the session.
#[derive(Default)]
pub struct DetailView {
    scroll: u16,
}

impl DetailView {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.scroll = 0;
                Some(Event::CloseDetail)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, detail: &RecipeDetail) {
        let area = overlay_rect(area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", detail.name),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Esc to close · j/k to scroll ").right_aligned());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();

        let mut tags = Vec::new();
        if let Some(category) = &detail.category {
            tags.push(Span::styled(
                format!("[{category}] "),
                Style::default().fg(colors::ACCENT),
            ));
        }
        if let Some(area_tag) = &detail.area {
            tags.push(Span::styled(
                format!("[{area_tag}] "),
                Style::default().fg(colors::SECONDARY),
            ));
        }
        if !tags.is_empty() {
            lines.push(Line::from(tags));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Ingredients",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for slot in &detail.ingredients {
            lines.push(Line::from(format!("  • {}", slot.label())));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Instructions",
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        for paragraph in detail.instructions.lines() {
            lines.push(Line::from(paragraph.to_string()));
        }

        if let Some(video) = &detail.video_url {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Video: ", Style::default().fg(colors::SECONDARY)),
                Span::raw(video.clone()),
            ]));
        }

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(body, inner);
    }
}

fn overlay_rect(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical[1]);
    horizontal[1]
}
