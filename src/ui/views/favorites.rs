use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{event::events::Event, favorites::Favorites, util::colors};

use super::truncate_to_width;

#[derive(Default)]
pub struct FavoritesView {
    list_state: ListState,
}

impl FavoritesView {
    pub fn handle_key(&mut self, key: KeyEvent, favorites: &Favorites) -> Option<Event> {
        let len = favorites.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if len > 0 => {
                let i = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
                self.list_state.select(Some(i));
                None
            }
            KeyCode::Up | KeyCode::Char('k') if len > 0 => {
                let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
                None
            }
            KeyCode::Enter => {
                let recipe = favorites.entries().get(self.list_state.selected()?)?;
                Some(Event::OpenDetail(recipe.id.clone()))
            }
            KeyCode::Char(' ') => {
                let index = self.list_state.selected()?;
                let recipe = favorites.entries().get(index)?.clone();
                if index + 1 == len {
                    self.list_state.select(index.checked_sub(1));
                }
                Some(Event::ToggleFavorite(recipe))
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, favorites: &Favorites) {
        if favorites.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from("No favorites yet. Start building your collection!"),
            ])
            .centered()
            .style(Style::default().fg(colors::NEUTRAL))
            .block(Block::default().borders(Borders::ALL).title("Your Collection"));
            f.render_widget(empty, area);
            return;
        }

        let name_width = area.width.saturating_sub(8) as usize;
        let items: Vec<ListItem> = favorites
            .entries()
            .iter()
            .map(|recipe| {
                let mut spans = vec![
                    Span::styled("♥ ", Style::default().fg(colors::SECONDARY)),
                    Span::raw(truncate_to_width(&recipe.name, name_width)),
                ];
                if let Some(category) = &recipe.category {
                    spans.push(Span::styled(
                        format!("  [{category}]"),
                        Style::default().fg(colors::ACCENT),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Your Collection ({})", favorites.len())),
            )
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
