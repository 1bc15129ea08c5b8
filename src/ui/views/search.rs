use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use crate::{
    event::events::Event,
    favorites::Favorites,
    session::{SearchMode, SessionState},
    ui::components::spinner::Spinner,
    util::colors,
};

use super::truncate_to_width;

/// The fixed category list the service recognizes, passed verbatim as the
/// query term in Category mode.
pub const CATEGORIES: [&str; 10] = [
    "Beef",
    "Chicken",
    "Dessert",
    "Lamb",
    "Pasta",
    "Pork",
    "Seafood",
    "Vegetarian",
    "Breakfast",
    "Side",
];

const MODES: [SearchMode; 4] = [
    SearchMode::Ingredient,
    SearchMode::Name,
    SearchMode::Category,
    SearchMode::Random,
];

pub struct SearchView {
    editing: bool,
    list_state: ListState,
    category_index: usize,
}

impl Default for SearchView {
    fn default() -> Self {
        Self {
            editing: true,
            list_state: ListState::default(),
            category_index: 0,
        }
    }
}

impl SearchView {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn reset_cursor(&mut self) {
        self.list_state.select(None);
    }

    pub fn handle_edit_key(&mut self, key: KeyEvent, current: &str) -> Option<Event> {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                Some(Event::SubmitSearch(None))
            }
            KeyCode::Esc => {
                self.editing = false;
                None
            }
            KeyCode::Backspace => {
                let mut text = current.to_string();
                text.pop();
                Some(Event::SetQueryText(text))
            }
            KeyCode::Char(c) => {
                let mut text = current.to_string();
                text.push(c);
                Some(Event::SetQueryText(text))
            }
            _ => None,
        }
    }

    pub fn handle_browse_key(&mut self, key: KeyEvent, state: &SessionState) -> Option<Event> {
        match state.mode {
            SearchMode::Category => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.category_index =
                        (self.category_index + CATEGORIES.len() - 1) % CATEGORIES.len();
                    self.list_state.select(None);
                    None
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.category_index = (self.category_index + 1) % CATEGORIES.len();
                    self.list_state.select(None);
                    None
                }
                KeyCode::Enter if self.list_state.selected().is_none() => Some(
                    Event::SubmitSearch(Some(CATEGORIES[self.category_index].to_string())),
                ),
                _ => self.handle_results_key(key, state),
            },
            SearchMode::Random => match key.code {
                KeyCode::Enter => Some(Event::SubmitSearch(None)),
                _ => self.handle_results_key(key, state),
            },
            _ => self.handle_results_key(key, state),
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent, state: &SessionState) -> Option<Event> {
        let len = state.results.len();
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
                let recipe = state.results.get(self.list_state.selected()?)?;
                Some(Event::OpenDetail(recipe.id.clone()))
            }
            KeyCode::Char(' ') => {
                let recipe = state.results.get(self.list_state.selected()?)?;
                Some(Event::ToggleFavorite(recipe.clone()))
            }
            _ => None,
        }
    }

    pub fn render_controls(&self, f: &mut Frame, area: Rect, state: &SessionState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        self.render_mode_tabs(f, chunks[0], state);
        self.render_input(f, chunks[1], state);
    }

    fn render_mode_tabs(&self, f: &mut Frame, area: Rect, state: &SessionState) {
        let titles = MODES.iter().map(|m| m.label()).collect::<Vec<_>>();
        let selected = MODES.iter().position(|m| *m == state.mode).unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Search"))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect, state: &SessionState) {
        match state.mode {
            SearchMode::Category => {
                let tabs = Tabs::new(CATEGORIES.to_vec())
                    .block(Block::default().borders(Borders::ALL).title("Categories"))
                    .select(self.category_index)
                    .highlight_style(
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    );
                f.render_widget(tabs, area);
            }
            SearchMode::Random => {
                let hint = Paragraph::new("Press Enter for a surprise recipe")
                    .style(Style::default().fg(colors::ACCENT))
                    .block(Block::default().borders(Borders::ALL).title("Surprise Me"));
                f.render_widget(hint, area);
            }
            _ => {
                let border = if self.editing {
                    Style::default().fg(colors::PRIMARY)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                let placeholder = match state.mode {
                    SearchMode::Ingredient => "chicken, tomato, rice...",
                    _ => "pasta carbonara, chocolate cake...",
                };
                let line = if state.query_text.is_empty() {
                    Line::from(Span::styled(
                        placeholder,
                        Style::default().fg(colors::NEUTRAL),
                    ))
                } else {
                    Line::from(state.query_text.clone())
                };
                let input = Paragraph::new(line).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Query")
                        .border_style(border),
                );
                f.render_widget(input, area);
            }
        }
    }

    pub fn render_results(
        &mut self,
        f: &mut Frame,
        area: Rect,
        state: &SessionState,
        favorites: &Favorites,
    ) {
        if state.is_loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Searching...");
            f.render_widget(spinner, area);
            return;
        }

        if let Some(error) = &state.error_message {
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(ratatui::style::Color::Red))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(message, area);
            return;
        }

        if state.results.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Ready to discover?",
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(
                    "Search by ingredient, browse categories, or let us surprise you!",
                ),
            ])
            .centered()
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let name_width = area.width.saturating_sub(8) as usize;
        let items: Vec<ListItem> = state
            .results
            .iter()
            .map(|recipe| {
                let marker = if favorites.is_favorite(&recipe.id) {
                    Span::styled("♥ ", Style::default().fg(colors::SECONDARY))
                } else {
                    Span::raw("  ")
                };

                let mut spans = vec![marker, Span::raw(truncate_to_width(&recipe.name, name_width))];
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
                    .title(format!("Results ({})", state.results.len())),
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
