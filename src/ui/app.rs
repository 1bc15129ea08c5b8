use std::sync::Arc;

use flume::Receiver;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    event::events::Event,
    favorites::{Favorites, JsonFileStore},
    http::{RecipeApi, RecipeService},
    session::Session,
    util::{colors, task::TaskManager},
};

use super::{
    context::AppContext,
    handler::EventHandler,
    tui,
    views::{DetailView, FavoritesView, SearchView},
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub session: Session,
    pub favorites: Favorites,
    pub task_manager: TaskManager,
    pub search_view: SearchView,
    pub favorites_view: FavoritesView,
    pub detail_view: DetailView,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api: Arc<dyn RecipeApi> = Arc::new(RecipeService::new());
        let store = JsonFileStore::default_location()
            .ok_or_else(|| color_eyre::eyre::eyre!("could not resolve a data directory"))?;
        let favorites = Favorites::load(Box::new(store));

        Ok(Self {
            event_rx,
            ctx: AppContext { api, event_tx },
            session: Session::new(),
            favorites,
            task_manager: TaskManager::new(),
            search_view: SearchView::default(),
            favorites_view: FavoritesView::default(),
            detail_view: DetailView::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            if self.has_focus {
                tui.draw(|f| self.render(f))?;
            }
            EventHandler::handle_events(self, &tui).await;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let full = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(1),
            ])
            .split(full);

        self.render_header(frame, chunks[0]);
        self.search_view
            .render_controls(frame, chunks[1], self.session.state());

        if self.session.state().showing_favorites {
            self.favorites_view.render(frame, chunks[2], &self.favorites);
        } else {
            self.search_view
                .render_results(frame, chunks[2], self.session.state(), &self.favorites);
        }

        if let Some(detail) = &self.session.state().selected_detail {
            self.detail_view.render(frame, full, detail);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Line::from(vec![
            Span::styled(
                "TasteFinder",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — what's cooking?", Style::default().fg(colors::NEUTRAL)),
        ]);
        frame.render_widget(Paragraph::new(title), inner);

        let hearts = Line::from(Span::styled(
            format!("♥ {} ", self.favorites.len()),
            Style::default().fg(colors::SECONDARY),
        ));
        frame.render_widget(
            Paragraph::new(hearts).alignment(Alignment::Right),
            inner,
        );
    }
}
