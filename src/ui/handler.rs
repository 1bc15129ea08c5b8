use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    event::events::Event,
    session::{RequestSpec, SearchMode},
};

use super::{
    app::App,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &Tui) {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt);
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt);
        }
    }

    fn handle_terminal_event(app: &mut App, evt: TerminalEvent) {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
        }
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.should_quit = true;
            return;
        }

        // The detail overlay swallows keys while it is open.
        if app.session.state().selected_detail.is_some() {
            if let Some(evt) = app.detail_view.handle_key(key) {
                Self::handle_app_event(app, evt);
            }
            return;
        }

        let state = app.session.state();
        let mode = state.mode;
        let text_mode = matches!(mode, SearchMode::Ingredient | SearchMode::Name);
        let editing = app.search_view.is_editing() && text_mode && !state.showing_favorites;

        if editing {
            let query = state.query_text.clone();
            if let Some(evt) = app.search_view.handle_edit_key(key, &query) {
                Self::handle_app_event(app, evt);
            }
            return;
        }

        let global = match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Tab => Some(Event::SetMode(mode.next())),
            KeyCode::BackTab => Some(Event::SetMode(mode.prev())),
            KeyCode::Char('f') => Some(Event::ToggleShowFavorites),
            KeyCode::Char('r') => Some(Event::RequestRandom),
            _ => None,
        };
        if let Some(evt) = global {
            Self::handle_app_event(app, evt);
            return;
        }

        if key.code == KeyCode::Char('/') && text_mode {
            app.search_view.start_editing();
            return;
        }

        let view_event = if app.session.state().showing_favorites {
            app.favorites_view.handle_key(key, &app.favorites)
        } else {
            app.search_view.handle_browse_key(key, app.session.state())
        };
        if let Some(evt) = view_event {
            Self::handle_app_event(app, evt);
        }
    }

    pub fn handle_app_event(app: &mut App, evt: Event) {
        match evt {
            Event::Quit => app.should_quit = true,
            Event::SetMode(mode) => {
                app.session.set_mode(mode);
                app.search_view.reset_cursor();
            }
            Event::SetQueryText(text) => app.session.set_query_text(text),
            Event::SubmitSearch(explicit) => {
                if let Some(spec) = app.session.begin_search(explicit.as_deref()) {
                    app.search_view.reset_cursor();
                    Self::dispatch(app, spec);
                }
            }
            Event::RequestRandom => {
                let spec = app.session.begin_random();
                Self::dispatch(app, spec);
            }
            Event::OpenDetail(id) => {
                let spec = app.session.begin_detail(&id);
                Self::dispatch(app, spec);
            }
            Event::CloseDetail => app.session.close_detail(),
            Event::ToggleShowFavorites => app.session.toggle_show_favorites(),
            Event::ToggleFavorite(recipe) => app.favorites.toggle(recipe),
            Event::SearchResolved { token, outcome } => app.session.resolve_search(token, outcome),
            Event::RandomResolved { token, outcome } => app.session.resolve_random(token, outcome),
            Event::DetailResolved { token, outcome } => app.session.resolve_detail(token, outcome),
        }
    }

    /// Spawn the network call for a request the session just issued. All
    /// fetches share one task key, so a newer request replaces the previous
    /// in-flight one.
    fn dispatch(app: &mut App, spec: RequestSpec) {
        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();

        match spec {
            RequestSpec::Search { mode, query, token } => {
                app.task_manager.spawn("fetch", async move {
                    let outcome = match mode {
                        SearchMode::Ingredient => api.search_by_ingredient(&query).await,
                        SearchMode::Category => api.search_by_category(&query).await,
                        _ => api.search_by_name(&query).await,
                    };
                    let _ = tx.send(Event::SearchResolved { token, outcome });
                });
            }
            RequestSpec::Random { token } => {
                app.task_manager.spawn("fetch", async move {
                    let outcome = api.fetch_random().await;
                    let _ = tx.send(Event::RandomResolved { token, outcome });
                });
            }
            RequestSpec::Detail { id, token } => {
                app.task_manager.spawn("fetch", async move {
                    let outcome = api.fetch_by_id(&id).await;
                    let _ = tx.send(Event::DetailResolved { token, outcome });
                });
            }
        }
    }
}
