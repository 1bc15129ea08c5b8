pub mod state;

pub use state::{SearchMode, SessionState};

use crate::http::{ApiError, RecipeDetail, RecipeSummary};

/// A request the caller must dispatch over the network. Produced by the
/// `begin_*` transitions; the matching `resolve_*` call carries the token
/// back so superseded responses can be told apart from current ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSpec {
    Search {
        mode: SearchMode,
        query: String,
        token: u64,
    },
    Random {
        token: u64,
    },
    Detail {
        id: String,
        token: u64,
    },
}

impl RequestSpec {
    pub fn token(&self) -> u64 {
        match self {
            RequestSpec::Search { token, .. }
            | RequestSpec::Random { token }
            | RequestSpec::Detail { token, .. } => *token,
        }
    }
}

/// The search/detail state machine. Transitions are synchronous; network
/// calls happen elsewhere and come back through `resolve_*`. Only the
/// resolution carrying the most recently issued token is applied. Older
/// in-flight requests cannot be cancelled, so their results are dropped
/// here instead.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    next_token: u64,
    current_token: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.state.mode = mode;
        self.state.results.clear();
        self.state.error_message = None;
        self.state.showing_favorites = false;
    }

    pub fn set_query_text(&mut self, text: String) {
        self.state.query_text = text;
    }

    /// Submit the current query (or an explicit one, as the category grid
    /// does). Returns `None` when the guard rejects an empty query; Random
    /// mode has no query and routes to `begin_random`.
    pub fn begin_search(&mut self, explicit: Option<&str>) -> Option<RequestSpec> {
        if self.state.mode == SearchMode::Random {
            return Some(self.begin_random());
        }

        let query = explicit.unwrap_or(&self.state.query_text).to_string();
        if query.is_empty() {
            self.state.error_message = Some("Please enter a search term".to_string());
            return None;
        }

        self.state.showing_favorites = false;
        let token = self.dispatch();
        self.state.results.clear();

        Some(RequestSpec::Search {
            mode: self.state.mode,
            query,
            token,
        })
    }

    pub fn begin_random(&mut self) -> RequestSpec {
        self.state.showing_favorites = false;
        RequestSpec::Random {
            token: self.dispatch(),
        }
    }

    pub fn begin_detail(&mut self, id: &str) -> RequestSpec {
        RequestSpec::Detail {
            id: id.to_string(),
            token: self.dispatch(),
        }
    }

    pub fn close_detail(&mut self) {
        self.state.selected_detail = None;
    }

    pub fn toggle_show_favorites(&mut self) {
        self.state.showing_favorites = !self.state.showing_favorites;
    }

    pub fn resolve_search(&mut self, token: u64, outcome: Result<Vec<RecipeSummary>, ApiError>) {
        if !self.settle(token) {
            return;
        }
        match outcome {
            Ok(results) if !results.is_empty() => {
                self.state.results = results;
                self.state.error_message = None;
            }
            Ok(_) | Err(ApiError::NoResults) => {
                self.state.results.clear();
                self.state.error_message =
                    Some("No recipes found. Try a different search!".to_string());
            }
            Err(err) => {
                self.state.results.clear();
                self.state.error_message = Some(format!("Something went wrong: {err}"));
            }
        }
    }

    pub fn resolve_random(&mut self, token: u64, outcome: Result<RecipeDetail, ApiError>) {
        if !self.settle(token) {
            return;
        }
        match outcome {
            Ok(detail) => {
                self.state.selected_detail = Some(detail);
                self.state.error_message = None;
            }
            Err(ApiError::ServiceUnavailable) => {
                self.state.error_message = Some("Could not fetch random recipe.".to_string());
            }
            Err(err) => {
                self.state.error_message = Some(format!("Could not fetch random recipe: {err}"));
            }
        }
    }

    pub fn resolve_detail(&mut self, token: u64, outcome: Result<RecipeDetail, ApiError>) {
        if !self.settle(token) {
            return;
        }
        match outcome {
            Ok(detail) => {
                self.state.selected_detail = Some(detail);
                self.state.error_message = None;
            }
            Err(ApiError::NotFound) => {
                self.state.error_message = Some("Could not load recipe details.".to_string());
            }
            Err(err) => {
                self.state.error_message = Some(format!("Could not load recipe details: {err}"));
            }
        }
    }

    fn dispatch(&mut self) -> u64 {
        self.next_token += 1;
        self.current_token = Some(self.next_token);
        self.state.is_loading = true;
        self.state.error_message = None;
        self.next_token
    }

    /// True when the token belongs to the most recent dispatch. A stale
    /// token leaves the state untouched, `is_loading` included, since the
    /// flag belongs to the newer in-flight request.
    fn settle(&mut self, token: u64) -> bool {
        if self.current_token != Some(token) {
            return false;
        }
        self.current_token = None;
        self.state.is_loading = false;
        true
    }
}
