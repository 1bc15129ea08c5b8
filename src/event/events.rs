use crate::http::{ApiError, RecipeDetail, RecipeSummary};
use crate::session::SearchMode;

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Commands
    Quit,
    SetMode(SearchMode),
    SetQueryText(String),
    SubmitSearch(Option<String>),
    RequestRandom,
    OpenDetail(String),
    CloseDetail,
    ToggleShowFavorites,
    ToggleFavorite(RecipeSummary),

    // Resolutions from spawned fetch tasks
    SearchResolved {
        token: u64,
        outcome: Result<Vec<RecipeSummary>, ApiError>,
    },
    RandomResolved {
        token: u64,
        outcome: Result<RecipeDetail, ApiError>,
    },
    DetailResolved {
        token: u64,
        outcome: Result<RecipeDetail, ApiError>,
    },
}
