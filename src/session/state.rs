use crate::http::{RecipeDetail, RecipeSummary};

/// Everything the rendering layer reads. Mutated only through `Session`
/// transitions on the event loop.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub mode: SearchMode,
    pub query_text: String,
    pub results: Vec<RecipeSummary>,
    pub selected_detail: Option<RecipeDetail>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub showing_favorites: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Ingredient,
    Name,
    Category,
    Random,
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Ingredient => "By Ingredient",
            SearchMode::Name => "By Name",
            SearchMode::Category => "By Category",
            SearchMode::Random => "Surprise Me",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SearchMode::Ingredient => SearchMode::Name,
            SearchMode::Name => SearchMode::Category,
            SearchMode::Category => SearchMode::Random,
            SearchMode::Random => SearchMode::Ingredient,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SearchMode::Ingredient => SearchMode::Random,
            SearchMode::Name => SearchMode::Ingredient,
            SearchMode::Category => SearchMode::Name,
            SearchMode::Random => SearchMode::Category,
        }
    }
}
