pub mod error;
pub mod model;

use async_trait::async_trait;

pub use error::ApiError;
pub use model::{IngredientSlot, MealsEnvelope, RawMeal, RecipeDetail, RecipeSummary};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// The five lookup operations the orchestrator dispatches. Kept behind a
/// trait so the event handler takes a fake in tests.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn search_by_ingredient(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError>;
    async fn search_by_name(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError>;
    async fn search_by_category(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError>;
    async fn fetch_random(&self) -> Result<RecipeDetail, ApiError>;
    async fn fetch_by_id(&self, id: &str) -> Result<RecipeDetail, ApiError>;
}

pub struct RecipeService {
    client: reqwest::Client,
    base_url: String,
}

impl RecipeService {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, for tests or mirrors.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One round trip, no retries. Transport failures become `Network`,
    /// unparsable payloads become `Malformed`, and the `meals: null`
    /// envelope collapses to an empty list.
    async fn fetch_meals(
        &self,
        endpoint: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Vec<RawMeal>, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut request = self.client.get(&url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: MealsEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;

        Ok(envelope.into_meals())
    }
}

impl Default for RecipeService {
    fn default() -> Self {
        Self::new()
    }
}

fn summaries(meals: Vec<RawMeal>) -> Result<Vec<RecipeSummary>, ApiError> {
    if meals.is_empty() {
        return Err(ApiError::NoResults);
    }
    meals.into_iter().map(RawMeal::into_summary).collect()
}

#[async_trait]
impl RecipeApi for RecipeService {
    async fn search_by_ingredient(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError> {
        summaries(self.fetch_meals("filter.php", Some(("i", term))).await?)
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError> {
        summaries(self.fetch_meals("search.php", Some(("s", term))).await?)
    }

    async fn search_by_category(&self, term: &str) -> Result<Vec<RecipeSummary>, ApiError> {
        summaries(self.fetch_meals("filter.php", Some(("c", term))).await?)
    }

    async fn fetch_random(&self) -> Result<RecipeDetail, ApiError> {
        self.fetch_meals("random.php", None)
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::ServiceUnavailable)?
            .into_detail()
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RecipeDetail, ApiError> {
        self.fetch_meals("lookup.php", Some(("i", id)))
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound)?
            .into_detail()
    }
}
