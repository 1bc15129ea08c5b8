use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Minimal recipe record returned by search and filter operations. This is
/// also the shape persisted in the favorites slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
}

/// One ingredient/measure pair from the fixed 20-slot layout of a meal
/// record. Only slots with a non-blank ingredient survive parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: String,
    pub measure: String,
}

impl IngredientSlot {
    pub fn label(&self) -> String {
        format!("{} {}", self.measure, self.ingredient)
            .trim()
            .to_string()
    }
}

/// Full recipe record returned by lookup and random operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub video_url: Option<String>,
    pub ingredients: Vec<IngredientSlot>,
}

/// The service wraps every response in `{ "meals": [...] | null }`.
/// `null`, an absent key, and an empty array all mean "nothing found".
#[derive(Debug, Clone, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

impl MealsEnvelope {
    pub fn into_meals(self) -> Vec<RawMeal> {
        self.meals.unwrap_or_default()
    }
}

/// A meal record as the service sends it. Filter responses carry only the
/// first three fields; everything else shows up on lookups. The numbered
/// `strIngredientN`/`strMeasureN` columns land in `extra` and are folded
/// into ordered slots once, here, at parse time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub video_url: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

const INGREDIENT_SLOTS: usize = 20;

impl RawMeal {
    pub fn into_summary(self) -> Result<RecipeSummary, ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApiError::Malformed("meal record without idMeal".into()))?;
        let name = self
            .name
            .ok_or_else(|| ApiError::Malformed("meal record without strMeal".into()))?;

        Ok(RecipeSummary {
            id,
            name,
            thumbnail: self.thumbnail.unwrap_or_default(),
            category: self.category,
        })
    }

    pub fn into_detail(self) -> Result<RecipeDetail, ApiError> {
        let ingredients = self.ingredient_slots();
        let area = self.area.clone();
        let instructions = self.instructions.clone().unwrap_or_default();
        let video_url = self.video_url.clone().filter(|url| !url.is_empty());
        let summary = self.into_summary()?;

        Ok(RecipeDetail {
            id: summary.id,
            name: summary.name,
            thumbnail: summary.thumbnail,
            category: summary.category,
            area,
            instructions,
            video_url,
            ingredients,
        })
    }

    fn ingredient_slots(&self) -> Vec<IngredientSlot> {
        let field = |key: String| {
            self.extra
                .get(&key)
                .and_then(|value| value.as_str())
                .map(str::trim)
                .unwrap_or_default()
        };

        (1..=INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = field(format!("strIngredient{slot}"));
                if ingredient.is_empty() {
                    return None;
                }
                Some(IngredientSlot {
                    ingredient: ingredient.to_string(),
                    measure: field(format!("strMeasure{slot}")).to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MealsEnvelope {
        serde_json::from_str(json).expect("envelope should parse")
    }

    #[test]
    fn null_absent_and_empty_meals_are_equivalent() {
        assert!(parse(r#"{"meals": null}"#).into_meals().is_empty());
        assert!(parse(r#"{}"#).into_meals().is_empty());
        assert!(parse(r#"{"meals": []}"#).into_meals().is_empty());
    }

    #[test]
    fn summary_from_partial_filter_record() {
        let envelope = parse(
            r#"{"meals": [{
                "idMeal": "52940",
                "strMeal": "Brown Stew Chicken",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/sypxpx1515365095.jpg"
            }]}"#,
        );
        let summary = envelope
            .into_meals()
            .remove(0)
            .into_summary()
            .expect("summary should build");

        assert_eq!(summary.id, "52940");
        assert_eq!(summary.name, "Brown Stew Chicken");
        assert!(summary.category.is_none());
    }

    #[test]
    fn summary_requires_id_and_name() {
        let envelope = parse(r#"{"meals": [{"strMealThumb": "x.jpg"}]}"#);
        let err = envelope.into_meals().remove(0).into_summary().unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn detail_folds_numbered_slots_and_skips_blanks() {
        let envelope = parse(
            r#"{"meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "thumb.jpg",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": " water ",
                "strMeasure2": " 1/2 cup ",
                "strIngredient3": "  ",
                "strMeasure3": "1 tbsp",
                "strIngredient4": null,
                "strMeasure4": null,
                "strIngredient5": "stir-fry vegetables",
                "strMeasure5": ""
            }]}"#,
        );
        let detail = envelope
            .into_meals()
            .remove(0)
            .into_detail()
            .expect("detail should build");

        assert_eq!(detail.id, "52772");
        assert_eq!(detail.area.as_deref(), Some("Japanese"));
        assert_eq!(detail.ingredients.len(), 3);
        assert_eq!(detail.ingredients[0].label(), "3/4 cup soy sauce");
        assert_eq!(detail.ingredients[1].label(), "1/2 cup water");
        assert_eq!(detail.ingredients[2].label(), "stir-fry vegetables");
    }

    #[test]
    fn empty_video_url_is_dropped() {
        let envelope = parse(
            r#"{"meals": [{"idMeal": "1", "strMeal": "Toast", "strYoutube": ""}]}"#,
        );
        let detail = envelope.into_meals().remove(0).into_detail().unwrap();
        assert!(detail.video_url.is_none());
        assert!(detail.ingredients.is_empty());
        assert!(detail.instructions.is_empty());
    }
}
