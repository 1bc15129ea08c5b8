pub mod store;

pub use store::{FavoritesStore, JsonFileStore, StoreError};

use tracing::warn;

use crate::http::RecipeSummary;

/// The favorited-recipe set, insertion-ordered and keyed by id. Every
/// mutation writes through to the injected store; a failed write keeps the
/// in-memory set authoritative for the rest of the session.
pub struct Favorites {
    entries: Vec<RecipeSummary>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let entries = store.load();
        Self { entries, store }
    }

    /// Remove the recipe when present, append it otherwise.
    pub fn toggle(&mut self, recipe: RecipeSummary) {
        if let Some(position) = self.entries.iter().position(|fav| fav.id == recipe.id) {
            self.entries.remove(position);
        } else {
            self.entries.push(recipe);
        }
        self.persist();
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    pub fn entries(&self) -> &[RecipeSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.entries) {
            warn!("failed to persist favorites: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn summary(id: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            name: format!("Recipe {id}"),
            thumbnail: String::new(),
            category: None,
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        saves: Arc<Mutex<Vec<Vec<RecipeSummary>>>>,
    }

    impl FavoritesStore for RecordingStore {
        fn load(&self) -> Vec<RecipeSummary> {
            Vec::new()
        }

        fn save(&self, favorites: &[RecipeSummary]) -> Result<(), StoreError> {
            self.saves.lock().unwrap().push(favorites.to_vec());
            Ok(())
        }
    }

    struct FailingStore;

    impl FavoritesStore for FailingStore {
        fn load(&self) -> Vec<RecipeSummary> {
            Vec::new()
        }

        fn save(&self, _favorites: &[RecipeSummary]) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    struct SeededStore(Vec<RecipeSummary>);

    impl FavoritesStore for SeededStore {
        fn load(&self) -> Vec<RecipeSummary> {
            self.0.clone()
        }

        fn save(&self, _favorites: &[RecipeSummary]) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn toggle_on_empty_set_adds_then_removes() {
        let mut favorites = Favorites::load(Box::new(RecordingStore::default()));

        favorites.toggle(summary("52772"));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.is_favorite("52772"));

        favorites.toggle(summary("52772"));
        assert!(favorites.is_empty());
        assert!(!favorites.is_favorite("52772"));
    }

    #[test]
    fn double_toggle_restores_the_set_exactly() {
        let seed = vec![summary("1"), summary("2"), summary("3")];
        let mut favorites = Favorites::load(Box::new(SeededStore(seed.clone())));

        favorites.toggle(summary("2"));
        assert_eq!(
            favorites.entries().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );

        favorites.toggle(summary("2"));
        assert_eq!(
            favorites.entries().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3", "2"]
        );

        favorites.toggle(summary("2"));
        favorites.toggle(summary("2"));
        assert_eq!(favorites.len(), 3);
        assert!(favorites.is_favorite("2"));
    }

    #[test]
    fn membership_is_correct_for_unseen_ids() {
        let favorites = Favorites::load(Box::new(SeededStore(vec![summary("1")])));
        assert!(favorites.is_favorite("1"));
        assert!(!favorites.is_favorite("never-seen"));
    }

    #[test]
    fn every_mutation_writes_through() {
        let saves = Arc::new(Mutex::new(Vec::new()));
        let store = RecordingStore {
            saves: saves.clone(),
        };
        let mut favorites = Favorites::load(Box::new(store));

        favorites.toggle(summary("a"));
        favorites.toggle(summary("b"));
        favorites.toggle(summary("a"));

        let saves = saves.lock().unwrap();
        assert_eq!(saves.len(), 3);
        assert_eq!(saves[0].len(), 1);
        assert_eq!(saves[1].len(), 2);
        assert_eq!(
            saves[2].iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn failed_write_does_not_roll_back_memory() {
        let mut favorites = Favorites::load(Box::new(FailingStore));
        favorites.toggle(summary("52772"));

        assert!(favorites.is_favorite("52772"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut favorites = Favorites::load(Box::new(RecordingStore::default()));
        for id in ["9", "3", "7"] {
            favorites.toggle(summary(id));
        }
        assert_eq!(
            favorites.entries().iter().map(|f| f.id.as_str()).collect::<Vec<_>>(),
            vec!["9", "3", "7"]
        );
    }
}
