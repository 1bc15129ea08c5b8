use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::warn;

use crate::http::RecipeSummary;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable slot for the favorites set. Injected into the reconciler so
/// tests can swap in a recording or failing fake.
pub trait FavoritesStore: Send {
    /// An absent or unreadable slot is "no data", never an error.
    fn load(&self) -> Vec<RecipeSummary>;
    fn save(&self, favorites: &[RecipeSummary]) -> Result<(), StoreError>;
}

pub const SLOT_FILE: &str = "favorites.json";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform data directory, or `TASTEFINDER_DATA_DIR` when set.
    pub fn default_location() -> Option<Self> {
        if let Ok(dir) = std::env::var("TASTEFINDER_DATA_DIR") {
            return Some(Self::new(Path::new(&dir).join(SLOT_FILE)));
        }
        let dirs = ProjectDirs::from("com", "tastefinder", "tastefinder")?;
        Some(Self::new(dirs.data_dir().join(SLOT_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Vec<RecipeSummary> {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("failed to read favorites slot: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!("discarding unreadable favorites slot: {err}");
                Vec::new()
            }
        }
    }

    fn save(&self, favorites: &[RecipeSummary]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(favorites)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: String::new(),
            category: Some("Seafood".to_string()),
        }
    }

    #[test]
    fn round_trip_preserves_order_and_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(SLOT_FILE));

        let favorites = vec![
            summary("52772", "Teriyaki Chicken Casserole"),
            summary("52940", "Brown Stew Chicken"),
        ];
        store.save(&favorites).unwrap();

        assert_eq!(store.load(), favorites);
    }

    #[test]
    fn missing_slot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(SLOT_FILE));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SLOT_FILE);
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper").join(SLOT_FILE));
        store.save(&[summary("1", "Toast")]).unwrap();
        assert_eq!(store.load().len(), 1);
    }
}
