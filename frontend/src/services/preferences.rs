use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use shared::FilterPreferences;
use tracing::{debug, warn};

/// Filter preferences persisted under a single localStorage key
#[derive(Clone, PartialEq)]
pub struct FilterStore {
    key: String,
}

impl FilterStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Missing or unreadable data yields the defaults (everything visible).
    pub fn load(&self) -> FilterPreferences {
        match LocalStorage::get::<FilterPreferences>(&self.key) {
            Ok(prefs) => prefs,
            Err(StorageError::KeyNotFound(_)) => FilterPreferences::default(),
            Err(error) => {
                warn!(key = %self.key, %error, "ignoring unreadable filter preferences");
                FilterPreferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &FilterPreferences) {
        match LocalStorage::set(&self.key, prefs) {
            Ok(()) => debug!(key = %self.key, "filter preferences saved"),
            Err(error) => warn!(key = %self.key, %error, "could not save filter preferences"),
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use shared::{ColumnFilter, RowFilter};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_key_loads_defaults() {
        let store = FilterStore::new("calendarFilterPrefs-test-missing");
        LocalStorage::delete("calendarFilterPrefs-test-missing");
        assert_eq!(store.load(), FilterPreferences::default());
    }

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        let store = FilterStore::new("calendarFilterPrefs-test-save");
        let mut prefs = FilterPreferences::default();
        prefs.set_row_visible(RowFilter::Hiatus, false);
        prefs.set_column_visible(ColumnFilter::Sequence, false);
        store.save(&prefs);

        assert_eq!(store.load(), prefs);
        LocalStorage::delete("calendarFilterPrefs-test-save");
    }

    #[wasm_bindgen_test]
    fn test_garbage_loads_defaults() {
        let key = "calendarFilterPrefs-test-garbage";
        let storage = LocalStorage::raw();
        storage.set_item(key, "not json").unwrap();
        assert_eq!(FilterStore::new(key).load(), FilterPreferences::default());
        LocalStorage::delete(key);
    }
}
