//! Session preferences
//!
//! Last selected category, search query and page, each in its own slot.
//! Missing or corrupt slots read as `None`, `""` and page 1.

use super::{KeyValueStore, read_json_or_default, write_json};
use shared::{CatalogResult, CategoryPath};
use std::sync::Arc;

pub const CATEGORY_KEY: &str = "catalog.category";
pub const SEARCH_KEY: &str = "catalog.search";
pub const PAGE_KEY: &str = "catalog.page";

#[derive(Clone)]
pub struct SessionPrefs {
    store: Arc<dyn KeyValueStore>,
}

impl SessionPrefs {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn selected_category(&self) -> Option<CategoryPath> {
        read_json_or_default::<Option<CategoryPath>>(self.store.as_ref(), CATEGORY_KEY)
            .filter(|path| !path.is_empty())
    }

    /// `None` clears the selection
    pub fn set_selected_category(&self, path: Option<&CategoryPath>) -> CatalogResult<()> {
        match path.filter(|p| !p.is_empty()) {
            Some(path) => write_json(self.store.as_ref(), CATEGORY_KEY, path),
            None => self.store.remove(CATEGORY_KEY),
        }
    }

    pub fn search_query(&self) -> String {
        read_json_or_default(self.store.as_ref(), SEARCH_KEY)
    }

    pub fn set_search_query(&self, query: &str) -> CatalogResult<()> {
        write_json(self.store.as_ref(), SEARCH_KEY, query)
    }

    pub fn page(&self) -> u32 {
        read_json_or_default::<u32>(self.store.as_ref(), PAGE_KEY).max(1)
    }

    pub fn set_page(&self, page: u32) -> CatalogResult<()> {
        write_json(self.store.as_ref(), PAGE_KEY, &page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn prefs() -> (Arc<MemoryStore>, SessionPrefs) {
        let store = Arc::new(MemoryStore::new());
        let prefs = SessionPrefs::new(store.clone());
        (store, prefs)
    }

    #[test]
    fn test_defaults() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.selected_category(), None);
        assert_eq!(prefs.search_query(), "");
        assert_eq!(prefs.page(), 1);
    }

    #[test]
    fn test_roundtrip() {
        let (_, prefs) = prefs();
        let path = CategoryPath::department(10).with(shared::CategoryLevel::Section, 20);
        prefs.set_selected_category(Some(&path)).unwrap();
        prefs.set_search_query("Бетон").unwrap();
        prefs.set_page(4).unwrap();

        assert_eq!(prefs.selected_category(), Some(path));
        assert_eq!(prefs.search_query(), "Бетон");
        assert_eq!(prefs.page(), 4);

        prefs.set_selected_category(None).unwrap();
        assert_eq!(prefs.selected_category(), None);
    }

    #[test]
    fn test_corrupt_slots_fall_back() {
        let (store, prefs) = prefs();
        store.set(CATEGORY_KEY, "{department:").unwrap();
        store.set(SEARCH_KEY, "42").unwrap();
        store.set(PAGE_KEY, "\"three\"").unwrap();

        assert_eq!(prefs.selected_category(), None);
        assert_eq!(prefs.search_query(), "");
        assert_eq!(prefs.page(), 1);

        store.set(PAGE_KEY, "0").unwrap();
        assert_eq!(prefs.page(), 1);
    }
}
