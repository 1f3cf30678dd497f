//! localStorage-backed collection of saved searches.

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use common::filter_state::FilterState;
use common::saved_search::{SavedSearch, sort_for_display};
use common::search_const::SAVED_SEARCHES_STORAGE_KEY;
use web_sys::Storage;

pub struct SavedSearchStore;

impl SavedSearchStore {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .context("no window")?
            .local_storage()
            .map_err(|_| anyhow!("localStorage unavailable"))?
            .context("localStorage unavailable")
    }

    /// Load the collection, favorites first. A missing or corrupt entry
    /// reads as empty rather than erroring.
    pub fn load() -> Vec<SavedSearch> {
        let raw = Self::storage()
            .ok()
            .and_then(|s| s.get_item(SAVED_SEARCHES_STORAGE_KEY).ok().flatten());
        let Some(raw) = raw else {
            return Vec::new();
        };
        let mut list: Vec<SavedSearch> = serde_json::from_str(&raw).unwrap_or_default();
        sort_for_display(&mut list);
        list
    }

    fn persist(list: &[SavedSearch]) -> Result<()> {
        let raw = serde_json::to_string(list)?;
        Self::storage()?
            .set_item(SAVED_SEARCHES_STORAGE_KEY, &raw)
            .map_err(|_| anyhow!("failed to write saved searches"))
    }

    /// Append a snapshot of the current query + filters under `name`.
    pub fn add(name: &str, query: &str, filters: &FilterState) -> Result<SavedSearch> {
        let mut list = Self::load();
        let created_at = Utc::now();
        let entry = SavedSearch {
            id: format!("{}-{}", created_at.timestamp_millis(), list.len() + 1),
            name: name.trim().to_string(),
            query: query.to_string(),
            filters: filters.clone(),
            created_at,
            is_favorite: false,
        };
        list.push(entry.clone());
        Self::persist(&list)?;
        Ok(entry)
    }

    pub fn toggle_favorite(id: &str) -> Result<Vec<SavedSearch>> {
        let mut list = Self::load();
        if let Some(entry) = list.iter_mut().find(|s| s.id == id) {
            entry.is_favorite = !entry.is_favorite;
        }
        Self::persist(&list)?;
        sort_for_display(&mut list);
        Ok(list)
    }

    pub fn delete(id: &str) -> Result<Vec<SavedSearch>> {
        let mut list = Self::load();
        list.retain(|s| s.id != id);
        Self::persist(&list)?;
        Ok(list)
    }
}
