//! Named snapshots of a search (query text + full filter state).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter_state::FilterState;

/// One saved search. Loading it replaces the live query string and filter
/// state wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub query: String,
    pub filters: FilterState,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}

/// Favorites first, then newest first within each half.
pub fn sort_for_display(searches: &mut [SavedSearch]) {
    searches.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then(b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved(name: &str, favorite: bool, ts: i64) -> SavedSearch {
        SavedSearch {
            id: format!("{ts}-1"),
            name: name.to_string(),
            query: String::new(),
            filters: FilterState::defaults(2025),
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
            is_favorite: favorite,
        }
    }

    #[test]
    fn favorites_sort_before_newer_entries() {
        let mut list = vec![
            saved("old", false, 100),
            saved("new", false, 300),
            saved("starred", true, 200),
        ];
        sort_for_display(&mut list);
        let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["starred", "new", "old"]);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut filters = FilterState::defaults(2025);
        filters.primary_skills = vec!["Rust".into()];
        let original = SavedSearch {
            id: "1700000000000-1".into(),
            name: "Rust folks".into(),
            query: "systems".into(),
            filters,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            is_favorite: true,
        };

        let json = serde_json::to_string(&original).unwrap();
        let parsed: SavedSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
