//! Wire payload for the candidate search endpoint.
//!
//! The backend expects a *sparse* filter object: a field at its default is
//! indistinguishable from "not set" and must be left out entirely.

use serde::{Deserialize, Serialize};

use crate::filter_state::{FilterState, SkillMatchType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    Relevance,
    ExperienceDesc,
    ExperienceAsc,
    RecentlyUpdated,
}

/// Body of `POST /api/search/candidates`. Built fresh per invocation,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub query: String,
    pub filters: SparseFilters,
    pub sort_by: SortBy,
    pub page: u32,
    pub limit: u32,
}

impl SearchQuery {
    /// Trimming happens here for the free-text query only; filter strings go
    /// out exactly as typed.
    pub fn build(
        query_text: &str,
        state: &FilterState,
        defaults: &FilterState,
        sort_by: SortBy,
        page: u32,
        limit: u32,
    ) -> Self {
        Self {
            query: query_text.trim().to_string(),
            filters: SparseFilters::from_state(state, defaults),
            sort_by,
            page,
            limit,
        }
    }
}

/// Only the non-default subset of [`FilterState`], under the backend's field
/// names. `status` travels as `applicationStatus` (backend naming, kept on
/// purpose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SparseFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<Vec<String>>,
    #[serde(rename = "minCurrentCTC", skip_serializing_if = "Option::is_none")]
    pub min_current_ctc: Option<f64>,
    #[serde(rename = "maxCurrentCTC", skip_serializing_if = "Option::is_none")]
    pub max_current_ctc: Option<f64>,
    #[serde(rename = "minExpectedCTC", skip_serializing_if = "Option::is_none")]
    pub min_expected_ctc: Option<f64>,
    #[serde(rename = "maxExpectedCTC", skip_serializing_if = "Option::is_none")]
    pub max_expected_ctc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match_type: Option<SkillMatchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_passing_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passing_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_gap: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_only: Option<bool>,
}

impl SparseFilters {
    pub fn from_state(state: &FilterState, defaults: &FilterState) -> Self {
        let mut out = SparseFilters::default();

        if !state.current_locations.is_empty() {
            out.current_locations = Some(state.current_locations.clone());
        }
        // Asymmetric bound checks, same as the predicate table.
        if state.min_experience > defaults.min_experience {
            out.min_experience = Some(state.min_experience);
        }
        if state.max_experience < defaults.max_experience {
            out.max_experience = Some(state.max_experience);
        }
        if !state.experience_level.is_empty() {
            out.experience_level = Some(state.experience_level.clone());
        }
        if !state.notice_period.is_empty() {
            out.notice_period = Some(state.notice_period.clone());
        }
        // Range pairs ship both bounds as soon as either one moved.
        if state.current_ctc != defaults.current_ctc {
            out.min_current_ctc = Some(state.current_ctc.0);
            out.max_current_ctc = Some(state.current_ctc.1);
        }
        if state.expected_ctc != defaults.expected_ctc {
            out.min_expected_ctc = Some(state.expected_ctc.0);
            out.max_expected_ctc = Some(state.expected_ctc.1);
        }
        if !state.employment_types.is_empty() {
            out.employment_types = Some(state.employment_types.clone());
        }
        if !state.primary_skills.is_empty() {
            out.primary_skills = Some(state.primary_skills.clone());
        }
        if !state.secondary_skills.is_empty() {
            out.secondary_skills = Some(state.secondary_skills.clone());
        }
        if state.skill_match_type != SkillMatchType::Any {
            out.skill_match_type = Some(state.skill_match_type);
        }
        if !state.degree.is_empty() {
            out.degree = Some(state.degree.clone());
        }
        if !state.specialization.is_empty() {
            out.specialization = Some(state.specialization.clone());
        }
        if state.passing_year_range != defaults.passing_year_range {
            out.min_passing_year = Some(state.passing_year_range.0);
            out.max_passing_year = Some(state.passing_year_range.1);
        }
        if !state.education_gap.is_empty() {
            out.education_gap = Some(state.education_gap.clone());
        }
        if !state.status.is_empty() {
            out.application_status = Some(state.status.clone());
        }
        if !state.company.is_empty() {
            out.company = Some(state.company.clone());
        }
        if !state.profile.is_empty() {
            out.profile = Some(state.profile.clone());
        }
        if state.exclude_duplicates {
            out.exclude_duplicates = Some(true);
        }
        if state.exclude_blocked {
            out.exclude_blocked = Some(true);
        }
        if state.verified_only {
            out.verified_only = Some(true);
        }

        out
    }

    /// Number of keys the serialized payload will carry.
    pub fn len(&self) -> usize {
        [
            self.current_locations.is_some(),
            self.min_experience.is_some(),
            self.max_experience.is_some(),
            self.experience_level.is_some(),
            self.notice_period.is_some(),
            self.min_current_ctc.is_some(),
            self.max_current_ctc.is_some(),
            self.min_expected_ctc.is_some(),
            self.max_expected_ctc.is_some(),
            self.employment_types.is_some(),
            self.primary_skills.is_some(),
            self.secondary_skills.is_some(),
            self.skill_match_type.is_some(),
            self.degree.is_some(),
            self.specialization.is_some(),
            self.min_passing_year.is_some(),
            self.max_passing_year.is_some(),
            self.education_gap.is_some(),
            self.application_status.is_some(),
            self.company.is_some(),
            self.profile.is_some(),
            self.exclude_duplicates.is_some(),
            self.exclude_blocked.is_some(),
            self.verified_only.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> FilterState {
        FilterState::defaults(2025)
    }

    #[test]
    fn default_state_normalizes_to_nothing() {
        let d = defaults();
        let sparse = SparseFilters::from_state(&d, &d);
        assert!(sparse.is_empty());

        let json = serde_json::to_value(&sparse).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn skills_and_ctc_scenario() {
        let d = defaults();
        let mut state = d.clone();
        state.primary_skills = vec!["Java".into(), "React".into()];
        state.current_ctc = (5.0, 20.0);

        let sparse = SparseFilters::from_state(&state, &d);
        assert_eq!(sparse.len(), 3);

        let json = serde_json::to_value(&sparse).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "primarySkills": ["Java", "React"],
                "minCurrentCTC": 5.0,
                "maxCurrentCTC": 20.0,
            })
        );
    }

    #[test]
    fn status_is_renamed_for_the_backend() {
        let d = defaults();
        let mut state = d.clone();
        state.status = vec!["INTERESTED".into()];

        let json = serde_json::to_value(SparseFilters::from_state(&state, &d)).unwrap();
        assert_eq!(json, serde_json::json!({"applicationStatus": ["INTERESTED"]}));
    }

    #[test]
    fn experience_bounds_serialize_independently() {
        let d = defaults();
        let mut state = d.clone();
        state.min_experience = 2.5;

        let sparse = SparseFilters::from_state(&state, &d);
        assert_eq!(sparse.min_experience, Some(2.5));
        assert_eq!(sparse.max_experience, None);
        assert_eq!(sparse.len(), 1);
    }

    #[test]
    fn moving_one_ctc_bound_ships_the_pair() {
        let d = defaults();
        let mut state = d.clone();
        state.expected_ctc = (0.0, 45.0);

        let sparse = SparseFilters::from_state(&state, &d);
        assert_eq!(sparse.min_expected_ctc, Some(0.0));
        assert_eq!(sparse.max_expected_ctc, Some(45.0));
        assert_eq!(sparse.len(), 2);
    }

    #[test]
    fn booleans_never_serialize_as_false() {
        let d = defaults();
        let mut state = d.clone();
        state.verified_only = true;

        let json = serde_json::to_value(SparseFilters::from_state(&state, &d)).unwrap();
        assert_eq!(json, serde_json::json!({"verifiedOnly": true}));
    }

    #[test]
    fn skill_match_ships_only_when_all() {
        let d = defaults();
        let mut state = d.clone();
        state.skill_match_type = SkillMatchType::All;

        let json = serde_json::to_value(SparseFilters::from_state(&state, &d)).unwrap();
        assert_eq!(json, serde_json::json!({"skillMatchType": "ALL"}));
    }

    #[test]
    fn query_text_is_trimmed_filters_are_not() {
        let d = defaults();
        let mut state = d.clone();
        state.company = "  Initech ".into();

        let query = SearchQuery::build("  rust dev  ", &state, &d, SortBy::Relevance, 1, 10);
        assert_eq!(query.query, "rust dev");
        assert_eq!(query.filters.company.as_deref(), Some("  Initech "));
    }

    #[test]
    fn payload_field_names_match_the_backend() {
        let d = defaults();
        let query = SearchQuery::build("java", &d, &d, SortBy::ExperienceDesc, 3, 25);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "java",
                "filters": {},
                "sortBy": "EXPERIENCE_DESC",
                "page": 3,
                "limit": 25,
            })
        );
    }
}
