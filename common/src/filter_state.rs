//! The candidate filter model: every search criterion the sidebar can set.

use serde::{Deserialize, Serialize};

use crate::search_const::{
    CURRENT_CTC_RANGE_LPA, EXPECTED_CTC_RANGE_LPA, MAX_EXPERIENCE_YEARS, MIN_EXPERIENCE_YEARS,
    MIN_PASSING_YEAR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillMatchType {
    #[default]
    Any,
    All,
}

/// Full set of search criteria, defaults included.
///
/// Multi-valued fields are plain `Vec`s used as insertion-ordered sets:
/// the sidebar widgets append on select and remove in place on deselect,
/// and the wire payload keeps that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub current_locations: Vec<String>,
    pub min_experience: f64,
    pub max_experience: f64,
    pub experience_level: Vec<String>,
    pub notice_period: Vec<String>,
    pub current_ctc: (f64, f64),
    pub expected_ctc: (f64, f64),
    pub employment_types: Vec<String>,
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    pub skill_match_type: SkillMatchType,
    pub degree: Vec<String>,
    pub specialization: String,
    pub passing_year_range: (u16, u16),
    pub education_gap: Vec<String>,
    pub status: Vec<String>,
    pub company: String,
    pub profile: String,
    pub exclude_duplicates: bool,
    pub exclude_blocked: bool,
    pub verified_only: bool,
}

impl FilterState {
    /// The all-defaults state. The passing-year upper bound tracks the
    /// calendar, so defaults are materialized once per mount rather than
    /// through `Default`.
    pub fn defaults(current_year: u16) -> Self {
        Self {
            current_locations: Vec::new(),
            min_experience: MIN_EXPERIENCE_YEARS,
            max_experience: MAX_EXPERIENCE_YEARS,
            experience_level: Vec::new(),
            notice_period: Vec::new(),
            current_ctc: CURRENT_CTC_RANGE_LPA,
            expected_ctc: EXPECTED_CTC_RANGE_LPA,
            employment_types: Vec::new(),
            primary_skills: Vec::new(),
            secondary_skills: Vec::new(),
            skill_match_type: SkillMatchType::Any,
            degree: Vec::new(),
            specialization: String::new(),
            passing_year_range: (MIN_PASSING_YEAR, current_year),
            education_gap: Vec::new(),
            status: Vec::new(),
            company: String::new(),
            profile: String::new(),
            exclude_duplicates: false,
            exclude_blocked: false,
            verified_only: false,
        }
    }

    /// Single-key mutation contract: widgets never touch fields directly.
    pub fn apply(&mut self, patch: FilterPatch) {
        match patch {
            FilterPatch::CurrentLocations(v) => self.current_locations = v,
            FilterPatch::ExperienceRange(min, max) => {
                self.min_experience = min;
                self.max_experience = max;
            }
            FilterPatch::ExperienceLevel(v) => self.experience_level = v,
            FilterPatch::NoticePeriod(v) => self.notice_period = v,
            FilterPatch::CurrentCtc(min, max) => self.current_ctc = (min, max),
            FilterPatch::ExpectedCtc(min, max) => self.expected_ctc = (min, max),
            FilterPatch::EmploymentTypes(v) => self.employment_types = v,
            FilterPatch::PrimarySkills(v) => self.primary_skills = v,
            FilterPatch::SecondarySkills(v) => self.secondary_skills = v,
            FilterPatch::SkillMatch(v) => self.skill_match_type = v,
            FilterPatch::Degree(v) => self.degree = v,
            FilterPatch::Specialization(v) => self.specialization = v,
            FilterPatch::PassingYearRange(min, max) => self.passing_year_range = (min, max),
            FilterPatch::EducationGap(v) => self.education_gap = v,
            FilterPatch::Status(v) => self.status = v,
            FilterPatch::Company(v) => self.company = v,
            FilterPatch::Profile(v) => self.profile = v,
            FilterPatch::ExcludeDuplicates(v) => self.exclude_duplicates = v,
            FilterPatch::ExcludeBlocked(v) => self.exclude_blocked = v,
            FilterPatch::VerifiedOnly(v) => self.verified_only = v,
        }
    }
}

/// One field's worth of change, emitted by exactly the widget owning that field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPatch {
    CurrentLocations(Vec<String>),
    ExperienceRange(f64, f64),
    ExperienceLevel(Vec<String>),
    NoticePeriod(Vec<String>),
    CurrentCtc(f64, f64),
    ExpectedCtc(f64, f64),
    EmploymentTypes(Vec<String>),
    PrimarySkills(Vec<String>),
    SecondarySkills(Vec<String>),
    SkillMatch(SkillMatchType),
    Degree(Vec<String>),
    Specialization(String),
    PassingYearRange(u16, u16),
    EducationGap(Vec<String>),
    Status(Vec<String>),
    Company(String),
    Profile(String),
    ExcludeDuplicates(bool),
    ExcludeBlocked(bool),
    VerifiedOnly(bool),
}

/// Toggle `value` in an insertion-ordered set: absent values append at the
/// end, present values are removed in place.
pub fn toggle_value(values: &[String], value: &str) -> Vec<String> {
    let mut out: Vec<String> = values.to_vec();
    if let Some(pos) = out.iter().position(|v| v == value) {
        out.remove(pos);
    } else {
        out.push(value.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_touches_only_the_addressed_field() {
        let defaults = FilterState::defaults(2025);
        let mut state = defaults.clone();
        state.apply(FilterPatch::Company("Acme".into()));

        assert_eq!(state.company, "Acme");
        let mut back = state.clone();
        back.company = String::new();
        assert_eq!(back, defaults);
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let v = toggle_value(&[], "Java");
        let v = toggle_value(&v, "React");
        let v = toggle_value(&v, "Go");
        assert_eq!(v, vec!["Java", "React", "Go"]);

        let v = toggle_value(&v, "React");
        assert_eq!(v, vec!["Java", "Go"]);
    }

    #[test]
    fn defaults_track_current_year() {
        let state = FilterState::defaults(2031);
        assert_eq!(state.passing_year_range, (2000, 2031));
    }
}
