//! Active-filter chips: the removable affordances shown above the results.
//!
//! Chips are derived from [`FilterState`] on every render, never stored, and
//! share the predicate table with the normalizer so the two can't drift.

use serde::{Deserialize, Serialize};

use crate::filter_fields::{FILTER_FIELDS, descriptor};
use crate::filter_state::FilterState;

/// One active filter rendered as a removable chip. `key` addresses the
/// predicate-table entry, so removal needs nothing but the chip itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilterChip {
    pub key: &'static str,
    pub category: &'static str,
    pub value: String,
}

/// Chips grouped under one category header.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipGroup {
    pub category: &'static str,
    pub chips: Vec<ActiveFilterChip>,
}

/// One chip per active table entry, in table scan order. Paired bounds show
/// as a single chip; multi-selects show one comma-joined chip, not one per
/// value.
pub fn project(state: &FilterState, defaults: &FilterState) -> Vec<ActiveFilterChip> {
    FILTER_FIELDS
        .iter()
        .filter(|field| (field.is_active)(state, defaults))
        .map(|field| ActiveFilterChip {
            key: field.key,
            category: field.category,
            value: (field.chip_value)(state),
        })
        .collect()
}

/// Group chips by category, keeping first-occurrence order of the categories.
pub fn grouped(chips: &[ActiveFilterChip]) -> Vec<ChipGroup> {
    let mut groups: Vec<ChipGroup> = Vec::new();
    for chip in chips {
        match groups.iter_mut().find(|g| g.category == chip.category) {
            Some(group) => group.chips.push(chip.clone()),
            None => groups.push(ChipGroup {
                category: chip.category,
                chips: vec![chip.clone()],
            }),
        }
    }
    groups
}

/// Reset the filter a chip stands for, leaving everything else untouched.
/// Unknown keys are a no-op.
pub fn remove(state: &FilterState, key: &str, defaults: &FilterState) -> FilterState {
    let mut next = state.clone();
    if let Some(field) = descriptor(key) {
        (field.clear)(&mut next, defaults);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_fields::active_filter_count;
    use crate::filter_state::SkillMatchType;

    fn defaults() -> FilterState {
        FilterState::defaults(2025)
    }

    #[test]
    fn default_state_projects_no_chips() {
        let d = defaults();
        assert!(project(&d, &d).is_empty());
    }

    #[test]
    fn skills_and_ctc_scenario() {
        let d = defaults();
        let mut state = d.clone();
        state.primary_skills = vec!["Java".into(), "React".into()];
        state.current_ctc = (5.0, 20.0);

        let chips = project(&state, &d);
        assert_eq!(chips.len(), 2);

        assert_eq!(chips[0].category, "Current CTC");
        assert_eq!(chips[0].value, "₹5-20 LPA");
        assert_eq!(chips[1].category, "Primary Skills");
        assert_eq!(chips[1].value, "Java, React");
    }

    #[test]
    fn experience_pair_collapses_to_one_chip() {
        let d = defaults();
        let mut state = d.clone();
        state.min_experience = 1.5;
        state.max_experience = 10.0;

        let chips = project(&state, &d);
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "experience");
        assert_eq!(chips[0].value, "1.5-10 years");
    }

    #[test]
    fn chip_count_always_matches_badge_count() {
        let d = defaults();
        let mut state = d.clone();
        state.current_locations = vec!["Pune".into(), "Remote".into()];
        state.min_experience = 3.0;
        state.expected_ctc = (10.0, 40.0);
        state.skill_match_type = SkillMatchType::All;
        state.degree = vec!["B.Tech".into()];
        state.specialization = "Computer Science".into();
        state.exclude_blocked = true;

        let chips = project(&state, &d);
        assert_eq!(chips.len(), active_filter_count(&state, &d));
    }

    #[test]
    fn groups_follow_first_occurrence_order() {
        let d = defaults();
        let mut state = d.clone();
        state.degree = vec!["MCA".into()];
        state.education_gap = vec!["No Gap".into()];
        state.current_locations = vec!["Chennai".into()];
        state.exclude_duplicates = true;

        let groups = grouped(&project(&state, &d));
        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Current Location", "Education", "Options"]);
        assert_eq!(groups[1].chips.len(), 2);
    }

    #[test]
    fn remove_resets_exactly_the_addressed_chip() {
        let d = defaults();
        let mut state = d.clone();
        state.status = vec!["INTERESTED".into()];
        state.company = "Initech".into();

        let next = remove(&state, "status", &d);
        assert_eq!(next.status, d.status);
        assert_eq!(next.company, "Initech");

        let keys: Vec<&str> = project(&next, &d).iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["company"]);
    }

    #[test]
    fn remove_round_trip_over_every_chip() {
        let d = defaults();
        let mut state = d.clone();
        state.current_locations = vec!["Mumbai".into()];
        state.min_experience = 2.0;
        state.current_ctc = (5.0, 20.0);
        state.expected_ctc = (8.0, 30.0);
        state.passing_year_range = (2010, 2020);
        state.primary_skills = vec!["Rust".into()];
        state.profile = "Backend".into();
        state.verified_only = true;

        for chip in project(&state, &d) {
            let next = remove(&state, chip.key, &d);
            let remaining = project(&next, &d);
            assert!(remaining.iter().all(|c| c.key != chip.key));
            // every other chip survives untouched
            let expected: Vec<_> = project(&state, &d)
                .into_iter()
                .filter(|c| c.key != chip.key)
                .collect();
            assert_eq!(remaining, expected);
        }
    }

    #[test]
    fn remove_with_unknown_key_is_a_no_op() {
        let d = defaults();
        let mut state = d.clone();
        state.company = "Initech".into();
        assert_eq!(remove(&state, "bogus", &d), state);
    }
}
