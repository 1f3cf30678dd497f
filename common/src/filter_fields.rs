//! The single predicate table behind the normalizer, the chip bar and the
//! sidebar badge.
//!
//! Each entry answers three questions about one logical filter: is it away
//! from its default, how does it read as a chip, and how is it cleared.
//! Having one table means the badge count, the chip list and the outgoing
//! payload can never disagree about what counts as "active".

use crate::filter_state::{FilterState, SkillMatchType};

/// Descriptor for one logical filter. Paired bounds (experience, CTCs,
/// passing year) are one entry each, addressed by a synthetic key.
pub struct FilterFieldDescriptor {
    pub key: &'static str,
    pub category: &'static str,
    pub is_active: fn(&FilterState, &FilterState) -> bool,
    pub clear: fn(&mut FilterState, &FilterState),
    pub chip_value: fn(&FilterState) -> String,
}

/// Fixed scan order: locations, experience level, experience range, notice
/// period, CTCs, employment type, skills, education fields, company/profile,
/// status, meta booleans. Chip and group ordering both derive from it.
pub const FILTER_FIELDS: &[FilterFieldDescriptor] = &[
    FilterFieldDescriptor {
        key: "currentLocations",
        category: "Current Location",
        is_active: |s, _| !s.current_locations.is_empty(),
        clear: |s, _| s.current_locations.clear(),
        chip_value: |s| s.current_locations.join(", "),
    },
    FilterFieldDescriptor {
        key: "experienceLevel",
        category: "Experience Level",
        is_active: |s, _| !s.experience_level.is_empty(),
        clear: |s, _| s.experience_level.clear(),
        chip_value: |s| s.experience_level.join(", "),
    },
    FilterFieldDescriptor {
        key: "experience",
        category: "Experience",
        // Asymmetric on purpose: min compares against 0, max against 30,
        // so 0-30 is indistinguishable from untouched.
        is_active: |s, d| s.min_experience > d.min_experience || s.max_experience < d.max_experience,
        clear: |s, d| {
            s.min_experience = d.min_experience;
            s.max_experience = d.max_experience;
        },
        chip_value: |s| {
            format!("{}-{} years", fmt_num(s.min_experience), fmt_num(s.max_experience))
        },
    },
    FilterFieldDescriptor {
        key: "noticePeriod",
        category: "Notice Period",
        is_active: |s, _| !s.notice_period.is_empty(),
        clear: |s, _| s.notice_period.clear(),
        chip_value: |s| s.notice_period.join(", "),
    },
    FilterFieldDescriptor {
        key: "currentCTC",
        category: "Current CTC",
        is_active: |s, d| s.current_ctc != d.current_ctc,
        clear: |s, d| s.current_ctc = d.current_ctc,
        chip_value: |s| fmt_lpa(s.current_ctc),
    },
    FilterFieldDescriptor {
        key: "expectedCTC",
        category: "Expected CTC",
        is_active: |s, d| s.expected_ctc != d.expected_ctc,
        clear: |s, d| s.expected_ctc = d.expected_ctc,
        chip_value: |s| fmt_lpa(s.expected_ctc),
    },
    FilterFieldDescriptor {
        key: "employmentTypes",
        category: "Employment Type",
        is_active: |s, _| !s.employment_types.is_empty(),
        clear: |s, _| s.employment_types.clear(),
        chip_value: |s| s.employment_types.join(", "),
    },
    FilterFieldDescriptor {
        key: "primarySkills",
        category: "Primary Skills",
        is_active: |s, _| !s.primary_skills.is_empty(),
        clear: |s, _| s.primary_skills.clear(),
        chip_value: |s| s.primary_skills.join(", "),
    },
    FilterFieldDescriptor {
        key: "secondarySkills",
        category: "Secondary Skills",
        is_active: |s, _| !s.secondary_skills.is_empty(),
        clear: |s, _| s.secondary_skills.clear(),
        chip_value: |s| s.secondary_skills.join(", "),
    },
    FilterFieldDescriptor {
        key: "skillMatchType",
        category: "Skill Matching",
        is_active: |s, _| s.skill_match_type != SkillMatchType::Any,
        clear: |s, _| s.skill_match_type = SkillMatchType::Any,
        chip_value: |_| "All skills must match".to_string(),
    },
    FilterFieldDescriptor {
        key: "degree",
        category: "Education",
        is_active: |s, _| !s.degree.is_empty(),
        clear: |s, _| s.degree.clear(),
        chip_value: |s| s.degree.join(", "),
    },
    FilterFieldDescriptor {
        key: "specialization",
        category: "Education",
        is_active: |s, _| !s.specialization.is_empty(),
        clear: |s, _| s.specialization.clear(),
        chip_value: |s| s.specialization.clone(),
    },
    FilterFieldDescriptor {
        key: "passingYearRange",
        category: "Education",
        is_active: |s, d| s.passing_year_range != d.passing_year_range,
        clear: |s, d| s.passing_year_range = d.passing_year_range,
        chip_value: |s| format!("{}-{}", s.passing_year_range.0, s.passing_year_range.1),
    },
    FilterFieldDescriptor {
        key: "educationGap",
        category: "Education",
        is_active: |s, _| !s.education_gap.is_empty(),
        clear: |s, _| s.education_gap.clear(),
        chip_value: |s| s.education_gap.join(", "),
    },
    FilterFieldDescriptor {
        key: "company",
        category: "Company",
        is_active: |s, _| !s.company.is_empty(),
        clear: |s, _| s.company.clear(),
        chip_value: |s| s.company.clone(),
    },
    FilterFieldDescriptor {
        key: "profile",
        category: "Profile",
        is_active: |s, _| !s.profile.is_empty(),
        clear: |s, _| s.profile.clear(),
        chip_value: |s| s.profile.clone(),
    },
    FilterFieldDescriptor {
        key: "status",
        category: "Status",
        is_active: |s, _| !s.status.is_empty(),
        clear: |s, _| s.status.clear(),
        chip_value: |s| s.status.join(", "),
    },
    FilterFieldDescriptor {
        key: "excludeDuplicates",
        category: "Options",
        is_active: |s, _| s.exclude_duplicates,
        clear: |s, _| s.exclude_duplicates = false,
        chip_value: |_| "Exclude duplicates".to_string(),
    },
    FilterFieldDescriptor {
        key: "excludeBlocked",
        category: "Options",
        is_active: |s, _| s.exclude_blocked,
        clear: |s, _| s.exclude_blocked = false,
        chip_value: |_| "Exclude blocked".to_string(),
    },
    FilterFieldDescriptor {
        key: "verifiedOnly",
        category: "Options",
        is_active: |s, _| s.verified_only,
        clear: |s, _| s.verified_only = false,
        chip_value: |_| "Verified only".to_string(),
    },
];

/// Count of logical filters away from their defaults. This is the sidebar
/// badge, and by construction it equals the chip count.
pub fn active_filter_count(state: &FilterState, defaults: &FilterState) -> usize {
    FILTER_FIELDS
        .iter()
        .filter(|f| (f.is_active)(state, defaults))
        .count()
}

pub fn descriptor(key: &str) -> Option<&'static FilterFieldDescriptor> {
    FILTER_FIELDS.iter().find(|f| f.key == key)
}

/// Whole numbers print bare ("5"), fractional values keep their decimals
/// ("7.5"), matching how the sliders display them.
pub fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn fmt_lpa(range: (f64, f64)) -> String {
    format!("₹{}-{} LPA", fmt_num(range.0), fmt_num(range.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        let defaults = FilterState::defaults(2025);
        assert_eq!(active_filter_count(&defaults, &defaults), 0);
    }

    #[test]
    fn experience_bounds_are_checked_asymmetrically() {
        let defaults = FilterState::defaults(2025);
        let mut state = defaults.clone();

        state.min_experience = 2.0;
        assert_eq!(active_filter_count(&state, &defaults), 1);

        // Back at the exact default bounds the pair reads as untouched.
        state.min_experience = 0.0;
        state.max_experience = 30.0;
        assert_eq!(active_filter_count(&state, &defaults), 0);
    }

    #[test]
    fn number_formatting_drops_trailing_zeroes() {
        assert_eq!(fmt_num(5.0), "5");
        assert_eq!(fmt_num(7.5), "7.5");
    }

    #[test]
    fn every_key_resolves_to_its_descriptor() {
        for field in FILTER_FIELDS {
            assert_eq!(descriptor(field.key).map(|d| d.key), Some(field.key));
        }
        assert!(descriptor("nope").is_none());
    }
}
