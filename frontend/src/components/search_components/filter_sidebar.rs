//! Left panel of the candidate search page: the filter sidebar.
//!
//! One accordion section per filter group, a badge with the active-filter
//! count, and a clear-all. All mutation goes through the page's `on_patch`
//! callback, one field at a time.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_content_icons::MdFilterList,
        md_navigation_icons::{MdExpandLess, MdExpandMore},
    },
};

use common::filter_fields::active_filter_count;
use common::filter_state::FilterPatch;
use common::search_const::{
    CANDIDATE_STATUS_OPTIONS, CURRENT_CTC_RANGE_LPA, DEGREE_OPTIONS, EDUCATION_GAP_OPTIONS,
    EMPLOYMENT_TYPE_OPTIONS, EXPECTED_CTC_RANGE_LPA, EXPERIENCE_LEVEL_OPTIONS,
    MAX_EXPERIENCE_YEARS, MIN_EXPERIENCE_YEARS, NOTICE_PERIOD_OPTIONS,
};

use crate::components::search_components::filter_widgets::{
    MultiSelectList, RangeDualInput, SkillMatchToggle, TagInput, TextField, ToggleRow,
    YearRangeInput,
};
use crate::pages::advanced_search_page::CandidateSearchControl;

#[derive(Clone, Copy)]
struct SidebarContext {
    expanded_section: Signal<String>,
    set_expanded_section: Callback<String>,
}

fn string_options(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[component]
pub fn FilterSidebar() -> Element {
    let control = use_context::<CandidateSearchControl>();
    let mut expanded_section = use_signal(|| "".to_string());
    // single-open accordion: opening one section closes the others,
    // clicking the open one closes it
    let set_expanded_section = Callback::new(move |section: String| {
        if *expanded_section.peek() == section {
            expanded_section.set(String::new());
        } else {
            expanded_section.set(section);
        }
    });
    use_context_provider(|| SidebarContext {
        expanded_section,
        set_expanded_section,
    });

    let badge_count =
        use_memo(move || active_filter_count(&control.filters.read(), &control.defaults.read()));

    let filters = control.filters;
    let on_patch = control.on_patch;

    rsx! {
        aside {
            id: "x-filter-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 2px;
                width: 300px;
                flex-shrink: 0;
                background-color: white;
                border-right: 1px solid rgba(164, 164, 164, 0.5);
                overflow-y: auto;
                height: 100%;
                box-sizing: border-box;
            ",

            div {
                id: "x-filter-sidebar-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding: 14px 16px;
                    border-bottom: 1px solid rgba(164, 164, 164, 0.5);
                ",
                Icon { icon: MdFilterList, style: "width: 22px; height: 22px; color: #1C212D;" }
                span {
                    style: "font-size: 18px; font-weight: 500; color: #1C212D;",
                    "Filters"
                }
                if badge_count() > 0 {
                    span {
                        id: "x-filter-sidebar-badge",
                        style: "
                            background-color: #4F46E5;
                            color: white;
                            border-radius: 1000px;
                            font-size: 13px;
                            padding: 1px 8px;
                        ",
                        "{badge_count()}"
                    }
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "border: none; background: none; cursor: pointer; color: #1D4ED8; font-size: 14px;",
                    onclick: move |_| (control.on_clear_filters)(()),
                    "Clear all"
                }
            }

            FilterSection {
                title: "Location",
                TagInput {
                    placeholder: "Add a city and press Enter",
                    values: filters.read().current_locations.clone(),
                    onchange: move |v| on_patch(FilterPatch::CurrentLocations(v)),
                }
            }

            FilterSection {
                title: "Experience",
                MultiSelectList {
                    options: string_options(EXPERIENCE_LEVEL_OPTIONS),
                    selected: filters.read().experience_level.clone(),
                    onchange: move |v| on_patch(FilterPatch::ExperienceLevel(v)),
                }
                RangeDualInput {
                    label: "Years of experience",
                    min_value: filters.read().min_experience,
                    max_value: filters.read().max_experience,
                    lower_bound: MIN_EXPERIENCE_YEARS,
                    upper_bound: MAX_EXPERIENCE_YEARS,
                    step: 0.5,
                    onchange: move |(min, max)| on_patch(FilterPatch::ExperienceRange(min, max)),
                }
            }

            FilterSection {
                title: "Notice Period",
                MultiSelectList {
                    options: string_options(NOTICE_PERIOD_OPTIONS),
                    selected: filters.read().notice_period.clone(),
                    onchange: move |v| on_patch(FilterPatch::NoticePeriod(v)),
                }
            }

            FilterSection {
                title: "Compensation",
                RangeDualInput {
                    label: "Current CTC (LPA)",
                    min_value: filters.read().current_ctc.0,
                    max_value: filters.read().current_ctc.1,
                    lower_bound: CURRENT_CTC_RANGE_LPA.0,
                    upper_bound: CURRENT_CTC_RANGE_LPA.1,
                    step: 1.0,
                    onchange: move |(min, max)| on_patch(FilterPatch::CurrentCtc(min, max)),
                }
                RangeDualInput {
                    label: "Expected CTC (LPA)",
                    min_value: filters.read().expected_ctc.0,
                    max_value: filters.read().expected_ctc.1,
                    lower_bound: EXPECTED_CTC_RANGE_LPA.0,
                    upper_bound: EXPECTED_CTC_RANGE_LPA.1,
                    step: 1.0,
                    onchange: move |(min, max)| on_patch(FilterPatch::ExpectedCtc(min, max)),
                }
            }

            FilterSection {
                title: "Employment Type",
                MultiSelectList {
                    options: string_options(EMPLOYMENT_TYPE_OPTIONS),
                    selected: filters.read().employment_types.clone(),
                    onchange: move |v| on_patch(FilterPatch::EmploymentTypes(v)),
                }
            }

            FilterSection {
                title: "Skills",
                TagInput {
                    placeholder: "Primary skill + Enter",
                    values: filters.read().primary_skills.clone(),
                    onchange: move |v| on_patch(FilterPatch::PrimarySkills(v)),
                }
                TagInput {
                    placeholder: "Secondary skill + Enter",
                    values: filters.read().secondary_skills.clone(),
                    onchange: move |v| on_patch(FilterPatch::SecondarySkills(v)),
                }
                SkillMatchToggle {
                    value: filters.read().skill_match_type,
                    onchange: move |v| on_patch(FilterPatch::SkillMatch(v)),
                }
            }

            FilterSection {
                title: "Education",
                MultiSelectList {
                    options: string_options(DEGREE_OPTIONS),
                    selected: filters.read().degree.clone(),
                    onchange: move |v| on_patch(FilterPatch::Degree(v)),
                }
                TextField {
                    label: "Specialization",
                    placeholder: "e.g. Computer Science",
                    value: filters.read().specialization.clone(),
                    onchange: move |v| on_patch(FilterPatch::Specialization(v)),
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    span {
                        style: "font-size: 14px; font-weight: 400; color: rgba(28, 33, 45, 0.7);",
                        "Passing year"
                    }
                    YearRangeInput {
                        min_year: filters.read().passing_year_range.0,
                        max_year: filters.read().passing_year_range.1,
                        onchange: move |(min, max)| on_patch(FilterPatch::PassingYearRange(min, max)),
                    }
                }
                MultiSelectList {
                    options: string_options(EDUCATION_GAP_OPTIONS),
                    selected: filters.read().education_gap.clone(),
                    onchange: move |v| on_patch(FilterPatch::EducationGap(v)),
                }
            }

            FilterSection {
                title: "Company & Profile",
                TextField {
                    label: "Current company",
                    placeholder: "e.g. Initech",
                    value: filters.read().company.clone(),
                    onchange: move |v| on_patch(FilterPatch::Company(v)),
                }
                TextField {
                    label: "Profile",
                    placeholder: "e.g. Backend Engineer",
                    value: filters.read().profile.clone(),
                    onchange: move |v| on_patch(FilterPatch::Profile(v)),
                }
            }

            FilterSection {
                title: "Status",
                MultiSelectList {
                    options: string_options(CANDIDATE_STATUS_OPTIONS),
                    selected: filters.read().status.clone(),
                    onchange: move |v| on_patch(FilterPatch::Status(v)),
                }
            }

            FilterSection {
                title: "Options",
                ToggleRow {
                    label: "Exclude duplicates",
                    checked: filters.read().exclude_duplicates,
                    onchange: move |v| on_patch(FilterPatch::ExcludeDuplicates(v)),
                }
                ToggleRow {
                    label: "Exclude blocked",
                    checked: filters.read().exclude_blocked,
                    onchange: move |v| on_patch(FilterPatch::ExcludeBlocked(v)),
                }
                ToggleRow {
                    label: "Verified only",
                    checked: filters.read().verified_only,
                    onchange: move |v| on_patch(FilterPatch::VerifiedOnly(v)),
                }
            }
        }
    }
}

/// One accordion section. Open state lives in the sidebar, not in filter
/// state: expanding or collapsing never changes the search.
#[component]
fn FilterSection(title: String, children: Element) -> Element {
    let sidebar = use_context::<SidebarContext>();
    let expanded_section = sidebar.expanded_section;
    let header_title = title.clone();
    let is_open = use_memo(move || *expanded_section.read() == header_title);
    let toggle_title = title.clone();

    rsx! {
        section {
            style: "border-bottom: 1px solid rgba(164, 164, 164, 0.3);",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    width: 100%;
                    gap: 8px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 12px 16px;
                    font-size: 15px;
                    font-weight: 500;
                    color: #1C212D;
                ",
                onclick: move |_| (sidebar.set_expanded_section)(toggle_title.clone()),
                "{title}"
                div { style: "flex-grow: 1;" }
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.6);" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.6);" }
                }
            }
            if is_open() {
                div {
                    style: "display: flex; flex-direction: column; gap: 14px; padding: 4px 16px 16px 16px;",
                    {children}
                }
            }
        }
    }
}
