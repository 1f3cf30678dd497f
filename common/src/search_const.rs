//! Shared constants for the candidate search subsystem.

/// Quiet period between a criteria change and the search it triggers.
pub const SEARCH_DEBOUNCE_MS: u32 = 100;

/// Hard deadline for one search round trip; expiry counts as a network error.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 25, 50];

pub const MIN_EXPERIENCE_YEARS: f64 = 0.0;
pub const MAX_EXPERIENCE_YEARS: f64 = 30.0;
pub const CURRENT_CTC_RANGE_LPA: (f64, f64) = (0.0, 100.0);
pub const EXPECTED_CTC_RANGE_LPA: (f64, f64) = (0.0, 150.0);
pub const MIN_PASSING_YEAR: u16 = 2000;

/// localStorage key the login flow writes the bearer token under.
pub const AUTH_TOKEN_STORAGE_KEY: &str = "authToken";
/// localStorage key holding the saved-search collection.
pub const SAVED_SEARCHES_STORAGE_KEY: &str = "savedCandidateSearches";

pub const EXPERIENCE_LEVEL_OPTIONS: &[&str] = &[
    "Fresher",
    "Junior",
    "Mid-Level",
    "Senior",
    "Lead",
    "Architect",
];

pub const NOTICE_PERIOD_OPTIONS: &[&str] = &[
    "Immediate",
    "15 Days",
    "30 Days",
    "60 Days",
    "90 Days",
    "Serving Notice",
];

pub const EMPLOYMENT_TYPE_OPTIONS: &[&str] = &[
    "Full Time",
    "Part Time",
    "Contract",
    "Internship",
    "Freelance",
];

pub const DEGREE_OPTIONS: &[&str] = &[
    "B.Tech", "B.E", "B.Sc", "BCA", "M.Tech", "M.Sc", "MCA", "MBA", "Diploma", "PhD",
];

pub const EDUCATION_GAP_OPTIONS: &[&str] = &["No Gap", "1 Year", "2 Years", "3+ Years"];

pub const CANDIDATE_STATUS_OPTIONS: &[&str] = &[
    "NEW",
    "INTERESTED",
    "NOT_INTERESTED",
    "ON_HOLD",
    "INTERVIEW_SCHEDULED",
    "SELECTED",
    "REJECTED",
    "JOINED",
];
