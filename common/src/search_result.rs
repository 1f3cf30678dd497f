use serde::{Deserialize, Serialize};

/// One candidate row as the backend returns it. The shape is owned by the
/// backend: fields we render are pulled out, anything else rides along in
/// `extra` untouched. Missing fields fall back to defaults rather than
/// failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub current_location: String,
    pub total_experience: f64,
    pub current_ctc: f64,
    pub expected_ctc: f64,
    pub notice_period: String,
    pub primary_skills: Vec<String>,
    pub current_company: String,
    pub profile: String,
    pub status: String,
    pub is_verified: bool,
    pub resume_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultPage {
    pub results: Vec<Candidate>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page: u32,
    pub execution_time: Option<u64>,
}

impl SearchResultPage {
    /// What result state collapses to after any failure.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total_count: 0,
            total_pages: 0,
            page: 1,
            execution_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_candidate_fields_pass_through() {
        let raw = serde_json::json!({
            "id": "c-1",
            "name": "Asha",
            "primarySkills": ["Rust"],
            "linkedinUrl": "https://example.com/asha",
        });

        let candidate: Candidate = serde_json::from_value(raw).unwrap();
        assert_eq!(candidate.name, "Asha");
        assert_eq!(candidate.primary_skills, vec!["Rust"]);
        assert_eq!(
            candidate.extra.get("linkedinUrl").and_then(|v| v.as_str()),
            Some("https://example.com/asha")
        );
    }

    #[test]
    fn page_tolerates_missing_execution_time() {
        let raw = serde_json::json!({
            "results": [],
            "totalCount": 0,
            "totalPages": 0,
            "page": 1,
        });
        let page: SearchResultPage = serde_json::from_value(raw).unwrap();
        assert_eq!(page, SearchResultPage::empty());
    }
}
