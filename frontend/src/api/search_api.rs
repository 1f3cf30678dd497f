//! Client API calls for the remote candidate search endpoint.

use std::rc::Rc;

use common::search_const::REQUEST_TIMEOUT_MS;
use common::search_query::SearchQuery;
use common::search_result::SearchResultPage;
use futures_util::future::{Either, select};
use futures_util::pin_mut;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::api::credentials::CredentialStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("You are not signed in. Please log in to search candidates.")]
    NoAuthToken,
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    #[error("Search failed (HTTP {0}). Please try again.")]
    SearchFailed(u16),
    #[error("Could not reach the server: {0}")]
    NetworkError(String),
}

impl SearchError {
    /// Auth failures get the blocking alert treatment; everything else is a
    /// dismissible toast.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NoAuthToken | Self::SessionExpired)
    }
}

fn classify_status(status: u16) -> Result<(), SearchError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(SearchError::SessionExpired),
        other => Err(SearchError::SearchFailed(other)),
    }
}

/// Origin of the ATS backend. Same-origin deployment in production; the dev
/// server proxies `/api` there.
pub fn api_base_url() -> String {
    web_sys::window()
        .map(|w| w.location().origin().unwrap_or_default())
        .filter(|origin| !origin.is_empty())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

pub struct SearchApi {
    base_url: String,
    credentials: Rc<dyn CredentialStore>,
    client: reqwest::Client,
}

impl SearchApi {
    pub fn new(base_url: impl Into<String>, credentials: Rc<dyn CredentialStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            client: reqwest::Client::new(),
        }
    }

    /// One search round trip. The token check happens before any network
    /// I/O; the request races a hard timeout and expiry reads as a network
    /// error. No retry on any failure path.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResultPage, SearchError> {
        let token = self
            .credentials
            .bearer_token()
            .ok_or(SearchError::NoAuthToken)?;
        let url = format!("{}/api/search/candidates", self.base_url);

        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(query)
            .send();
        pin_mut!(request);
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(timeout);

        let response = match select(request, timeout).await {
            Either::Left((response, _)) => {
                response.map_err(|e| SearchError::NetworkError(e.to_string()))?
            }
            Either::Right(..) => {
                return Err(SearchError::NetworkError("request timed out".to_string()));
            }
        };

        classify_status(response.status().as_u16())?;
        response
            .json::<SearchResultPage>()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filter_state::FilterState;
    use common::search_query::SortBy;
    use futures_util::FutureExt;

    struct NoToken;
    impl CredentialStore for NoToken {
        fn bearer_token(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn status_classification() {
        assert!(classify_status(200).is_ok());
        assert!(classify_status(204).is_ok());
        assert_eq!(classify_status(401), Err(SearchError::SessionExpired));
        assert_eq!(classify_status(500), Err(SearchError::SearchFailed(500)));
        assert_eq!(classify_status(403), Err(SearchError::SearchFailed(403)));
    }

    #[test]
    fn auth_errors_are_blocking_others_are_not() {
        assert!(SearchError::NoAuthToken.is_auth());
        assert!(SearchError::SessionExpired.is_auth());
        assert!(!SearchError::SearchFailed(500).is_auth());
        assert!(!SearchError::NetworkError("down".into()).is_auth());
    }

    #[test]
    fn missing_token_fails_before_any_network_io() {
        let api = SearchApi::new("http://example.test", Rc::new(NoToken));
        let defaults = FilterState::defaults(2025);
        let query = SearchQuery::build("", &defaults, &defaults, SortBy::Relevance, 1, 10);

        // resolves on the first poll, so no request was ever started
        let outcome = api.search(&query).now_or_never();
        assert_eq!(outcome, Some(Err(SearchError::NoAuthToken)));
    }
}
