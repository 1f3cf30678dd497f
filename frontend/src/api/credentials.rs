//! Credential access for API calls.
//!
//! The bearer token lives in browser storage, written by the login flow.
//! API clients take a [`CredentialStore`] instead of reading storage
//! directly, so tests can substitute one.

use common::search_const::AUTH_TOKEN_STORAGE_KEY;

pub trait CredentialStore {
    /// Current bearer token, if any.
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token the login flow left in localStorage.
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn bearer_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(AUTH_TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
}
