//! The single access point for the persisted credential token.
//!
//! Every read and write of the stored token goes through [`Session`] so the
//! guard, the auth pages and the dashboard cannot disagree about where the
//! token lives or what key it is under.

use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "token";

/// Handle to the browser-persisted session credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session;

impl Session {
    /// The stored token, if one is present and non-empty.
    ///
    /// Token presence admits the user to protected views; validity is only
    /// confirmed lazily by the profile fetch.
    #[must_use]
    pub fn token() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }

    /// Persist a freshly issued token.
    pub fn store(token: &str) {
        // Storage can fail when quota is exhausted or storage is disabled;
        // the guard then treats the user as signed out, which is safe.
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    /// Remove the stored token, signing the user out on next guard check.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trip() {
        Session::clear();
        assert_eq!(Session::token(), None);

        Session::store("opaque-token");
        assert_eq!(Session::token(), Some("opaque-token".to_string()));

        Session::clear();
        assert_eq!(Session::token(), None);
    }

    #[wasm_bindgen_test]
    fn test_empty_token_counts_as_absent() {
        Session::store("");
        assert_eq!(Session::token(), None);
        Session::clear();
    }
}
