//! Social account use-case service.
//!
//! # Responsibility
//! - Turn user-entered profile URLs into normalized platform accounts.
//! - Provide list/deactivate/delete entry points for core callers.
//!
//! # Invariants
//! - Platform keys are stored lowercase.
//! - The username is the first path segment of the profile URL; when the
//!   URL has no path the host-like first segment is used as a fallback.

use crate::model::person::PersonId;
use crate::model::social_account::{SocialAccount, SocialAccountId};
use crate::repo::social_account_repo::SocialAccountRepository;
use crate::repo::RepoResult;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("valid scheme regex"));

/// Use-case service wrapper for social account operations.
pub struct SocialService<R: SocialAccountRepository> {
    repo: R,
}

impl<R: SocialAccountRepository> SocialService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an active account from a raw profile URL.
    ///
    /// The platform key is lowercased and the username extracted from the
    /// URL path. Duplicate `(person, platform)` pairs surface as
    /// `RepoError::AlreadyExists` unchanged.
    pub fn add_account(
        &self,
        person_id: PersonId,
        platform: &str,
        profile_url: &str,
    ) -> RepoResult<SocialAccount> {
        let account = account_from_url(person_id, platform, profile_url);
        self.repo.create_account(&account)?;
        Ok(account)
    }

    /// Active accounts for one person, newest first.
    pub fn list_active_by_person(&self, person_id: PersonId) -> RepoResult<Vec<SocialAccount>> {
        self.repo.list_active_by_person(person_id)
    }

    /// Marks an account inactive without losing history.
    pub fn deactivate_account(&self, id: SocialAccountId) -> RepoResult<()> {
        self.repo.deactivate_account(id)
    }

    /// Removes an account permanently.
    pub fn delete_account(&self, id: SocialAccountId) -> RepoResult<()> {
        self.repo.delete_account(id)
    }
}

/// Builds a normalized, active account from raw wizard input.
pub fn account_from_url(person_id: PersonId, platform: &str, profile_url: &str) -> SocialAccount {
    SocialAccount::new(
        person_id,
        platform.trim().to_lowercase(),
        extract_username(profile_url),
        normalize_profile_url(profile_url),
    )
}

/// Extracts the handle from a profile URL.
///
/// `https://instagram.com/jane.doe/` -> `jane.doe`. Inputs without a path
/// fall back to the first segment after the scheme, so a bare handle passes
/// through unchanged.
pub fn extract_username(url: &str) -> String {
    let stripped = URL_SCHEME_RE.replace(url.trim(), "");
    let mut segments = stripped.split('/').filter(|segment| !segment.is_empty());

    let first = segments.next().unwrap_or_default();
    match segments.next() {
        Some(second) => second.to_string(),
        None => first.to_string(),
    }
}

/// Ensures the stored profile URL carries a scheme.
pub fn normalize_profile_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || URL_SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_username, normalize_profile_url};

    #[test]
    fn username_is_first_path_segment() {
        assert_eq!(extract_username("https://instagram.com/jane.doe"), "jane.doe");
        assert_eq!(extract_username("https://tiktok.com/@jane/videos"), "@jane");
        assert_eq!(extract_username("instagram.com/jane/"), "jane");
    }

    #[test]
    fn username_falls_back_to_bare_handle() {
        assert_eq!(extract_username("jane.doe"), "jane.doe");
        assert_eq!(extract_username("  https://example.com  "), "example.com");
    }

    #[test]
    fn profile_url_gets_https_prefix_when_missing() {
        assert_eq!(
            normalize_profile_url("instagram.com/jane"),
            "https://instagram.com/jane"
        );
        assert_eq!(
            normalize_profile_url("https://instagram.com/jane"),
            "https://instagram.com/jane"
        );
        assert_eq!(normalize_profile_url(""), "");
    }
}
