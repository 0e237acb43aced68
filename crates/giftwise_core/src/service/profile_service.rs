//! Profile use-case service.
//!
//! # Responsibility
//! - Normalize interest/likes/gift-hint tag lists before persistence.
//! - Provide upsert semantics keyed on the person.
//!
//! # Invariants
//! - Tags are trimmed; blank entries are dropped; duplicates are removed
//!   case-insensitively while the first spelling wins.

use crate::model::person::PersonId;
use crate::model::profile::Profile;
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::RepoResult;
use std::collections::HashSet;

/// Use-case service wrapper for profile operations.
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts or replaces the profile for one person.
    ///
    /// All three tag lists are normalized before the write; the returned
    /// profile reflects the surviving row.
    pub fn upsert_profile(&self, profile: &Profile) -> RepoResult<Profile> {
        let normalized = Profile {
            id: profile.id,
            person_id: profile.person_id,
            interests: normalize_tags(&profile.interests),
            likes: normalize_tags(&profile.likes),
            gift_hints: normalize_tags(&profile.gift_hints),
        };
        self.repo.upsert_profile(&normalized)
    }

    /// Gets the profile for one person, if any.
    pub fn get_profile_by_person(&self, person_id: PersonId) -> RepoResult<Option<Profile>> {
        self.repo.get_profile_by_person(person_id)
    }
}

/// Trims tags, drops blanks and removes case-insensitive duplicates while
/// preserving first-seen order and spelling.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            normalized.push(trimmed.to_string());
        }
    }
    normalized
}
