//! Social account link attached to a person.
//!
//! # Invariants
//! - One account per `(person_id, platform)` pair.
//! - `platform` and `username` are non-blank on every write path.

use super::person::PersonId;
use super::{require_non_blank, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a social account row.
pub type SocialAccountId = Uuid;

/// Platform + handle used for gift inspiration lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: SocialAccountId,
    pub person_id: PersonId,
    /// Lowercase platform key, e.g. `instagram`, `tiktok`, `linkedin`.
    pub platform: String,
    pub username: String,
    pub profile_url: String,
    /// Deactivated accounts are kept for history but hidden from lists.
    pub is_active: bool,
    /// Last inspiration-scan time, epoch milliseconds.
    pub last_checked_at: Option<i64>,
}

impl SocialAccount {
    /// Creates an active account with a generated stable ID.
    pub fn new(
        person_id: PersonId,
        platform: impl Into<String>,
        username: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            platform: platform.into(),
            username: username.into(),
            profile_url: profile_url.into(),
            is_active: true,
            last_checked_at: None,
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("platform", &self.platform)?;
        require_non_blank("username", &self.username)
    }
}
