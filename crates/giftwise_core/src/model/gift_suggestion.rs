//! Gift suggestion domain model.

use super::person::PersonId;
use super::{require_non_blank, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a gift suggestion row.
pub type GiftSuggestionId = Uuid;

/// Recommended gift item for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftSuggestion {
    pub id: GiftSuggestionId,
    pub person_id: PersonId,
    pub title: String,
    /// What the gift is. Empty string when nothing was provided.
    #[serde(default)]
    pub description: String,
    /// Why it fits this person. Empty string when nothing was provided.
    #[serde(default)]
    pub reason: String,
    pub link: Option<String>,
    pub category: Option<String>,
}

impl GiftSuggestion {
    /// Creates a suggestion with a generated stable ID.
    pub fn new(person_id: PersonId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            title: title.into(),
            description: String::new(),
            reason: String::new(),
            link: None,
            category: None,
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)
    }
}
