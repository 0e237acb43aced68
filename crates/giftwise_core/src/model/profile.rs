//! Gift profile attached to a person.
//!
//! # Invariants
//! - At most one profile exists per person; writes upsert on `person_id`.

use super::person::PersonId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a profile row.
pub type ProfileId = Uuid;

/// Interest/likes/gift-hint tags collected for one person.
///
/// The tag lists are free-form strings; empty lists are valid and mean
/// "nothing recorded yet".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub person_id: PersonId,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub gift_hints: Vec<String>,
}

impl Profile {
    /// Creates an empty profile for the given person.
    pub fn new(person_id: PersonId) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            interests: Vec::new(),
            likes: Vec::new(),
            gift_hints: Vec::new(),
        }
    }
}
