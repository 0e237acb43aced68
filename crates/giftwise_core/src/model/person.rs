//! Person domain model.
//!
//! # Responsibility
//! - Define the tracked gift recipient record.
//! - Keep the relationship vocabulary closed so UI dropdowns and storage
//!   agree on spellings.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `name` is non-blank on every write path.

use super::{require_non_blank, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tracked person.
pub type PersonId = Uuid;

/// Closed relationship vocabulary surfaced by the add-person flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    SpousePartner,
    Child,
    Parent,
    Sibling,
    Grandparent,
    BestFriend,
    Friend,
    Colleague,
    Manager,
    Client,
}

impl Relationship {
    /// Storage spelling, shared with the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpousePartner => "spouse_partner",
            Self::Child => "child",
            Self::Parent => "parent",
            Self::Sibling => "sibling",
            Self::Grandparent => "grandparent",
            Self::BestFriend => "best_friend",
            Self::Friend => "friend",
            Self::Colleague => "colleague",
            Self::Manager => "manager",
            Self::Client => "client",
        }
    }

    /// Parses the storage spelling back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spouse_partner" => Some(Self::SpousePartner),
            "child" => Some(Self::Child),
            "parent" => Some(Self::Parent),
            "sibling" => Some(Self::Sibling),
            "grandparent" => Some(Self::Grandparent),
            "best_friend" => Some(Self::BestFriend),
            "friend" => Some(Self::Friend),
            "colleague" => Some(Self::Colleague),
            "manager" => Some(Self::Manager),
            "client" => Some(Self::Client),
            _ => None,
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::SpousePartner => "Spouse / Partner",
            Self::Child => "Child",
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Grandparent => "Grandparent",
            Self::BestFriend => "Best Friend",
            Self::Friend => "Friend",
            Self::Colleague => "Colleague / Coworker",
            Self::Manager => "Manager",
            Self::Client => "Client / Customer",
        }
    }
}

/// Tracked gift recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID used for linking child records.
    pub id: PersonId,
    pub name: String,
    /// Anchor date for the recurring birthday occurrence.
    pub birthday: Option<NaiveDate>,
    pub relationship: Option<Relationship>,
    pub avatar_url: Option<String>,
    pub notes: Option<String>,
}

impl Person {
    /// Creates a person with a generated stable ID and no optional data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            birthday: None,
            relationship: None,
            avatar_url: None,
            notes: None,
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("name", &self.name)
    }
}
