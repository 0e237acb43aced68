//! Calendar event domain model.
//!
//! # Responsibility
//! - Define dated occasions linked to a person, with gift-planning status.
//! - Distinguish recurring kinds (projected to a yearly occurrence) from
//!   one-off dates.
//!
//! # Invariants
//! - `title` is non-blank on every write path.
//! - `date` stores the anchor date; recurring kinds reuse its month/day
//!   for every later year.

use super::person::PersonId;
use super::{require_non_blank, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an event row.
pub type EventId = Uuid;

/// Occasion category for a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birthday,
    Anniversary,
    NameDay,
    Other,
}

impl EventKind {
    /// Storage spelling, shared with the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::NameDay => "name_day",
            Self::Other => "other",
        }
    }

    /// Parses the storage spelling back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "birthday" => Some(Self::Birthday),
            "anniversary" => Some(Self::Anniversary),
            "name_day" => Some(Self::NameDay),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Whether the anchor date repeats every year.
    pub fn is_recurring(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Default event title derived from the kind.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
            Self::NameDay => "Name Day",
            Self::Other => "Occasion",
        }
    }
}

/// Gift-planning progress for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planning,
    GiftChosen,
    GiftPurchased,
    GiftGiven,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::GiftChosen => "gift_chosen",
            Self::GiftPurchased => "gift_purchased",
            Self::GiftGiven => "gift_given",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(Self::Planning),
            "gift_chosen" => Some(Self::GiftChosen),
            "gift_purchased" => Some(Self::GiftPurchased),
            "gift_given" => Some(Self::GiftGiven),
            _ => None,
        }
    }
}

/// Dated occasion linked to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub person_id: PersonId,
    pub title: String,
    /// Anchor date. For recurring kinds only month/day matter after the
    /// first year.
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub status: Option<EventStatus>,
}

impl Event {
    /// Creates an event with a generated stable ID and no status yet.
    pub fn new(
        person_id: PersonId,
        title: impl Into<String>,
        date: NaiveDate,
        kind: EventKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            title: title.into(),
            date,
            kind,
            status: None,
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)
    }
}
