//! Domain model for gift-planning records.
//!
//! # Responsibility
//! - Define the canonical entities tracked per recipient: person, profile,
//!   event, social account, gift suggestion.
//! - Own field-level validation applied before every write path.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID.
//! - Child records always reference an existing `PersonId`.

pub mod event;
pub mod gift_suggestion;
pub mod person;
pub mod profile;
pub mod social_account;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level validation failure shared by all entity `validate()` paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    BlankField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "field `{field}` must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Rejects empty or whitespace-only values for a required field.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
