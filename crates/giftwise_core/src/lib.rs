//! Core domain logic for Giftwise gift planning.
//! This crate is the single source of truth for business invariants.

pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::{
    days_until, days_until_label, format_date, format_display_date, next_occurrence, parse_date,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventKind, EventStatus};
pub use model::gift_suggestion::{GiftSuggestion, GiftSuggestionId};
pub use model::person::{Person, PersonId, Relationship};
pub use model::profile::{Profile, ProfileId};
pub use model::social_account::{SocialAccount, SocialAccountId};
pub use model::ValidationError;
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::gift_suggestion_repo::{GiftSuggestionRepository, SqliteGiftSuggestionRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use repo::social_account_repo::{SocialAccountRepository, SqliteSocialAccountRepository};
pub use repo::{RepoError, RepoResult};
pub use service::event_service::{EventService, UpcomingEvent};
pub use service::onboarding::{
    submit_onboarding, MilestoneInput, OnboardingDraft, OnboardingError, OnboardingOutcome,
    SocialAccountInput,
};
pub use service::person_service::PersonService;
pub use service::profile_service::ProfileService;
pub use service::social_service::SocialService;
pub use service::suggestion_service::SuggestionService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
