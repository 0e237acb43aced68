//! Onboarding wizard: draft accumulation and atomic submission.
//!
//! # Responsibility
//! - Accumulate add-person form state across the wizard screens.
//! - Turn one finished draft into the dependent insert sequence:
//!   person -> profile -> events -> social accounts.
//!
//! # Invariants
//! - `submit_onboarding` runs the whole sequence in a single transaction;
//!   any failure leaves no partial person behind.
//! - A draft without a name never reaches storage.
//! - The profile row is only created when at least one interest survives
//!   normalization.

use crate::model::event::{Event, EventKind};
use crate::model::person::{Person, PersonId, Relationship};
use crate::model::profile::Profile;
use crate::repo::event_repo::{EventRepository, SqliteEventRepository};
use crate::repo::person_repo::{PersonRepository, SqlitePersonRepository};
use crate::repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
use crate::repo::social_account_repo::{
    SocialAccountRepository, SqliteSocialAccountRepository,
};
use crate::repo::RepoError;
use crate::service::profile_service::normalize_tags;
use crate::service::social_service::account_from_url;
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One dated milestone captured on the calendar screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneInput {
    pub kind: EventKind,
    pub date: NaiveDate,
}

/// One social link captured on the inspiration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAccountInput {
    pub platform: String,
    pub url: String,
}

/// In-memory draft accumulated across the wizard screens.
///
/// Screens mutate their slice of the draft directly; [`OnboardingDraft::reset`]
/// returns to the blank state when the flow is abandoned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub name: String,
    pub relationship: Option<Relationship>,
    pub birthday: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub milestones: Vec<MilestoneInput>,
    pub social_accounts: Vec<SocialAccountInput>,
}

impl OnboardingDraft {
    /// Clears all accumulated screen state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks submit preconditions without touching storage.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        if self.name.trim().is_empty() {
            return Err(OnboardingError::MissingName);
        }
        Ok(())
    }
}

/// Counts reported back to the success screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingOutcome {
    pub person_id: PersonId,
    pub profile_created: bool,
    pub events_created: usize,
    pub accounts_created: usize,
}

/// Submission failure for the wizard flow.
#[derive(Debug)]
pub enum OnboardingError {
    /// The draft never captured a person name.
    MissingName,
    /// Persistence-layer failure; the transaction was rolled back.
    Repo(RepoError),
}

impl Display for OnboardingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "cannot submit onboarding without a name"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OnboardingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingName => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for OnboardingError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for OnboardingError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(RepoError::from(value))
    }
}

/// Persists one finished draft as a person with profile, events and social
/// accounts.
///
/// # Contract
/// - Insert order: person, profile (interests non-empty), birthday event
///   (birthday set), one event per milestone, one account per social entry.
/// - The whole sequence commits or rolls back as one transaction.
///
/// # Side effects
/// - Emits `onboarding_submit` logging events with status and counts.
pub fn submit_onboarding(
    conn: &mut Connection,
    draft: &OnboardingDraft,
) -> Result<OnboardingOutcome, OnboardingError> {
    draft.validate()?;
    info!(
        "event=onboarding_submit module=onboarding status=start milestones={} accounts={}",
        draft.milestones.len(),
        draft.social_accounts.len()
    );

    let tx = conn.transaction()?;
    let outcome = match persist_draft(&tx, draft) {
        Ok(outcome) => outcome,
        Err(err) => {
            // Dropping the transaction rolls everything back.
            error!(
                "event=onboarding_submit module=onboarding status=error error={}",
                err
            );
            return Err(err);
        }
    };
    tx.commit()?;

    info!(
        "event=onboarding_submit module=onboarding status=ok person_id={} events={} accounts={}",
        outcome.person_id, outcome.events_created, outcome.accounts_created
    );
    Ok(outcome)
}

fn persist_draft(
    tx: &Connection,
    draft: &OnboardingDraft,
) -> Result<OnboardingOutcome, OnboardingError> {
    let people = SqlitePersonRepository::try_new(tx)?;
    let profiles = SqliteProfileRepository::try_new(tx)?;
    let events = SqliteEventRepository::try_new(tx)?;
    let accounts = SqliteSocialAccountRepository::try_new(tx)?;

    let mut person = Person::new(draft.name.trim());
    person.birthday = draft.birthday;
    person.relationship = draft.relationship;
    let person_id = people.create_person(&person)?;

    let interests = normalize_tags(&draft.interests);
    let profile_created = if interests.is_empty() {
        false
    } else {
        let mut profile = Profile::new(person_id);
        profile.interests = interests;
        profiles.upsert_profile(&profile)?;
        true
    };

    let mut events_created = 0;
    if let Some(birthday) = draft.birthday {
        let title = format!("{}'s Birthday", person.name);
        events.create_event(&Event::new(person_id, title, birthday, EventKind::Birthday))?;
        events_created += 1;
    }

    for milestone in &draft.milestones {
        events.create_event(&Event::new(
            person_id,
            milestone.kind.default_title(),
            milestone.date,
            milestone.kind,
        ))?;
        events_created += 1;
    }

    let mut accounts_created = 0;
    for entry in &draft.social_accounts {
        accounts.create_account(&account_from_url(person_id, &entry.platform, &entry.url))?;
        accounts_created += 1;
    }

    Ok(OnboardingOutcome {
        person_id,
        profile_created,
        events_created,
        accounts_created,
    })
}
