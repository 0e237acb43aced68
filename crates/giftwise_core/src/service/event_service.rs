//! Event use-case service and upcoming-occurrence projection.
//!
//! # Responsibility
//! - Provide event CRUD entry points for core callers.
//! - Project stored events onto the "upcoming horizon": recurring kinds
//!   roll forward to their next yearly occurrence, one-off dates in the
//!   past drop out.
//!
//! # Invariants
//! - Upcoming results are sorted by occurrence date, then stable ID.
//! - Every upcoming entry carries a non-negative day count and a label.

use crate::calendar::{days_until, days_until_label, next_occurrence};
use crate::model::event::{Event, EventId};
use crate::model::person::PersonId;
use crate::repo::event_repo::EventRepository;
use crate::repo::RepoResult;
use chrono::NaiveDate;

/// One event projected onto its next concrete calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    pub event: Event,
    /// Concrete date of the next occurrence (>= today).
    pub occurs_on: NaiveDate,
    /// Days from today to `occurs_on`; 0 means today.
    pub days_until: i64,
    /// Display label: `Today`, `Tomorrow` or `In N days`.
    pub label: String,
}

/// Use-case service wrapper for event operations.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new event through repository persistence.
    pub fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        self.repo.create_event(event)
    }

    /// Updates an existing event by stable ID.
    pub fn update_event(&self, event: &Event) -> RepoResult<()> {
        self.repo.update_event(event)
    }

    /// Gets one event by ID.
    pub fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        self.repo.get_event(id)
    }

    /// Lists all events in chronological anchor-date order.
    pub fn list_events(&self) -> RepoResult<Vec<Event>> {
        self.repo.list_events()
    }

    /// Lists events linked to one person in chronological order.
    pub fn list_events_by_person(&self, person_id: PersonId) -> RepoResult<Vec<Event>> {
        self.repo.list_events_by_person(person_id)
    }

    /// Deletes an event by ID.
    pub fn delete_event(&self, id: EventId) -> RepoResult<()> {
        self.repo.delete_event(id)
    }

    /// Computes the upcoming horizon relative to `today`.
    ///
    /// Recurring events (birthday, anniversary, name day) are projected to
    /// their next occurrence on or after `today`. One-off events keep their
    /// stored date and are skipped once it has passed. Results are sorted
    /// by occurrence date and capped at `limit` when given.
    pub fn upcoming(&self, today: NaiveDate, limit: Option<usize>) -> RepoResult<Vec<UpcomingEvent>> {
        let mut upcoming: Vec<UpcomingEvent> = self
            .repo
            .list_events()?
            .into_iter()
            .filter_map(|event| project_event(event, today))
            .collect();

        upcoming.sort_by(|a, b| {
            a.occurs_on
                .cmp(&b.occurs_on)
                .then_with(|| a.event.id.cmp(&b.event.id))
        });

        if let Some(limit) = limit {
            upcoming.truncate(limit);
        }

        Ok(upcoming)
    }
}

fn project_event(event: Event, today: NaiveDate) -> Option<UpcomingEvent> {
    let occurs_on = if event.kind.is_recurring() {
        next_occurrence(event.date, today)
    } else if event.date >= today {
        event.date
    } else {
        return None;
    };

    let label = days_until_label(occurs_on, today)?;
    Some(UpcomingEvent {
        days_until: days_until(occurs_on, today),
        occurs_on,
        label,
        event,
    })
}
