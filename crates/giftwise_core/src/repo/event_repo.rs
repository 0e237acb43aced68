//! Event repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `events` storage.
//! - Answer the calendar queries: all events, per person, on-or-after a
//!   cutoff date.
//!
//! # Invariants
//! - Write paths call `Event::validate()` before SQL mutations.
//! - List order is `date ASC` so the calendar reads chronologically.
//! - Dates are stored as `YYYY-MM-DD` text, which sorts correctly as text.

use crate::calendar::{format_date, parse_date};
use crate::model::event::{Event, EventId, EventKind, EventStatus};
use crate::model::person::PersonId;
use crate::repo::{ensure_schema_current, parse_row_uuid, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const EVENT_SELECT_SQL: &str = "SELECT
    id,
    person_id,
    title,
    date,
    type,
    status
FROM events";

/// Repository interface for event CRUD and calendar queries.
pub trait EventRepository {
    fn create_event(&self, event: &Event) -> RepoResult<EventId>;
    fn update_event(&self, event: &Event) -> RepoResult<()>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    fn list_events_by_person(&self, person_id: PersonId) -> RepoResult<Vec<Event>>;
    /// Events dated on or after `cutoff`, earliest first, optionally capped.
    fn list_events_on_or_after(
        &self,
        cutoff: NaiveDate,
        limit: Option<u32>,
    ) -> RepoResult<Vec<Event>>;
    fn delete_event(&self, id: EventId) -> RepoResult<()>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting mismatched schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        Ok(Self { conn })
    }

    fn query_events(&self, sql: &str, bind_values: Vec<Value>) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        event.validate()?;

        self.conn.execute(
            "INSERT INTO events (id, person_id, title, date, type, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                event.id.to_string(),
                event.person_id.to_string(),
                event.title.as_str(),
                format_date(event.date),
                event.kind.as_str(),
                event.status.map(EventStatus::as_str),
            ],
        )?;

        Ok(event.id)
    }

    fn update_event(&self, event: &Event) -> RepoResult<()> {
        event.validate()?;

        let changed = self.conn.execute(
            "UPDATE events
             SET
                person_id = ?1,
                title = ?2,
                date = ?3,
                type = ?4,
                status = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?6;",
            params![
                event.person_id.to_string(),
                event.title.as_str(),
                format_date(event.date),
                event.kind.as_str(),
                event.status.map(EventStatus::as_str),
                event.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(event.id));
        }

        Ok(())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }

        Ok(None)
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!("{EVENT_SELECT_SQL} ORDER BY date ASC, id ASC;"),
            Vec::new(),
        )
    }

    fn list_events_by_person(&self, person_id: PersonId) -> RepoResult<Vec<Event>> {
        self.query_events(
            &format!("{EVENT_SELECT_SQL} WHERE person_id = ? ORDER BY date ASC, id ASC;"),
            vec![Value::Text(person_id.to_string())],
        )
    }

    fn list_events_on_or_after(
        &self,
        cutoff: NaiveDate,
        limit: Option<u32>,
    ) -> RepoResult<Vec<Event>> {
        let mut sql = format!("{EVENT_SELECT_SQL} WHERE date >= ? ORDER BY date ASC, id ASC");
        let mut bind_values = vec![Value::Text(format_date(cutoff))];

        if let Some(limit) = limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
        }
        sql.push(';');

        self.query_events(&sql, bind_values)
    }

    fn delete_event(&self, id: EventId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let id_text: String = row.get("id")?;
    let person_text: String = row.get("person_id")?;

    let date_text: String = row.get("date")?;
    let date = parse_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid date value `{date_text}` in events.date"))
    })?;

    let kind_text: String = row.get("type")?;
    let kind = EventKind::parse(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid event type `{kind_text}` in events.type"))
    })?;

    let status = match row.get::<_, Option<String>>("status")? {
        Some(value) => Some(EventStatus::parse(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid event status `{value}` in events.status"))
        })?),
        None => None,
    };

    Ok(Event {
        id: parse_row_uuid(&id_text, "events.id")?,
        person_id: parse_row_uuid(&person_text, "events.person_id")?,
        title: row.get("title")?,
        date,
        kind,
        status,
    })
}
