//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `people` storage.
//! - Load a person together with the optional joined profile.
//!
//! # Invariants
//! - Write paths call `Person::validate()` before SQL mutations.
//! - List order is `name ASC` to match the people screen.
//! - Deleting a person cascades to profile, events, social accounts and
//!   gift suggestions.

use crate::calendar::{format_date, parse_date};
use crate::model::person::{Person, PersonId, Relationship};
use crate::model::profile::Profile;
use crate::repo::profile_repo::parse_profile_row;
use crate::repo::{ensure_schema_current, parse_row_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    name,
    birthday,
    relationship,
    avatar_url,
    notes
FROM people";

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId>;
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn list_people(&self) -> RepoResult<Vec<Person>>;
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
    /// Loads a person and the optional profile in one query.
    fn get_person_with_profile(&self, id: PersonId) -> RepoResult<Option<(Person, Option<Profile>)>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting mismatched schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        person.validate()?;

        self.conn.execute(
            "INSERT INTO people (id, name, birthday, relationship, avatar_url, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                person.id.to_string(),
                person.name.as_str(),
                person.birthday.map(format_date),
                person.relationship.map(Relationship::as_str),
                person.avatar_url.as_deref(),
                person.notes.as_deref(),
            ],
        )?;

        Ok(person.id)
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        person.validate()?;

        let changed = self.conn.execute(
            "UPDATE people
             SET
                name = ?1,
                birthday = ?2,
                relationship = ?3,
                avatar_url = ?4,
                notes = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?6;",
            params![
                person.name.as_str(),
                person.birthday.map(format_date),
                person.relationship.map(Relationship::as_str),
                person.avatar_url.as_deref(),
                person.notes.as_deref(),
                person.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(person.id));
        }

        Ok(())
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }

        Ok(None)
    }

    fn list_people(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY name ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM people WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_person_with_profile(
        &self,
        id: PersonId,
    ) -> RepoResult<Option<(Person, Option<Profile>)>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                p.id,
                p.name,
                p.birthday,
                p.relationship,
                p.avatar_url,
                p.notes,
                pr.id AS profile_id,
                pr.person_id AS profile_person_id,
                pr.interests,
                pr.likes,
                pr.gift_hints
             FROM people p
             LEFT JOIN profiles pr ON pr.person_id = p.id
             WHERE p.id = ?1;",
        )?;

        let mut rows = stmt.query(params![id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let person = parse_person_row(row)?;
        let profile = match row.get::<_, Option<String>>("profile_id")? {
            Some(_) => Some(parse_profile_row(row)?),
            None => None,
        };

        Ok(Some((person, profile)))
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let id_text: String = row.get("id")?;
    let id = parse_row_uuid(&id_text, "people.id")?;

    let birthday = match row.get::<_, Option<String>>("birthday")? {
        Some(value) => Some(parse_date(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid date value `{value}` in people.birthday"))
        })?),
        None => None,
    };

    let relationship = match row.get::<_, Option<String>>("relationship")? {
        Some(value) => Some(Relationship::parse(&value).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid relationship value `{value}` in people.relationship"
            ))
        })?),
        None => None,
    };

    Ok(Person {
        id,
        name: row.get("name")?,
        birthday,
        relationship,
        avatar_url: row.get("avatar_url")?,
        notes: row.get("notes")?,
    })
}
