//! Profile repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist the one-per-person interest/likes/gift-hint profile.
//! - Keep the tag lists as JSON text columns.
//!
//! # Invariants
//! - `upsert_profile` is keyed on `person_id`; a second write replaces the
//!   tag lists instead of inserting a duplicate row.
//! - Tag lists round-trip through `serde_json` and reject non-array data.

use crate::model::person::PersonId;
use crate::model::profile::Profile;
use crate::repo::{ensure_schema_current, parse_row_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for profile operations.
pub trait ProfileRepository {
    /// Inserts or replaces the profile for `profile.person_id`.
    fn upsert_profile(&self, profile: &Profile) -> RepoResult<Profile>;
    fn get_profile_by_person(&self, person_id: PersonId) -> RepoResult<Option<Profile>>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting mismatched schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        Ok(Self { conn })
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn upsert_profile(&self, profile: &Profile) -> RepoResult<Profile> {
        self.conn.execute(
            "INSERT INTO profiles (id, person_id, interests, likes, gift_hints)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (person_id) DO UPDATE SET
                interests = excluded.interests,
                likes = excluded.likes,
                gift_hints = excluded.gift_hints,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                profile.id.to_string(),
                profile.person_id.to_string(),
                encode_tags(&profile.interests)?,
                encode_tags(&profile.likes)?,
                encode_tags(&profile.gift_hints)?,
            ],
        )?;

        // Read back so the caller sees the surviving row id on conflict.
        self.get_profile_by_person(profile.person_id)?
            .ok_or_else(|| {
                RepoError::InvalidData("profile missing after upsert read-back".to_string())
            })
    }

    fn get_profile_by_person(&self, person_id: PersonId) -> RepoResult<Option<Profile>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, person_id, interests, likes, gift_hints
             FROM profiles
             WHERE person_id = ?1;",
        )?;

        let mut rows = stmt.query(params![person_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_profile_row_named(row, "id", "person_id")?));
        }

        Ok(None)
    }
}

/// Parses a profile out of the joined person+profile row.
///
/// Uses the aliased `profile_*` id columns from the LEFT JOIN query.
pub(crate) fn parse_profile_row(row: &Row<'_>) -> RepoResult<Profile> {
    parse_profile_row_named(row, "profile_id", "profile_person_id")
}

fn parse_profile_row_named(
    row: &Row<'_>,
    id_column: &str,
    person_column: &str,
) -> RepoResult<Profile> {
    let id_text: String = row.get(id_column)?;
    let person_text: String = row.get(person_column)?;

    Ok(Profile {
        id: parse_row_uuid(&id_text, "profiles.id")?,
        person_id: parse_row_uuid(&person_text, "profiles.person_id")?,
        interests: decode_tags(&row.get::<_, String>("interests")?, "profiles.interests")?,
        likes: decode_tags(&row.get::<_, String>("likes")?, "profiles.likes")?,
        gift_hints: decode_tags(&row.get::<_, String>("gift_hints")?, "profiles.gift_hints")?,
    })
}

fn encode_tags(tags: &[String]) -> RepoResult<String> {
    serde_json::to_string(tags)
        .map_err(|err| RepoError::InvalidData(format!("failed to encode tag list: {err}")))
}

fn decode_tags(raw: &str, column: &str) -> RepoResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|_| RepoError::InvalidData(format!("invalid tag list `{raw}` in {column}")))
}
