//! Gift suggestion repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `GiftSuggestion::validate()` before SQL mutations.
//! - Per-person listings order newest-first by `created_at`.

use crate::model::gift_suggestion::{GiftSuggestion, GiftSuggestionId};
use crate::model::person::PersonId;
use crate::repo::{ensure_schema_current, parse_row_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const SUGGESTION_SELECT_SQL: &str = "SELECT
    id,
    person_id,
    title,
    description,
    reason,
    link,
    category
FROM gift_suggestions";

/// Repository interface for gift suggestion CRUD operations.
pub trait GiftSuggestionRepository {
    fn create_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<GiftSuggestionId>;
    fn update_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<()>;
    fn get_suggestion(&self, id: GiftSuggestionId) -> RepoResult<Option<GiftSuggestion>>;
    /// Suggestions for one person, newest first.
    fn list_by_person(&self, person_id: PersonId) -> RepoResult<Vec<GiftSuggestion>>;
    fn delete_suggestion(&self, id: GiftSuggestionId) -> RepoResult<()>;
}

/// SQLite-backed gift suggestion repository.
pub struct SqliteGiftSuggestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGiftSuggestionRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting mismatched schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        Ok(Self { conn })
    }
}

impl GiftSuggestionRepository for SqliteGiftSuggestionRepository<'_> {
    fn create_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<GiftSuggestionId> {
        suggestion.validate()?;

        self.conn.execute(
            "INSERT INTO gift_suggestions (
                id,
                person_id,
                title,
                description,
                reason,
                link,
                category
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                suggestion.id.to_string(),
                suggestion.person_id.to_string(),
                suggestion.title.as_str(),
                suggestion.description.as_str(),
                suggestion.reason.as_str(),
                suggestion.link.as_deref(),
                suggestion.category.as_deref(),
            ],
        )?;

        Ok(suggestion.id)
    }

    fn update_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<()> {
        suggestion.validate()?;

        let changed = self.conn.execute(
            "UPDATE gift_suggestions
             SET
                title = ?1,
                description = ?2,
                reason = ?3,
                link = ?4,
                category = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?6;",
            params![
                suggestion.title.as_str(),
                suggestion.description.as_str(),
                suggestion.reason.as_str(),
                suggestion.link.as_deref(),
                suggestion.category.as_deref(),
                suggestion.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(suggestion.id));
        }

        Ok(())
    }

    fn get_suggestion(&self, id: GiftSuggestionId) -> RepoResult<Option<GiftSuggestion>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUGGESTION_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_suggestion_row(row)?));
        }

        Ok(None)
    }

    fn list_by_person(&self, person_id: PersonId) -> RepoResult<Vec<GiftSuggestion>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SUGGESTION_SELECT_SQL}
             WHERE person_id = ?1
             ORDER BY created_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![person_id.to_string()])?;
        let mut suggestions = Vec::new();
        while let Some(row) = rows.next()? {
            suggestions.push(parse_suggestion_row(row)?);
        }

        Ok(suggestions)
    }

    fn delete_suggestion(&self, id: GiftSuggestionId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM gift_suggestions WHERE id = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_suggestion_row(row: &Row<'_>) -> RepoResult<GiftSuggestion> {
    let id_text: String = row.get("id")?;
    let person_text: String = row.get("person_id")?;

    Ok(GiftSuggestion {
        id: parse_row_uuid(&id_text, "gift_suggestions.id")?,
        person_id: parse_row_uuid(&person_text, "gift_suggestions.person_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        reason: row.get("reason")?,
        link: row.get("link")?,
        category: row.get("category")?,
    })
}
