//! Social account repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist platform links used for gift inspiration.
//! - Keep deactivated accounts on disk but out of active listings.
//!
//! # Invariants
//! - Write paths call `SocialAccount::validate()` before SQL mutations.
//! - A `(person_id, platform)` pair maps to at most one row; duplicates
//!   surface as `RepoError::AlreadyExists`.
//! - Active listings order newest-first by `created_at`.

use crate::model::person::PersonId;
use crate::model::social_account::{SocialAccount, SocialAccountId};
use crate::repo::{bool_to_int, ensure_schema_current, int_to_bool, parse_row_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ACCOUNT_SELECT_SQL: &str = "SELECT
    id,
    person_id,
    platform,
    username,
    profile_url,
    is_active,
    last_checked_at
FROM social_accounts";

/// Repository interface for social account operations.
pub trait SocialAccountRepository {
    fn create_account(&self, account: &SocialAccount) -> RepoResult<SocialAccountId>;
    /// Active accounts for one person, newest first.
    fn list_active_by_person(&self, person_id: PersonId) -> RepoResult<Vec<SocialAccount>>;
    /// Marks an account inactive without losing history.
    fn deactivate_account(&self, id: SocialAccountId) -> RepoResult<()>;
    fn delete_account(&self, id: SocialAccountId) -> RepoResult<()>;
}

/// SQLite-backed social account repository.
pub struct SqliteSocialAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSocialAccountRepository<'conn> {
    /// Wraps a bootstrapped connection, rejecting mismatched schemas.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_current(conn)?;
        Ok(Self { conn })
    }
}

impl SocialAccountRepository for SqliteSocialAccountRepository<'_> {
    fn create_account(&self, account: &SocialAccount) -> RepoResult<SocialAccountId> {
        account.validate()?;

        self.conn
            .execute(
                "INSERT INTO social_accounts (
                    id,
                    person_id,
                    platform,
                    username,
                    profile_url,
                    is_active,
                    last_checked_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    account.id.to_string(),
                    account.person_id.to_string(),
                    account.platform.as_str(),
                    account.username.as_str(),
                    account.profile_url.as_str(),
                    bool_to_int(account.is_active),
                    account.last_checked_at,
                ],
            )
            .map_err(|err| match RepoError::from(err) {
                RepoError::AlreadyExists(_) => RepoError::AlreadyExists("social account"),
                other => other,
            })?;

        Ok(account.id)
    }

    fn list_active_by_person(&self, person_id: PersonId) -> RepoResult<Vec<SocialAccount>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ACCOUNT_SELECT_SQL}
             WHERE person_id = ?1 AND is_active = 1
             ORDER BY created_at DESC, id ASC;"
        ))?;

        let mut rows = stmt.query(params![person_id.to_string()])?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }

    fn deactivate_account(&self, id: SocialAccountId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE social_accounts
             SET is_active = 0, updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_account(&self, id: SocialAccountId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM social_accounts WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<SocialAccount> {
    let id_text: String = row.get("id")?;
    let person_text: String = row.get("person_id")?;
    let is_active = int_to_bool(row.get("is_active")?, "social_accounts.is_active")?;

    Ok(SocialAccount {
        id: parse_row_uuid(&id_text, "social_accounts.id")?,
        person_id: parse_row_uuid(&person_text, "social_accounts.person_id")?,
        platform: row.get("platform")?,
        username: row.get("username")?,
        profile_url: row.get("profile_url")?,
        is_active,
        last_checked_at: row.get("last_checked_at")?,
    })
}
