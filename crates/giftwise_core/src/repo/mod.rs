//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/business orchestration.
//! - Normalize constraint failures into semantic errors the way the
//!   client SDK used to map backend error codes.
//!
//! # Invariants
//! - Repository writes must call the entity `validate()` before SQL
//!   mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Sqlite repositories refuse connections whose schema version does not
//!   match this binary.

pub mod event_repo;
pub mod gift_suggestion_repo;
pub mod person_repo;
pub mod profile_repo;
pub mod social_account_repo;

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error shared by all entity repositories.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    /// No row matched the given stable ID.
    NotFound(Uuid),
    /// A uniqueness rule was violated, e.g. second profile for a person or
    /// duplicate (person, platform) social account.
    AlreadyExists(&'static str),
    /// A child row referenced a person that does not exist.
    MissingReference(&'static str),
    /// Persisted state failed decoding.
    InvalidData(String),
    /// Connection schema version does not match this binary.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::AlreadyExists(what) => write!(f, "{what} already exists"),
            Self::MissingReference(what) => write!(f, "referenced {what} not found"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open via db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        // Constraint violations get semantic variants so callers can show
        // a meaningful message instead of raw SQL errors.
        if let rusqlite::Error::SqliteFailure(failure, _) = &value {
            match failure.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return Self::AlreadyExists("record");
                }
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Self::MissingReference("person");
                }
                _ => {}
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Verifies the connection schema matches this binary before a repository
/// is handed out.
pub(crate) fn ensure_schema_current(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

pub(crate) fn parse_row_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}
