//! Person use-case service.
//!
//! # Responsibility
//! - Provide stable people CRUD entry points for core callers.
//! - Expose the person-with-profile detail view in one call.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::person::{Person, PersonId};
use crate::model::profile::Profile;
use crate::repo::person_repo::PersonRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for person CRUD operations.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new person through repository persistence.
    pub fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        self.repo.create_person(person)
    }

    /// Updates an existing person by stable ID.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_person(&self, person: &Person) -> RepoResult<()> {
        self.repo.update_person(person)
    }

    /// Gets one person by ID.
    pub fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        self.repo.get_person(id)
    }

    /// Lists all tracked people sorted by name.
    pub fn list_people(&self) -> RepoResult<Vec<Person>> {
        self.repo.list_people()
    }

    /// Deletes a person; child records cascade in storage.
    pub fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete_person(id)
    }

    /// Loads a person together with the optional gift profile.
    pub fn get_person_with_profile(
        &self,
        id: PersonId,
    ) -> RepoResult<Option<(Person, Option<Profile>)>> {
        self.repo.get_person_with_profile(id)
    }
}
