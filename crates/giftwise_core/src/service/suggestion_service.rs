//! Gift suggestion use-case service.
//!
//! Thin facade over the repository; suggestion browsing has no extra
//! business rules beyond validation and newest-first ordering.

use crate::model::gift_suggestion::{GiftSuggestion, GiftSuggestionId};
use crate::model::person::PersonId;
use crate::repo::gift_suggestion_repo::GiftSuggestionRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for gift suggestion operations.
pub struct SuggestionService<R: GiftSuggestionRepository> {
    repo: R,
}

impl<R: GiftSuggestionRepository> SuggestionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new suggestion through repository persistence.
    pub fn create_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<GiftSuggestionId> {
        self.repo.create_suggestion(suggestion)
    }

    /// Updates an existing suggestion by stable ID.
    pub fn update_suggestion(&self, suggestion: &GiftSuggestion) -> RepoResult<()> {
        self.repo.update_suggestion(suggestion)
    }

    /// Gets one suggestion by ID.
    pub fn get_suggestion(&self, id: GiftSuggestionId) -> RepoResult<Option<GiftSuggestion>> {
        self.repo.get_suggestion(id)
    }

    /// Suggestions for one person, newest first.
    pub fn list_by_person(&self, person_id: PersonId) -> RepoResult<Vec<GiftSuggestion>> {
        self.repo.list_by_person(person_id)
    }

    /// Deletes a suggestion by ID.
    pub fn delete_suggestion(&self, id: GiftSuggestionId) -> RepoResult<()> {
        self.repo.delete_suggestion(id)
    }
}
