//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI layers decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.

pub mod event_service;
pub mod onboarding;
pub mod person_service;
pub mod profile_service;
pub mod social_service;
pub mod suggestion_service;
