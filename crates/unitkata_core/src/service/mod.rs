//! Core use-case services.
//!
//! # Responsibility
//! - Layer use-case operations over repository contracts.
//! - Stay storage-agnostic so tests can swap in repository doubles.

pub mod alphabet_service;
