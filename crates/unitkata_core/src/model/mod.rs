//! Plain records shared between services and repositories.
//!
//! # Responsibility
//! - Define value-like data passed through service/repository boundaries.
//!
//! # Invariants
//! - Records carry no behavior that depends on a repository.

pub mod alphabet_song;
