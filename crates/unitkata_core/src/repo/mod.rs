//! Collaborator contracts consumed by services, plus reference implementations.
//!
//! # Responsibility
//! - Define the letter/song data access contract.
//! - Keep lookup range checks and absent-song handling out of services.
//!
//! # Invariants
//! - Repository errors are semantic (`IndexOutOfRange`, `MissingSong`) and
//!   reach callers without translation.

pub mod letter_repo;
pub mod memory_repo;
