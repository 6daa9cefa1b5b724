//! Core units for the unitkata testing walkthrough.
//! A bounded adder and an alphabet service layered over a letter repository.

pub mod adder;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use adder::bounded_adder::{AdderError, AdderResult, BoundedAdder, SUM_CEILING, SUM_FLOOR};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LoggingError, LoggingResult,
};
pub use model::alphabet_song::{AlphabetSong, SongId};
pub use repo::letter_repo::{LetterRepository, RepoError, RepoResult};
pub use repo::memory_repo::InMemoryLetterRepository;
pub use service::alphabet_service::AlphabetService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
