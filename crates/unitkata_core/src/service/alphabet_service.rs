//! Alphabet use-case service.
//!
//! # Responsibility
//! - Expose uppercase letter lookup on top of the repository's lowercase one.
//! - Pass song updates through to the repository.
//!
//! # Invariants
//! - Every operation calls the repository exactly once.
//! - Repository results and errors are returned unchanged; the service does
//!   not validate indexes or check for absent songs.

use crate::model::alphabet_song::AlphabetSong;
use crate::repo::letter_repo::{LetterRepository, RepoResult};
use std::sync::Arc;

/// Use-case service over a `LetterRepository`.
///
/// Pass `&repo` or `Arc<repo>` to keep ownership of the repository outside
/// the service.
pub struct AlphabetService<R: LetterRepository> {
    repo: R,
}

impl<R: LetterRepository> AlphabetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the uppercase form of the repository letter at `index`.
    pub fn uppercase_letter_by_index(&self, index: u32) -> RepoResult<char> {
        let letter = self.repo.lowercase_letter_for_index(index)?;
        Ok(to_single_uppercase(letter))
    }

    /// Updates `song` through the repository and returns whatever it returns.
    pub fn update_alphabet_song(
        &self,
        song: Option<Arc<AlphabetSong>>,
    ) -> RepoResult<Arc<AlphabetSong>> {
        self.repo.update_and_return(song)
    }
}

/// Single-char uppercase mapping; multi-char expansions (e.g. `ß`) keep the input.
fn to_single_uppercase(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => letter,
    }
}
