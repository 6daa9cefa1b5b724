//! Letter repository contract.
//!
//! # Responsibility
//! - Look up lowercase letters by index.
//! - Persist alphabet songs and hand back the stored instance.
//!
//! # Invariants
//! - Implementations own index range validation.
//! - `update_and_return(None)` fails with a repository error; it never panics.

use crate::model::alphabet_song::AlphabetSong;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for letter lookup and song updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No letter is stored at `index`.
    IndexOutOfRange { index: u32 },
    /// An update was requested without a song.
    MissingSong,
    /// Implementation-specific failure.
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index } => write!(f, "no letter at index {index}"),
            Self::MissingSong => write!(f, "song reference is absent"),
            Self::Backend(message) => write!(f, "letter repository failure: {message}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface consumed by `AlphabetService`.
pub trait LetterRepository {
    fn lowercase_letter_for_index(&self, index: u32) -> RepoResult<char>;
    fn update_and_return(&self, song: Option<Arc<AlphabetSong>>) -> RepoResult<Arc<AlphabetSong>>;
}

impl<R: LetterRepository + ?Sized> LetterRepository for &R {
    fn lowercase_letter_for_index(&self, index: u32) -> RepoResult<char> {
        (**self).lowercase_letter_for_index(index)
    }

    fn update_and_return(&self, song: Option<Arc<AlphabetSong>>) -> RepoResult<Arc<AlphabetSong>> {
        (**self).update_and_return(song)
    }
}

impl<R: LetterRepository + ?Sized> LetterRepository for Arc<R> {
    fn lowercase_letter_for_index(&self, index: u32) -> RepoResult<char> {
        (**self).lowercase_letter_for_index(index)
    }

    fn update_and_return(&self, song: Option<Arc<AlphabetSong>>) -> RepoResult<Arc<AlphabetSong>> {
        (**self).update_and_return(song)
    }
}
