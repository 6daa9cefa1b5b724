//! Alphabet song record.

use serde::{Deserialize, Serialize};

/// Identifier of a stored alphabet song.
pub type SongId = i64;

/// A song record handled by `LetterRepository::update_and_return`.
///
/// Identifier uniqueness is owned by whichever repository stores the song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlphabetSong {
    pub id: SongId,
    pub length_in_minutes: i64,
}

impl AlphabetSong {
    pub fn new(id: SongId, length_in_minutes: i64) -> Self {
        Self {
            id,
            length_in_minutes,
        }
    }
}
