//! In-memory letter repository.
//!
//! # Responsibility
//! - Serve the lowercase ASCII alphabet by zero-based index.
//! - Keep updated songs keyed by id for the lifetime of the repository.
//!
//! # Invariants
//! - Valid indexes are `0..ALPHABET_LEN`.
//! - The returned song is the same `Arc` that was stored.

use crate::model::alphabet_song::{AlphabetSong, SongId};
use crate::repo::letter_repo::{LetterRepository, RepoError, RepoResult};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const ALPHABET_LEN: u32 = ALPHABET.len() as u32;

/// `LetterRepository` backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryLetterRepository {
    songs: Mutex<HashMap<SongId, Arc<AlphabetSong>>>,
}

impl InMemoryLetterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads back a previously stored song.
    pub fn song(&self, id: SongId) -> Option<Arc<AlphabetSong>> {
        self.songs().get(&id).cloned()
    }

    fn songs(&self) -> MutexGuard<'_, HashMap<SongId, Arc<AlphabetSong>>> {
        // The map holds no cross-entry invariant, so a poisoned guard is still usable.
        self.songs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LetterRepository for InMemoryLetterRepository {
    fn lowercase_letter_for_index(&self, index: u32) -> RepoResult<char> {
        usize::try_from(index)
            .ok()
            .and_then(|position| ALPHABET.get(position))
            .map(|byte| char::from(*byte))
            .ok_or_else(|| {
                warn!("event=letter_lookup module=repo status=error index={index}");
                RepoError::IndexOutOfRange { index }
            })
    }

    fn update_and_return(&self, song: Option<Arc<AlphabetSong>>) -> RepoResult<Arc<AlphabetSong>> {
        let Some(song) = song else {
            warn!("event=song_update module=repo status=error reason=missing_song");
            return Err(RepoError::MissingSong);
        };

        self.songs().insert(song.id, Arc::clone(&song));
        debug!(
            "event=song_update module=repo status=ok id={} length_in_minutes={}",
            song.id, song.length_in_minutes
        );
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryLetterRepository, ALPHABET_LEN};
    use crate::model::alphabet_song::AlphabetSong;
    use crate::repo::letter_repo::{LetterRepository, RepoError};
    use std::sync::Arc;

    #[test]
    fn lookup_covers_the_whole_alphabet() {
        let repo = InMemoryLetterRepository::new();

        assert_eq!(repo.lowercase_letter_for_index(0), Ok('a'));
        assert_eq!(repo.lowercase_letter_for_index(25), Ok('z'));
        assert_eq!(ALPHABET_LEN, 26);
    }

    #[test]
    fn lookup_rejects_index_past_the_alphabet() {
        let repo = InMemoryLetterRepository::new();

        assert_eq!(
            repo.lowercase_letter_for_index(26),
            Err(RepoError::IndexOutOfRange { index: 26 })
        );
    }

    #[test]
    fn update_stores_and_returns_the_same_song() {
        let repo = InMemoryLetterRepository::new();
        let song = Arc::new(AlphabetSong::new(7, 3));

        let returned = repo
            .update_and_return(Some(Arc::clone(&song)))
            .expect("update should succeed");

        assert!(Arc::ptr_eq(&song, &returned));
        let stored = repo.song(7).expect("song should be stored");
        assert!(Arc::ptr_eq(&song, &stored));
    }

    #[test]
    fn update_replaces_song_with_same_id() {
        let repo = InMemoryLetterRepository::new();
        repo.update_and_return(Some(Arc::new(AlphabetSong::new(1, 1))))
            .expect("first update should succeed");
        repo.update_and_return(Some(Arc::new(AlphabetSong::new(1, 4))))
            .expect("second update should succeed");

        assert_eq!(repo.song(1).map(|song| song.length_in_minutes), Some(4));
    }

    #[test]
    fn update_without_song_fails() {
        let repo = InMemoryLetterRepository::new();

        assert_eq!(repo.update_and_return(None), Err(RepoError::MissingSong));
        assert!(repo.song(0).is_none());
    }
}
