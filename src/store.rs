use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::models::Note;

/// Shareable in-memory note store for use across async handlers
///
/// Notes live in a sharded concurrent map, so operations on unrelated ids
/// do not contend on a single lock. Ids come from a monotonic counter that
/// is never reset, which means ids of deleted notes are never handed out
/// again.
#[derive(Clone, Default)]
pub struct NoteStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: DashMap<i64, Note>,
    next_id: AtomicI64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note and assign it the next id
    ///
    /// The counter is advanced atomically before the insert, so concurrent
    /// callers always receive distinct ids. A concurrent `all` or `search`
    /// may briefly miss a note whose id has been taken but not yet inserted.
    pub fn create(&self, title: String, content: String) -> Note {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let note = Note { id, title, content };

        self.inner.notes.insert(id, note.clone());

        tracing::debug!("Created note with id: {}", id);
        note
    }

    /// Read a note by id
    ///
    /// # Returns
    /// * `Some(note)` - Snapshot of the stored note
    /// * `None` - No note with this id
    pub fn get(&self, id: i64) -> Option<Note> {
        let note = self.inner.notes.get(&id).map(|entry| entry.value().clone());

        if note.is_none() {
            tracing::debug!("Note not found with id: {}", id);
        }
        note
    }

    /// All notes, ordered by id
    pub fn all(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .inner
            .notes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        notes.sort_by_key(|note| note.id);

        tracing::debug!("Listed {} notes", notes.len());
        notes
    }

    /// Notes whose title or content contains `query`, ignoring case
    ///
    /// Results are ordered by id. No match yields an empty vec.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query_lower = query.to_lowercase();

        let mut notes: Vec<Note> = self
            .inner
            .notes
            .iter()
            .filter(|entry| {
                let note = entry.value();
                note.title.to_lowercase().contains(&query_lower)
                    || note.content.to_lowercase().contains(&query_lower)
            })
            .map(|entry| entry.value().clone())
            .collect();
        notes.sort_by_key(|note| note.id);

        tracing::debug!("Search for {:?} matched {} notes", query, notes.len());
        notes
    }

    /// Replace the title and content of an existing note
    ///
    /// The entry stays locked for the whole read-modify-write, so two
    /// updates of the same id never interleave. Last writer wins.
    ///
    /// # Returns
    /// * `Some(note)` - The updated note
    /// * `None` - No note with this id
    pub fn update(&self, id: i64, title: String, content: String) -> Option<Note> {
        let updated = self.inner.notes.get_mut(&id).map(|mut entry| {
            let note = entry.value_mut();
            note.title = title;
            note.content = content;
            note.clone()
        });

        match &updated {
            Some(_) => tracing::debug!("Updated note with id: {}", id),
            None => tracing::debug!("Cannot update missing note with id: {}", id),
        }
        updated
    }

    /// Remove a note, returning whether it existed
    pub fn delete(&self, id: i64) -> bool {
        let removed = self.inner.notes.remove(&id).is_some();

        tracing::debug!("Delete of note {} removed: {}", id, removed);
        removed
    }

    /// Number of notes currently stored
    pub fn len(&self) -> usize {
        self.inner.notes.len()
    }

    /// Whether the store holds no notes
    pub fn is_empty(&self) -> bool {
        self.inner.notes.is_empty()
    }
}
