//! Note use-case service.
//!
//! # Invariants
//! - Notes are the only records that are hard-deleted.
//! - Created notes carry today's local date and at least one tag.

use super::{list_records, prepend_records, remove_record, require, ServiceResult};
use crate::model::id::IdGenerator;
use crate::model::note::{distinct_tags, Note, NoteDraft, DEFAULT_NOTE_TAG};
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};
use chrono::Local;
use log::info;

pub struct NoteService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
    ids: &'s IdGenerator,
}

impl<'s, S: KeyValueStore> NoteService<'s, S> {
    pub fn new(store: &'s LocalStore<S>, ids: &'s IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Lists notes newest first, seeding the defaults on first access.
    pub fn list(&self) -> StoreResult<Vec<Note>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    /// Prepends a fully formed note.
    pub fn add(&self, note: Note) -> StoreResult<()> {
        self.store.simulate(LatencyClass::Standard);
        let note_id = note.id.clone();
        prepend_records(self.store, vec![note])?;
        info!("event=note_add module=service status=ok note_id={note_id}");
        Ok(())
    }

    /// Builds a note from form input and prepends it.
    ///
    /// Title and content are required. Blank tag lists fall back to
    /// `General`.
    pub fn create(&self, draft: NoteDraft) -> ServiceResult<Note> {
        require("note", "title", &draft.title)?;
        require("note", "content", &draft.content)?;

        let mut tags = distinct_tags(&draft.tags);
        if tags.is_empty() {
            tags.push(DEFAULT_NOTE_TAG.to_string());
        }
        let note = Note {
            id: self.ids.next_id(),
            title: draft.title,
            content: draft.content,
            date: Local::now().format("%Y-%m-%d").to_string(),
            tags,
        };
        self.add(note.clone())?;
        Ok(note)
    }

    /// Removes the note with `id`; unknown ids are ignored.
    ///
    /// Returns whether a note was removed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.simulate(LatencyClass::Standard);
        let removed = remove_record::<S, Note>(self.store, id)?;
        info!("event=note_delete module=service status=ok note_id={id} removed={removed}");
        Ok(removed)
    }
}
