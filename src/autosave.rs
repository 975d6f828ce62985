//! Draft Auto-save
//!
//! Local drafts are debounced: each edit supersedes the previous one, and
//! only the newest edit is written once its window has elapsed. Server
//! drafts are posted on a fixed interval by the story form.

use crate::models::Draft;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Identifies one scheduled write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter: a ticket is live until a newer one is issued
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn touch(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Invalidate every outstanding ticket
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

/// Debounced draft persistence to a key-value store
#[derive(Debug)]
pub struct LocalDraftAutoSave<S> {
    store: S,
    key: String,
    debouncer: Debouncer,
    pending: Option<Draft>,
}

impl<S: KeyValueStore> LocalDraftAutoSave<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            debouncer: Debouncer::default(),
            pending: None,
        }
    }

    /// Previously saved draft, if any
    pub fn load(&self) -> Option<Draft> {
        load_json(&self.store, &self.key)
    }

    /// Record an edit. Hand the ticket back to [`Self::flush`] once the
    /// debounce window has elapsed.
    pub fn record(&mut self, draft: Draft) -> Ticket {
        self.pending = Some(draft);
        self.debouncer.touch()
    }

    /// Window elapsed for `ticket`. Writes only if no newer edit arrived.
    /// Returns whether the store was touched.
    pub fn flush(&mut self, ticket: Ticket) -> bool {
        if !self.debouncer.is_current(ticket) {
            return false;
        }
        let Some(draft) = self.pending.take() else {
            return false;
        };

        if draft.is_blank() {
            self.store.remove(&self.key);
        } else {
            save_json(&self.store, &self.key, &draft);
            log::debug!("[AutoSave] Draft saved locally");
        }
        true
    }

    /// Drop the saved draft and any pending write (after submission)
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.pending = None;
        self.store.remove(&self.key);
    }
}

/// Pick the draft to restore from a server listing, which is newest first
pub fn latest_server_draft(drafts: Vec<Draft>) -> Option<Draft> {
    drafts.into_iter().find(|d| !d.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn draft(content: &str) -> Draft {
        Draft {
            title: "Week in review".to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_burst_of_edits_writes_once() {
        let mut autosave = LocalDraftAutoSave::new(MemoryStore::default(), "draft");

        // Keystrokes inside one window, each scheduling its own timer
        let tickets: Vec<Ticket> = ["H", "He", "Hel", "Hell", "Hello"]
            .iter()
            .map(|text| autosave.record(draft(text)))
            .collect();

        let written = tickets.into_iter().filter(|t| autosave.flush(*t)).count();

        assert_eq!(written, 1);
        assert_eq!(autosave.store.writes(), 1);
        assert_eq!(autosave.load().map(|d| d.content), Some("Hello".to_string()));
    }

    #[test]
    fn test_separate_windows_write_separately() {
        let mut autosave = LocalDraftAutoSave::new(MemoryStore::default(), "draft");

        let first = autosave.record(draft("one"));
        assert!(autosave.flush(first));
        let second = autosave.record(draft("two"));
        assert!(autosave.flush(second));

        assert_eq!(autosave.store.writes(), 2);
    }

    #[test]
    fn test_stale_ticket_after_newer_edit() {
        let mut autosave = LocalDraftAutoSave::new(MemoryStore::default(), "draft");

        let old = autosave.record(draft("old"));
        let new = autosave.record(draft("new"));

        assert!(!autosave.flush(old));
        assert_eq!(autosave.store.writes(), 0);
        assert!(autosave.flush(new));
        assert!(!autosave.flush(new));
    }

    #[test]
    fn test_clear_cancels_pending_write() {
        let mut autosave = LocalDraftAutoSave::new(MemoryStore::default(), "draft");
        let saved = autosave.record(draft("saved"));
        autosave.flush(saved);

        let pending = autosave.record(draft("pending"));
        autosave.clear();

        assert!(!autosave.flush(pending));
        assert_eq!(autosave.load(), None);
    }

    #[test]
    fn test_blank_draft_removes_entry() {
        let mut autosave = LocalDraftAutoSave::new(MemoryStore::default(), "draft");
        let t = autosave.record(draft("something"));
        autosave.flush(t);

        let t = autosave.record(Draft::default());
        assert!(autosave.flush(t));
        assert_eq!(autosave.load(), None);
    }

    #[test]
    fn test_latest_server_draft_takes_newest() {
        let listing = vec![
            Draft { id: Some("d3".to_string()), ..draft("newest") },
            Draft { id: Some("d2".to_string()), ..draft("middle") },
            Draft { id: Some("d1".to_string()), ..draft("oldest") },
        ];
        let restored = latest_server_draft(listing);
        assert_eq!(restored.and_then(|d| d.id), Some("d3".to_string()));
    }

    #[test]
    fn test_latest_server_draft_skips_blank_entries() {
        let listing = vec![
            Draft { id: Some("blank".to_string()), ..Draft::default() },
            Draft { id: Some("d2".to_string()), ..draft("kept") },
        ];
        assert_eq!(latest_server_draft(listing).map(|d| d.content), Some("kept".to_string()));
        assert_eq!(latest_server_draft(vec![Draft::default()]), None);
        assert_eq!(latest_server_draft(Vec::new()), None);
    }
}
