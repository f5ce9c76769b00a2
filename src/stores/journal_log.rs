//! Local mirror of the food journal with optimistic deletes.

use tokio::sync::Mutex;
use tracing::{info, warn};
use crate::error::NomsResult;
use crate::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};
use crate::repositories::JournalService;

/// Entries ordered most recent first.
#[derive(Clone, Debug, Default)]
pub struct JournalLog {
    entries: Vec<JournalEntry>,
}

/// A local removal that can be undone if the backend rejects it.
#[derive(Clone, Debug)]
pub struct PendingRemoval {
    pub entry_id: String,
    removed: Option<(usize, JournalEntry)>,
}

impl JournalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn replace(&mut self, entries: Vec<JournalEntry>) {
        self.entries = entries;
    }

    pub fn prepend(&mut self, entry: JournalEntry) {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.insert(0, entry);
    }

    pub fn upsert(&mut self, entry: JournalEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.prepend(entry),
        }
    }

    pub fn contains(&self, entry_id: &str) -> bool {
        self.entries.iter().any(|e| e.id == entry_id)
    }

    /// Removes the entry now. Absent entries produce an empty removal.
    pub fn apply_removal(&mut self, entry_id: &str) -> PendingRemoval {
        let removed = self
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .map(|index| (index, self.entries.remove(index)));

        PendingRemoval {
            entry_id: entry_id.to_string(),
            removed,
        }
    }

    /// Inverse of `apply_removal`. A no-op if nothing was removed or the entry
    /// has come back by another path.
    pub fn compensate(&mut self, removal: PendingRemoval) {
        let Some((index, entry)) = removal.removed else {
            return;
        };
        if self.contains(&entry.id) {
            return;
        }
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }
}

pub async fn refresh<S>(log: &Mutex<JournalLog>, service: &S) -> NomsResult<Vec<JournalEntry>>
where
    S: JournalService + ?Sized,
{
    let entries = service.list_entries().await?;
    log.lock().await.replace(entries.clone());
    Ok(entries)
}

pub async fn create_entry<S>(
    log: &Mutex<JournalLog>,
    service: &S,
    entry: &CreateJournalEntry,
) -> NomsResult<JournalEntry>
where
    S: JournalService + ?Sized,
{
    let created = service.create_entry(entry).await?;
    log.lock().await.prepend(created.clone());
    info!("Created journal entry {}", created.id);
    Ok(created)
}

pub async fn update_entry<S>(
    log: &Mutex<JournalLog>,
    service: &S,
    entry_id: &str,
    update: &UpdateJournalEntry,
) -> NomsResult<JournalEntry>
where
    S: JournalService + ?Sized,
{
    let updated = service.update_entry(entry_id, update).await?;
    log.lock().await.upsert(updated.clone());
    Ok(updated)
}

/// Optimistically removes the entry, rolling back if the backend delete fails.
/// The lock is not held while the request is in flight.
pub async fn remove_entry<S>(log: &Mutex<JournalLog>, service: &S, entry_id: &str) -> bool
where
    S: JournalService + ?Sized,
{
    let removal = log.lock().await.apply_removal(entry_id);

    match service.delete_entry(entry_id).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Failed to delete journal entry {} due to: {}, rolling back", entry_id, e);
            log.lock().await.compensate(removal);
            false
        }
    }
}
