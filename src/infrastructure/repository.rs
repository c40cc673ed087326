//! JSON file repository for journal entries

use crate::domain::{AnalysisResult, JournalEntry};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// An entry handed back by [`EntryRepository::append`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub entry: JournalEntry,
    /// False when the write to storage failed
    pub persisted: bool,
}

/// Abstract repository for journal entries
pub trait EntryRepository {
    /// All saved entries, oldest first. Unreadable storage yields no entries.
    fn load(&self) -> Vec<JournalEntry>;

    /// Replace all saved entries, reporting success
    fn save(&self, entries: &[JournalEntry]) -> bool;

    /// Record a new entry for `text` with its analysis
    fn append(&self, text: &str, analysis: AnalysisResult) -> SavedEntry;

    /// The last `n` entries, oldest first
    fn list_last(&self, n: usize) -> Vec<JournalEntry> {
        let entries = self.load();
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }

    /// Remove all entries, reporting success
    fn clear(&self) -> bool {
        self.save(&[])
    }
}

/// Entries stored as a pretty-printed JSON array in a single file
#[derive(Debug)]
pub struct JsonEntryRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonEntryRepository {
    pub fn new(path: PathBuf) -> Self {
        JsonEntryRepository {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entries(&self, entries: &[JournalEntry]) -> crate::error::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;

        // Write beside the target and rename so readers never see a partial file
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn save_unlocked(&self, entries: &[JournalEntry]) -> bool {
        match self.write_entries(entries) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = entries.len(), "entries saved");
                true
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to save entries");
                false
            }
        }
    }
}

impl EntryRepository for JsonEntryRepository {
    fn load(&self) -> Vec<JournalEntry> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable journal, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "malformed journal, treating as empty");
            Vec::new()
        })
    }

    fn save(&self, entries: &[JournalEntry]) -> bool {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.save_unlocked(entries)
    }

    fn append(&self, text: &str, analysis: AnalysisResult) -> SavedEntry {
        // Held across read-modify-write so concurrent appends in this process don't drop entries
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = self.load();
        let entry = JournalEntry::new(Local::now().naive_local(), text, analysis);
        entries.push(entry.clone());
        let persisted = self.save_unlocked(&entries);

        SavedEntry { entry, persisted }
    }
}
