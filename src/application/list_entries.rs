//! List entries use case

use crate::domain::JournalEntry;
use crate::infrastructure::EntryRepository;

/// The last `n` entries, oldest first.
pub fn list_entries<R: EntryRepository>(repository: &R, n: usize) -> Vec<JournalEntry> {
    repository.list_last(n)
}
