//! Mood statistics use case

use crate::domain::MoodStats;
use crate::infrastructure::EntryRepository;

/// Mood and energy breakdown over the last `n` entries.
pub fn mood_stats<R: EntryRepository>(repository: &R, n: usize) -> MoodStats {
    MoodStats::from_entries(&repository.list_last(n))
}
