//! Mood and energy breakdown over a set of entries

use crate::domain::entry::JournalEntry;
use std::collections::BTreeMap;

/// Label counts, iterated in label order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodStats {
    pub total: usize,
    pub moods: BTreeMap<&'static str, usize>,
    pub energies: BTreeMap<&'static str, usize>,
}

impl MoodStats {
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let mut stats = MoodStats::default();
        for entry in entries {
            *stats.moods.entry(entry.mood.as_str()).or_insert(0) += 1;
            *stats.energies.entry(entry.energy.as_str()).or_insert(0) += 1;
            stats.total += 1;
        }
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Share of `count` in the total, as a percentage
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}
