//! Journal entry record

use crate::domain::analysis::{AnalysisResult, Energy, Mood};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A saved journal entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// ISO-8601 local time
    pub timestamp: String,
    pub text: String,
    pub mood: Mood,
    pub energy: Energy,
}

impl JournalEntry {
    pub fn new(timestamp: NaiveDateTime, text: &str, analysis: AnalysisResult) -> Self {
        JournalEntry {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            text: text.to_string(),
            mood: analysis.mood,
            energy: analysis.energy,
        }
    }

    pub fn analysis(&self) -> AnalysisResult {
        AnalysisResult::new(self.mood, self.energy)
    }
}
