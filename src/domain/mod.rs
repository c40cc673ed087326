//! Domain layer - Classification rules and journal models

pub mod analysis;
pub mod emoji;
pub mod entry;
pub mod lexicon;
pub mod pipeline;
pub mod stats;
pub mod tagging;
pub mod verb_rule;

pub use analysis::{AnalysisResult, Decision, Energy, Mood, Stage};
pub use entry::JournalEntry;
pub use lexicon::LexiconScorer;
pub use pipeline::Analyzer;
pub use stats::MoodStats;
pub use tagging::{DependencyRole, PartOfSpeech, TaggedToken, Tagger};
