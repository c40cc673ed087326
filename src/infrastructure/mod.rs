//! Infrastructure layer - Engines, persistence and configuration

pub mod config;
pub mod engines;
pub mod lexicon;
pub mod repository;
pub mod tagger;

pub use config::Config;
pub use engines::DefaultAnalyzer;
pub use lexicon::VaderScorer;
pub use repository::{EntryRepository, JsonEntryRepository, SavedEntry};
pub use tagger::RuleTagger;
