//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod check_entry;
pub mod list_entries;
pub mod mood_stats;

pub use add_entry::AddEntryService;
pub use check_entry::{check_entry, CheckReport};
pub use list_entries::list_entries;
pub use mood_stats::mood_stats;
