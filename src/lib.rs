//! moodlog - Journal mood and energy analyzer
//!
//! Classifies short journal entries into a mood (positive, negative, neutral)
//! and an energy level (low, medium, high, high_stress), and keeps a local
//! JSON journal of the results.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{AnalysisResult, Energy, Mood};
pub use error::MoodlogError;

/// Classify `text` with the process-wide engines, loading them on first use.
///
/// Only engine loading can fail; classification itself accepts any string.
///
/// # Examples
///
/// ```
/// use moodlog::{analyze, Energy, Mood};
///
/// let result = analyze("I'm crushing it at work today").unwrap();
/// assert_eq!(result.mood, Mood::Positive);
/// assert_eq!(result.energy, Energy::High);
/// ```
pub fn analyze(text: &str) -> error::Result<AnalysisResult> {
    Ok(infrastructure::engines::init()?.analyze(text))
}
