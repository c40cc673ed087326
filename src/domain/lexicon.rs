//! Compound valence score and its mapping to labels

use crate::domain::analysis::{AnalysisResult, Energy, Mood};

/// Scores above this (or below its negation) carry a mood
pub const MOOD_THRESHOLD: f64 = 0.1;
/// Scores above this (or below its negation) carry strong energy
pub const INTENSITY_THRESHOLD: f64 = 0.5;

const EMOJI_WEIGHT: f64 = 0.3;

/// Produces a compound valence score in [-1, 1] for a piece of text
pub trait LexiconScorer {
    fn score(&self, text: &str) -> f64;
}

impl<S: LexiconScorer + ?Sized> LexiconScorer for &S {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

/// Map a compound score to labels. Always decisive.
///
/// Thresholds are strict: exactly 0.1 is neutral, exactly 0.5 is medium.
pub fn lexicon_stage(score: f64) -> AnalysisResult {
    if score > MOOD_THRESHOLD {
        let energy = if score > INTENSITY_THRESHOLD {
            Energy::High
        } else {
            Energy::Medium
        };
        AnalysisResult::new(Mood::Positive, energy)
    } else if score < -MOOD_THRESHOLD {
        let energy = if score < -INTENSITY_THRESHOLD {
            Energy::HighStress
        } else {
            Energy::Medium
        };
        AnalysisResult::new(Mood::Negative, energy)
    } else {
        // Also reached for NaN
        AnalysisResult::new(Mood::Neutral, Energy::Medium)
    }
}

/// Lexicon score nudged by emoji valence, clamped to [-1, 1]
pub fn combined_score(compound: f64, emoji_valence: f64) -> f64 {
    (compound + emoji_valence * EMOJI_WEIGHT).clamp(-1.0, 1.0)
}
