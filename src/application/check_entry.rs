//! Check entry use case - analyse without saving

use crate::domain::emoji::emoji_valence;
use crate::domain::lexicon::combined_score;
use crate::domain::{Analyzer, Decision, LexiconScorer, Tagger};

/// Full breakdown of how a text would be classified
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub decision: Decision,
    pub compound: f64,
    pub emoji_valence: f64,
    pub combined: f64,
}

/// Classify `text` and collect the auxiliary scores. Nothing is persisted.
pub fn check_entry<T: Tagger, S: LexiconScorer>(analyzer: &Analyzer<T, S>, text: &str) -> CheckReport {
    let decision = analyzer.decide(text);
    let compound = analyzer.compound_score(text);
    let emoji_valence = emoji_valence(text);

    CheckReport {
        decision,
        compound,
        emoji_valence,
        combined: combined_score(compound, emoji_valence),
    }
}
