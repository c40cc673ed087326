//! Disambiguation of "crush"
//!
//! "crushing it" means doing great, "crushing me" means being overwhelmed.
//! A valence lexicon cannot tell the two apart, so the object of the verb
//! decides before any generic scoring runs.

use crate::domain::analysis::{AnalysisResult, Energy, Mood};
use crate::domain::tagging::{children, PartOfSpeech, TaggedToken};

const TARGET_LEMMA: &str = "crush";
const PERSONAL_OBJECTS: [&str; 3] = ["me", "you", "us"];

/// Classify by the object of the first decisive "crush" verb, or abstain.
pub fn crush_rule(tokens: &[TaggedToken]) -> Option<AnalysisResult> {
    for (index, token) in tokens.iter().enumerate() {
        if token.pos != PartOfSpeech::Verb || token.lemma != TARGET_LEMMA {
            continue;
        }

        let objects: Vec<String> = children(tokens, index)
            .filter(|child| child.dep.is_object_like())
            .map(|child| child.text.to_lowercase())
            .collect();

        // Substring match, so "crushing it" and "crushed it all" both count
        if objects.iter().any(|obj| obj.contains("it")) {
            return Some(AnalysisResult::new(Mood::Positive, Energy::High));
        }

        if objects
            .iter()
            .any(|obj| PERSONAL_OBJECTS.contains(&obj.as_str()))
        {
            return Some(AnalysisResult::new(Mood::Negative, Energy::HighStress));
        }
    }

    None
}
