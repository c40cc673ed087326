//! Mood and energy labels produced by the analysis pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse valence of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse arousal of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    Low,
    Medium,
    High,
    HighStress,
}

impl Energy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
            Energy::HighStress => "high_stress",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood and energy of a single entry. Both labels are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mood: Mood,
    pub energy: Energy,
}

impl AnalysisResult {
    pub const fn new(mood: Mood, energy: Energy) -> Self {
        AnalysisResult { mood, energy }
    }
}

/// The link of the decision chain that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    EmptyInput,
    VerbRule,
    Emoji,
    Lexicon,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::EmptyInput => "empty_input",
            Stage::VerbRule => "verb_rule",
            Stage::Emoji => "emoji",
            Stage::Lexicon => "lexicon",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A result together with the stage that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub result: AnalysisResult,
    pub stage: Stage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_snake_case() {
        let result = AnalysisResult::new(Mood::Negative, Energy::HighStress);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"mood":"negative","energy":"high_stress"}"#);
    }

    #[test]
    fn test_labels_deserialize() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"mood":"positive","energy":"high"}"#).unwrap();
        assert_eq!(result, AnalysisResult::new(Mood::Positive, Energy::High));
    }

    #[test]
    fn test_display_matches_serialized_label() {
        assert_eq!(Energy::HighStress.to_string(), "high_stress");
        assert_eq!(Mood::Neutral.to_string(), "neutral");
        assert_eq!(Stage::VerbRule.to_string(), "verb_rule");
    }
}
