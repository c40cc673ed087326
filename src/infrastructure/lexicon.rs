//! VADER-backed lexicon scorer

use crate::domain::LexiconScorer;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound score from the VADER valence lexicon.
///
/// The lexicon lives in process-wide statics inside `vader_sentiment`, so the
/// analyzer handle is cheap to create per call and the first call pays for
/// loading it. See [`VaderScorer::load`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Load the lexicon eagerly and check that it produces sane scores.
    pub fn load() -> std::result::Result<Self, String> {
        let scorer = VaderScorer;
        let probe = scorer.score("good");
        if probe > 0.0 && probe <= 1.0 {
            Ok(scorer)
        } else {
            Err(format!("VADER lexicon returned {} for a known positive word", probe))
        }
    }
}

impl LexiconScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        assert!(VaderScorer::load().is_ok());
    }

    #[test]
    fn test_scores_are_bounded() {
        let scorer = VaderScorer;
        for text in ["", "love love love!!!", "hate hate hate!!!", "the sky"] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn test_polarity() {
        let scorer = VaderScorer;
        assert!(scorer.score("I'm so happy and excited today!") > 0.5);
        assert!(scorer.score("I'm sad and depressed") < -0.5);
        assert!(scorer.score("Today was not good") < -0.1);
    }
}
