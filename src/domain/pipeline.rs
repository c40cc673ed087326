//! Decision chain combining the verb rule, emoji and lexicon stages
//!
//! Stages run in a fixed order and the first decisive one wins:
//!
//! 1. empty or whitespace-only text is `neutral`/`low`
//! 2. the "crush" rule
//! 3. the emoji majority
//! 4. the lexicon compound score (always decisive)
//!
//! # Examples
//!
//! ```
//! use moodlog::domain::{Analyzer, Energy, LexiconScorer, Mood, TaggedToken, Tagger};
//!
//! struct NoTags;
//! impl Tagger for NoTags {
//!     fn tag(&self, _text: &str) -> Vec<TaggedToken> {
//!         Vec::new()
//!     }
//! }
//!
//! struct Fixed(f64);
//! impl LexiconScorer for Fixed {
//!     fn score(&self, _text: &str) -> f64 {
//!         self.0
//!     }
//! }
//!
//! let analyzer = Analyzer::new(NoTags, Fixed(-0.8));
//! let result = analyzer.analyze("rough day");
//! assert_eq!(result.mood, Mood::Negative);
//! assert_eq!(result.energy, Energy::HighStress);
//! ```

use crate::domain::analysis::{AnalysisResult, Decision, Energy, Mood, Stage};
use crate::domain::emoji::emoji_stage;
use crate::domain::lexicon::{lexicon_stage, LexiconScorer};
use crate::domain::tagging::Tagger;
use crate::domain::verb_rule::crush_rule;

const EMPTY_RESULT: AnalysisResult = AnalysisResult::new(Mood::Neutral, Energy::Low);

/// Mood/energy classifier over an injected tagger and lexicon scorer.
///
/// Holds no mutable state; shareable across threads whenever `T` and `S` are.
#[derive(Debug, Clone)]
pub struct Analyzer<T, S> {
    tagger: T,
    scorer: S,
}

impl<T: Tagger, S: LexiconScorer> Analyzer<T, S> {
    pub fn new(tagger: T, scorer: S) -> Self {
        Analyzer { tagger, scorer }
    }

    /// Classify `text`. Never fails, whatever the input.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.decide(text).result
    }

    /// Classify `text` and report which stage decided.
    pub fn decide(&self, text: &str) -> Decision {
        let decision = self.run_stages(text);
        tracing::debug!(
            stage = %decision.stage,
            mood = %decision.result.mood,
            energy = %decision.result.energy,
            "entry classified"
        );
        decision
    }

    /// Raw compound score of the lexicon scorer
    pub fn compound_score(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    fn run_stages(&self, text: &str) -> Decision {
        if text.trim().is_empty() {
            return Decision {
                result: EMPTY_RESULT,
                stage: Stage::EmptyInput,
            };
        }

        let verb_rule = |text: &str| crush_rule(&self.tagger.tag(text));
        let abstaining: [(Stage, &dyn Fn(&str) -> Option<AnalysisResult>); 2] = [
            (Stage::VerbRule, &verb_rule),
            (Stage::Emoji, &emoji_stage),
        ];

        for (stage, run) in abstaining {
            if let Some(result) = run(text) {
                return Decision { result, stage };
            }
        }

        Decision {
            result: lexicon_stage(self.scorer.score(text)),
            stage: Stage::Lexicon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tagging::{DependencyRole, PartOfSpeech, TaggedToken};
    use std::cell::Cell;

    /// Returns canned tokens regardless of input
    struct CannedTagger(Vec<TaggedToken>);

    impl Tagger for CannedTagger {
        fn tag(&self, _text: &str) -> Vec<TaggedToken> {
            self.0.clone()
        }
    }

    struct FixedScorer(f64);

    impl LexiconScorer for FixedScorer {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    /// Records how often it was asked to score
    struct CountingScorer {
        calls: Cell<usize>,
    }

    impl LexiconScorer for CountingScorer {
        fn score(&self, _text: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            0.0
        }
    }

    fn crush_tokens(object: &str) -> Vec<TaggedToken> {
        vec![
            TaggedToken::new("crushing", "crush", PartOfSpeech::Verb, DependencyRole::Root, 0),
            TaggedToken::new(object, object, PartOfSpeech::Pronoun, DependencyRole::DirectObject, 0),
        ]
    }

    fn analyzer(tokens: Vec<TaggedToken>, score: f64) -> Analyzer<CannedTagger, FixedScorer> {
        Analyzer::new(CannedTagger(tokens), FixedScorer(score))
    }

    #[test]
    fn test_empty_input() {
        let analyzer = analyzer(crush_tokens("it"), 0.9);
        for text in ["", "   \n\t  "] {
            let decision = analyzer.decide(text);
            assert_eq!(decision.result, EMPTY_RESULT);
            assert_eq!(decision.stage, Stage::EmptyInput);
        }
    }

    #[test]
    fn test_verb_rule_beats_emoji_and_lexicon() {
        let analyzer = analyzer(crush_tokens("me"), 0.9);
        let decision = analyzer.decide("crushing me 🔥🔥");
        assert_eq!(
            decision.result,
            AnalysisResult::new(Mood::Negative, Energy::HighStress)
        );
        assert_eq!(decision.stage, Stage::VerbRule);
    }

    #[test]
    fn test_emoji_beats_lexicon() {
        let analyzer = analyzer(Vec::new(), -0.9);
        let decision = analyzer.decide("today was awful 🔥");
        assert_eq!(decision.result, AnalysisResult::new(Mood::Positive, Energy::High));
        assert_eq!(decision.stage, Stage::Emoji);
    }

    #[test]
    fn test_tied_emoji_fall_through_to_lexicon() {
        let analyzer = analyzer(Vec::new(), -0.3);
        let decision = analyzer.decide("meh 🔥💀");
        assert_eq!(decision.result, AnalysisResult::new(Mood::Negative, Energy::Medium));
        assert_eq!(decision.stage, Stage::Lexicon);
    }

    #[test]
    fn test_abstaining_verb_rule_falls_through() {
        let analyzer = analyzer(crush_tokens("grapes"), 0.0);
        let decision = analyzer.decide("crushing grapes");
        assert_eq!(decision.result, AnalysisResult::new(Mood::Neutral, Energy::Medium));
        assert_eq!(decision.stage, Stage::Lexicon);
    }

    #[test]
    fn test_lexicon_not_consulted_when_earlier_stage_decides() {
        let scorer = CountingScorer {
            calls: Cell::new(0),
        };
        let analyzer = Analyzer::new(CannedTagger(crush_tokens("it")), &scorer);
        analyzer.analyze("crushing it");
        analyzer.analyze("");
        assert_eq!(scorer.calls.get(), 0);

        analyzer.analyze("nothing special");
        // Canned tokens still say "crushing it", so the rule decides again
        assert_eq!(scorer.calls.get(), 0);

        let plain = Analyzer::new(CannedTagger(Vec::new()), &scorer);
        plain.analyze("nothing special");
        assert_eq!(scorer.calls.get(), 1);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = analyzer(Vec::new(), 0.42);
        let first = analyzer.analyze("a decent day");
        let second = analyzer.analyze("a decent day");
        assert_eq!(first, second);
    }

    #[test]
    fn test_compound_score_passthrough() {
        let analyzer = analyzer(Vec::new(), 0.42);
        assert_eq!(analyzer.compound_score("anything"), 0.42);
    }

    #[test]
    fn test_shareable_across_threads() {
        let analyzer = analyzer(Vec::new(), 0.7);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| analyzer.analyze("a good day")))
                .collect();
            for handle in handles {
                assert_eq!(
                    handle.join().unwrap(),
                    AnalysisResult::new(Mood::Positive, Energy::High)
                );
            }
        });
    }
}
