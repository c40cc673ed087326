//! Process-wide analysis engines
//!
//! Built once at startup by [`init`]. Later calls reuse the same instance.

use crate::domain::Analyzer;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{RuleTagger, VaderScorer};
use std::sync::OnceLock;

/// Analyzer wired to the default tagger and lexicon
pub type DefaultAnalyzer = Analyzer<RuleTagger, VaderScorer>;

static ANALYZER: OnceLock<DefaultAnalyzer> = OnceLock::new();

/// Load the engines if that has not happened yet.
pub fn init() -> Result<&'static DefaultAnalyzer> {
    if let Some(analyzer) = ANALYZER.get() {
        return Ok(analyzer);
    }

    tracing::debug!("loading analysis engines");
    let scorer = VaderScorer::load().map_err(MoodlogError::EngineInit)?;
    let analyzer = Analyzer::new(RuleTagger::new(), scorer);

    // A concurrent caller may have won the race; either instance is equivalent
    Ok(ANALYZER.get_or_init(|| analyzer))
}
