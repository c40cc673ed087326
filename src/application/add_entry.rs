//! Add entry use case

use crate::domain::{Analyzer, LexiconScorer, Tagger};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{EntryRepository, SavedEntry};

/// Service for analysing and saving a new entry
pub struct AddEntryService<'a, R, T, S> {
    repository: R,
    analyzer: &'a Analyzer<T, S>,
}

impl<'a, R: EntryRepository, T: Tagger, S: LexiconScorer> AddEntryService<'a, R, T, S> {
    pub fn new(repository: R, analyzer: &'a Analyzer<T, S>) -> Self {
        AddEntryService {
            repository,
            analyzer,
        }
    }

    /// Analyse `text` and append it to the journal. Blank text is rejected.
    pub fn execute(&self, text: &str) -> Result<SavedEntry> {
        if text.trim().is_empty() {
            return Err(MoodlogError::EmptyEntry);
        }

        let analysis = self.analyzer.analyze(text);
        let saved = self.repository.append(text, analysis);
        tracing::info!(
            mood = %saved.entry.mood,
            energy = %saved.entry.energy,
            persisted = saved.persisted,
            "entry added"
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Energy, Mood, TaggedToken};
    use crate::infrastructure::JsonEntryRepository;
    use tempfile::TempDir;

    struct NoTags;

    impl Tagger for NoTags {
        fn tag(&self, _text: &str) -> Vec<TaggedToken> {
            Vec::new()
        }
    }

    struct Fixed(f64);

    impl LexiconScorer for Fixed {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_rejects_blank_text() {
        let temp = TempDir::new().unwrap();
        let analyzer = Analyzer::new(NoTags, Fixed(0.0));
        let repo = JsonEntryRepository::new(temp.path().join("journal.json"));
        let service = AddEntryService::new(repo, &analyzer);

        assert!(matches!(service.execute(" \t\n"), Err(MoodlogError::EmptyEntry)));
        assert!(!temp.path().join("journal.json").exists());
    }

    #[test]
    fn test_saves_analysis() {
        let temp = TempDir::new().unwrap();
        let analyzer = Analyzer::new(NoTags, Fixed(0.3));
        let path = temp.path().join("journal.json");
        let service = AddEntryService::new(JsonEntryRepository::new(path.clone()), &analyzer);

        let saved = service.execute("a decent day").unwrap();
        assert!(saved.persisted);
        assert_eq!(saved.entry.mood, Mood::Positive);
        assert_eq!(saved.entry.energy, Energy::Medium);

        let stored = JsonEntryRepository::new(path).list_last(1);
        assert_eq!(stored, vec![saved.entry]);
    }
}
