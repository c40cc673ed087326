//! Token annotations consumed by the verb rule

/// Coarse part of speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb,
    Auxiliary,
    Noun,
    Pronoun,
    Adjective,
    Adverb,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Punctuation,
    Symbol,
}

/// Grammatical relation of a token to its head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyRole {
    Root,
    Subject,
    DirectObject,
    /// Complement of a copula ("it is *a mess*")
    Attribute,
    Auxiliary,
    Determiner,
    Modifier,
    PrepositionalObject,
    Punctuation,
    Dependent,
}

impl DependencyRole {
    /// Roles that count as the object of a verb
    pub fn is_object_like(&self) -> bool {
        matches!(self, DependencyRole::DirectObject | DependencyRole::Attribute)
    }
}

/// A single annotated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub dep: DependencyRole,
    /// Index of the governing token. The root points at itself.
    pub head: usize,
}

impl TaggedToken {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        dep: DependencyRole,
        head: usize,
    ) -> Self {
        TaggedToken {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            dep,
            head,
        }
    }
}

/// Syntactic children of the token at `index`, in text order
pub fn children(tokens: &[TaggedToken], index: usize) -> impl Iterator<Item = &TaggedToken> {
    tokens
        .iter()
        .enumerate()
        .filter(move |(i, token)| *i != index && token.head == index)
        .map(|(_, token)| token)
}

/// Produces tagged tokens for a piece of text
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        (**self).tag(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_excludes_root_self_reference() {
        let tokens = vec![
            TaggedToken::new("crush", "crush", PartOfSpeech::Verb, DependencyRole::Root, 0),
            TaggedToken::new("it", "it", PartOfSpeech::Pronoun, DependencyRole::DirectObject, 0),
        ];

        let kids: Vec<&str> = children(&tokens, 0).map(|t| t.text.as_str()).collect();
        assert_eq!(kids, vec!["it"]);
        assert_eq!(children(&tokens, 1).count(), 0);
    }

    #[test]
    fn test_object_like_roles() {
        assert!(DependencyRole::DirectObject.is_object_like());
        assert!(DependencyRole::Attribute.is_object_like());
        assert!(!DependencyRole::Subject.is_object_like());
        assert!(!DependencyRole::PrepositionalObject.is_object_like());
    }
}
