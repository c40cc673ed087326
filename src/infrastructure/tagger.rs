//! Rule-based tokenizer and shallow dependency tagger
//!
//! This is not a parser. It guesses parts of speech from closed-class word
//! lists and local context, de-inflects verbs, and attaches objects, subjects
//! and determiners to the nearest plausible head. That is enough to tell
//! "crushing it" from "crushing me" without loading a language model.

use crate::domain::{DependencyRole, PartOfSpeech, TaggedToken, Tagger};
use regex::Regex;
use std::sync::OnceLock;

/// Words (with internal hyphens or apostrophes) or any other single character
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+(?:[-'][\p{L}\p{N}]+)*|\S").unwrap())
}

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they", "he", "she", "it"];

const OBJECT_PRONOUNS: &[&str] = &[
    "me", "you", "us", "them", "him", "her", "it", "myself", "yourself", "himself",
    "herself", "itself", "ourselves", "themselves", "everything", "everyone", "everybody",
    "something", "someone", "somebody", "nothing", "nobody", "anything", "anyone", "mine",
    "yours", "ours", "theirs",
];

/// Words that are determiners before a content word and pronouns elsewhere
const DEMONSTRATIVES: &[&str] = &["this", "that", "these", "those", "her"];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "your", "our", "their", "his", "its", "every", "each", "some",
    "any", "no", "all", "another", "many", "several",
];

const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being", "'m", "'re", "'s"];
const HAVE_FORMS: &[&str] = &["have", "has", "had", "'ve", "'d"];
const MODALS: &[&str] = &[
    "do", "does", "did", "will", "would", "can", "could", "should", "shall", "may", "might",
    "must", "'ll", "ca", "wo",
];

const ADPOSITIONS: &[&str] = &[
    "at", "in", "on", "of", "for", "with", "to", "from", "by", "about", "into", "onto", "over",
    "under", "after", "before", "through", "during", "around", "without", "like", "against",
    "between", "across", "toward", "towards", "up", "down", "out", "off",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "because", "while", "although", "though", "if", "when",
    "since", "unless",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "never", "very", "so", "really", "too", "just", "totally", "absolutely",
    "completely", "extremely", "quite", "rather", "pretty", "always", "still", "also", "again",
    "already", "even", "only", "today", "tonight", "tomorrow", "yesterday", "now", "then",
    "here", "there", "right", "literally", "actually", "super", "seriously", "almost",
    "barely", "finally",
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("felt", "feel"),
    ("made", "make"),
    ("took", "take"),
    ("said", "say"),
    ("came", "come"),
    ("gave", "give"),
    ("left", "leave"),
    ("ran", "run"),
    ("began", "begin"),
    ("broke", "break"),
    ("lost", "lose"),
    ("won", "win"),
    ("kept", "keep"),
    ("slept", "sleep"),
    ("thought", "think"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("found", "find"),
    ("told", "tell"),
];

/// Default tagger used by the command-line application
#[derive(Debug, Clone, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        RuleTagger
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let words = tokenize(text);
        let tags = assign_parts_of_speech(&words);
        let lemmas: Vec<String> = words
            .iter()
            .zip(&tags)
            .map(|(word, pos)| lemmatize(&word.to_lowercase(), *pos))
            .collect();
        let links = attach_dependencies(&tags, &lemmas);

        words
            .into_iter()
            .zip(tags)
            .zip(lemmas)
            .zip(links)
            .map(|(((text, pos), lemma), (dep, head))| TaggedToken {
                text,
                lemma,
                pos,
                dep,
                head,
            })
            .collect()
    }
}

/// Split text into word and symbol tokens, separating clitics
fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.replace(&['\u{2019}', '\u{2018}'][..], "'");
    let mut tokens = Vec::new();

    for found in token_regex().find_iter(&normalized) {
        let word = found.as_str();
        let lower = word.to_lowercase();

        if lower.ends_with("n't") && word.len() > 3 {
            let split = word.len() - 3;
            tokens.push(word[..split].to_string());
            tokens.push(word[split..].to_string());
        } else if let Some(pos) = word.find('\'').filter(|pos| *pos > 0) {
            tokens.push(word[..pos].to_string());
            tokens.push(word[pos..].to_string());
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}

fn is_word(token: &str) -> bool {
    token.chars().any(|c| c.is_alphanumeric())
}

fn is_open_word(lower: &str) -> bool {
    is_word(lower) && closed_class(lower).is_none() && !DEMONSTRATIVES.contains(&lower)
}

fn closed_class(lower: &str) -> Option<PartOfSpeech> {
    if lower.chars().all(|c| c.is_ascii_digit()) {
        Some(PartOfSpeech::Numeral)
    } else if BE_FORMS.contains(&lower) || HAVE_FORMS.contains(&lower) || MODALS.contains(&lower)
    {
        Some(PartOfSpeech::Auxiliary)
    } else if ADVERBS.contains(&lower) {
        Some(PartOfSpeech::Adverb)
    } else if SUBJECT_PRONOUNS.contains(&lower) || OBJECT_PRONOUNS.contains(&lower) {
        Some(PartOfSpeech::Pronoun)
    } else if DETERMINERS.contains(&lower) {
        Some(PartOfSpeech::Determiner)
    } else if ADPOSITIONS.contains(&lower) {
        Some(PartOfSpeech::Adposition)
    } else if CONJUNCTIONS.contains(&lower) {
        Some(PartOfSpeech::Conjunction)
    } else {
        None
    }
}

fn symbol_class(token: &str) -> PartOfSpeech {
    let is_punct = token
        .chars()
        .all(|c| c.is_ascii_punctuation() || "\u{201C}\u{201D}\u{2026}\u{2013}\u{2014}".contains(c));
    if is_punct {
        PartOfSpeech::Punctuation
    } else {
        PartOfSpeech::Symbol
    }
}

fn is_inflected(lower: &str) -> bool {
    (lower.ends_with("ing") && lower.len() > 4) || (lower.ends_with("ed") && lower.len() > 3)
}

fn is_clause_break(token: &str, pos: PartOfSpeech) -> bool {
    pos == PartOfSpeech::Conjunction
        || (pos == PartOfSpeech::Punctuation && [".", ",", "!", "?", ";", ":"].contains(&token))
}

fn assign_parts_of_speech(words: &[String]) -> Vec<PartOfSpeech> {
    let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let mut tags: Vec<Option<PartOfSpeech>> = Vec::with_capacity(words.len());

    // Closed classes first; demonstratives depend on what follows
    for (i, lower) in lowers.iter().enumerate() {
        let tag = if !is_word(lower) {
            Some(symbol_class(lower))
        } else if DEMONSTRATIVES.contains(&lower.as_str()) {
            let before_content = lowers.get(i + 1).is_some_and(|next| is_open_word(next));
            Some(if before_content {
                PartOfSpeech::Determiner
            } else {
                PartOfSpeech::Pronoun
            })
        } else {
            closed_class(lower)
        };
        tags.push(tag);
    }

    let mut resolved: Vec<PartOfSpeech> = Vec::with_capacity(words.len());
    let mut clause_has_verb = false;

    for (i, lower) in lowers.iter().enumerate() {
        let pos = match tags[i] {
            Some(pos) => pos,
            None => classify_open_word(i, lower, &lowers, &tags, &resolved, clause_has_verb),
        };

        if is_clause_break(lower, pos) {
            clause_has_verb = false;
        } else if matches!(pos, PartOfSpeech::Verb | PartOfSpeech::Auxiliary) {
            clause_has_verb = true;
        }
        resolved.push(pos);
    }

    resolved
}

/// An inflected content word directly followed by an object ("week *crushed* me")
fn verb_ahead(index: usize, lowers: &[String], tags: &[Option<PartOfSpeech>]) -> bool {
    let Some(word) = lowers.get(index) else {
        return false;
    };
    let inflected = is_inflected(word) || word.ends_with('s');
    inflected
        && tags[index].is_none()
        && matches!(
            tags.get(index + 1),
            Some(Some(PartOfSpeech::Pronoun | PartOfSpeech::Determiner))
        )
}

fn object_follows(index: usize, lowers: &[String], tags: &[Option<PartOfSpeech>]) -> bool {
    let Some(next) = lowers.get(index + 1) else {
        return false;
    };
    match tags[index + 1] {
        Some(PartOfSpeech::Determiner) => true,
        Some(PartOfSpeech::Pronoun) => {
            OBJECT_PRONOUNS.contains(&next.as_str()) || DEMONSTRATIVES.contains(&next.as_str())
        }
        _ => false,
    }
}

fn classify_open_word(
    index: usize,
    lower: &str,
    lowers: &[String],
    tags: &[Option<PartOfSpeech>],
    resolved: &[PartOfSpeech],
    clause_has_verb: bool,
) -> PartOfSpeech {
    let next_is_open = lowers
        .get(index + 1)
        .is_some_and(|next| tags[index + 1].is_none() && is_word(next))
        && !verb_ahead(index + 1, lowers, tags);
    let nominal = if next_is_open {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    };

    let prev = (0..index)
        .rev()
        .find(|&j| resolved[j] != PartOfSpeech::Adverb);

    if let Some(j) = prev {
        let prev_lower = lowers[j].as_str();
        match resolved[j] {
            PartOfSpeech::Adposition if prev_lower == "to" => return PartOfSpeech::Verb,
            PartOfSpeech::Determiner
            | PartOfSpeech::Adposition
            | PartOfSpeech::Adjective
            | PartOfSpeech::Numeral => return nominal,
            PartOfSpeech::Pronoun if SUBJECT_PRONOUNS.contains(&prev_lower) => {
                return PartOfSpeech::Verb
            }
            PartOfSpeech::Auxiliary => {
                let copular = BE_FORMS.contains(&prev_lower) || HAVE_FORMS.contains(&prev_lower);
                return if !copular || is_inflected(lower) {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Adjective
                };
            }
            _ => {}
        }
    }

    let next_takes_object = index + 1 < lowers.len()
        && matches!(
            tags[index + 1],
            Some(PartOfSpeech::Pronoun) | Some(PartOfSpeech::Determiner)
        );
    if is_inflected(lower) && next_takes_object {
        return PartOfSpeech::Verb;
    }

    // Imperative: a bare clause-initial word followed by its object ("Crush it")
    let clause_initial = prev.map_or(true, |j| is_clause_break(&lowers[j], resolved[j]));
    if clause_initial && object_follows(index, lowers, tags) {
        return PartOfSpeech::Verb;
    }

    match prev.map(|j| resolved[j]) {
        Some(PartOfSpeech::Noun) if !clause_has_verb => PartOfSpeech::Verb,
        _ => nominal,
    }
}

fn lemmatize(lower: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Auxiliary => auxiliary_lemma(lower).to_string(),
        PartOfSpeech::Verb => verb_lemma(lower),
        _ => lower.to_string(),
    }
}

fn auxiliary_lemma(lower: &str) -> &str {
    if BE_FORMS.contains(&lower) {
        "be"
    } else if HAVE_FORMS.contains(&lower) {
        "have"
    } else {
        match lower {
            "does" | "did" => "do",
            "'ll" | "wo" => "will",
            "ca" => "can",
            other => other,
        }
    }
}

fn verb_lemma(lower: &str) -> String {
    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return base.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies").filter(|s| s.len() > 1) {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ied").filter(|s| s.len() > 1) {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ing").filter(|s| s.len() > 1) {
        return restore_stem(stem);
    }
    if let Some(stem) = lower.strip_suffix("ed").filter(|s| s.len() > 1) {
        return restore_stem(stem);
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["sh", "ch", "ss", "x", "z", "o"].iter().any(|end| stem.ends_with(end)) {
            return stem.to_string();
        }
    }
    if let Some(stem) = lower.strip_suffix('s').filter(|s| s.len() > 2 && !s.ends_with('s')) {
        return stem.to_string();
    }

    lower.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Undo consonant doubling ("stopp" -> "stop") or restore a dropped "e" ("mak" -> "make")
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 2 && chars[n - 1] == chars[n - 2] && !is_vowel(chars[n - 1]) && !"lsz".contains(chars[n - 1])
    {
        return chars[..n - 1].iter().collect();
    }

    let short_cvc = n == 3 && !is_vowel(chars[0]) && is_vowel(chars[1]) && !is_vowel(chars[2]);
    if (short_cvc && !"wxy".contains(chars[2])) || stem.ends_with('v') {
        return format!("{}e", stem);
    }

    stem.to_string()
}

/// Start and end (exclusive) of the noun phrase run containing `index`
fn phrase_bounds(tags: &[PartOfSpeech], index: usize) -> (usize, usize) {
    let in_phrase = |pos: PartOfSpeech| {
        matches!(
            pos,
            PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Numeral | PartOfSpeech::Noun
        )
    };
    let mut start = index;
    while start > 0 && in_phrase(tags[start - 1]) {
        start -= 1;
    }
    let mut end = index;
    while end < tags.len() && in_phrase(tags[end]) {
        end += 1;
    }
    (start, end)
}

fn phrase_head(tags: &[PartOfSpeech], start: usize, end: usize) -> usize {
    (start..end)
        .rev()
        .find(|&i| tags[i] == PartOfSpeech::Noun)
        .unwrap_or(end - 1)
}

/// Head of the nominal starting at `index`, if there is one
fn nominal_at(tags: &[PartOfSpeech], index: usize) -> Option<usize> {
    match tags.get(index)? {
        PartOfSpeech::Pronoun => Some(index),
        PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Numeral | PartOfSpeech::Noun => {
            let (start, end) = phrase_bounds(tags, index);
            Some(phrase_head(tags, start, end))
        }
        _ => None,
    }
}

fn skip_adverbs(tags: &[PartOfSpeech], mut index: usize) -> usize {
    while index < tags.len() && tags[index] == PartOfSpeech::Adverb {
        index += 1;
    }
    index
}

fn attach_dependencies(tags: &[PartOfSpeech], lemmas: &[String]) -> Vec<(DependencyRole, usize)> {
    let n = tags.len();
    if n == 0 {
        return Vec::new();
    }

    let root = tags
        .iter()
        .position(|pos| *pos == PartOfSpeech::Verb)
        .or_else(|| tags.iter().position(|pos| *pos == PartOfSpeech::Auxiliary))
        .or_else(|| tags.iter().position(|pos| *pos != PartOfSpeech::Punctuation))
        .unwrap_or(0);

    let mut links: Vec<(DependencyRole, usize)> = tags
        .iter()
        .map(|pos| match pos {
            PartOfSpeech::Punctuation => (DependencyRole::Punctuation, root),
            _ => (DependencyRole::Dependent, root),
        })
        .collect();

    // Determiners and modifiers hang off their noun
    let mut i = 0;
    while i < n {
        if nominal_at(tags, i).is_some() && tags[i] != PartOfSpeech::Pronoun {
            let (start, end) = phrase_bounds(tags, i);
            let head = phrase_head(tags, start, end);
            for member in start..end {
                if member != head {
                    let role = if tags[member] == PartOfSpeech::Determiner {
                        DependencyRole::Determiner
                    } else {
                        DependencyRole::Modifier
                    };
                    links[member] = (role, head);
                }
            }
            i = end;
        } else {
            i += 1;
        }
    }

    for verb in (0..n).filter(|&i| tags[i] == PartOfSpeech::Verb) {
        if let Some(object) = nominal_at(tags, verb + 1) {
            links[object] = (DependencyRole::DirectObject, verb);
        }

        let mut back = verb;
        while back > 0 {
            back -= 1;
            match tags[back] {
                PartOfSpeech::Adverb => {}
                PartOfSpeech::Auxiliary => links[back] = (DependencyRole::Auxiliary, verb),
                PartOfSpeech::Pronoun | PartOfSpeech::Noun => {
                    if links[back].0 == DependencyRole::Dependent {
                        links[back] = (DependencyRole::Subject, verb);
                    }
                    break;
                }
                _ => break,
            }
        }
    }

    // A copula without a main verb takes its complement as attribute
    for copula in (0..n).filter(|&i| tags[i] == PartOfSpeech::Auxiliary && lemmas[i] == "be") {
        if links[copula].0 == DependencyRole::Auxiliary {
            continue;
        }
        let next = skip_adverbs(tags, copula + 1);
        match tags.get(next) {
            Some(PartOfSpeech::Adjective) if nominal_at(tags, next).map(|h| tags[h]) != Some(PartOfSpeech::Noun) => {
                links[next] = (DependencyRole::Modifier, copula);
            }
            Some(_) => {
                if let Some(attr) = nominal_at(tags, next) {
                    links[attr] = (DependencyRole::Attribute, copula);
                }
            }
            None => {}
        }
        if let Some(subject) = (0..copula).rev().find(|&j| tags[j] != PartOfSpeech::Adverb) {
            if matches!(tags[subject], PartOfSpeech::Pronoun | PartOfSpeech::Noun)
                && links[subject].0 == DependencyRole::Dependent
            {
                links[subject] = (DependencyRole::Subject, copula);
            }
        }
    }

    for adposition in (0..n).filter(|&i| tags[i] == PartOfSpeech::Adposition) {
        if let Some(object) = nominal_at(tags, adposition + 1) {
            if links[object].0 == DependencyRole::Dependent {
                links[object] = (DependencyRole::PrepositionalObject, adposition);
            }
        }
    }

    links[root] = (DependencyRole::Root, root);
    links
}
