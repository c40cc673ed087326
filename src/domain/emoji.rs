//! Emoji extraction and scoring

use crate::domain::analysis::{AnalysisResult, Energy, Mood};
use unicode_segmentation::UnicodeSegmentation;

/// Emoji that push an entry towards positive/high
pub const POSITIVE_EMOJIS: [&str; 15] = [
    "😄", "😃", "😁", "😊", "🙂", "😌", "😍", "🤩", "🥳", "🎉", "🔥", "💯", "✨", "❤️", "🤗",
];

/// Emoji that push an entry towards negative/high_stress
pub const NEGATIVE_EMOJIS: [&str; 12] = [
    "😩", "😭", "😓", "😔", "😢", "😞", "😫", "😡", "🤬", "💔", "😤", "💀",
];

const PRESENTATION_SELECTOR: char = '\u{FE0F}';
const VALENCE_STEP: f64 = 0.2;

/// All emoji in `text`, in order of appearance.
///
/// Works on grapheme clusters so that sequences like "❤️" or "👍🏽" come
/// out as a single emoji. A cluster that is not itself a curated emoji is
/// also searched code point by code point, so "❤️‍🔥" yields both of its
/// curated parts and a stray joiner does not hide "😊".
pub fn extract_emojis(text: &str) -> Vec<&str> {
    text.graphemes(true).flat_map(cluster_emojis).collect()
}

fn cluster_emojis(grapheme: &str) -> Vec<&str> {
    if is_curated(grapheme) {
        return vec![grapheme];
    }

    let curated: Vec<&str> = code_points(grapheme).filter(|c| is_curated(c)).collect();
    if !curated.is_empty() {
        curated
    } else if is_emoji(grapheme) {
        vec![grapheme]
    } else {
        code_points(grapheme).filter(|c| is_emoji(c)).collect()
    }
}

fn code_points(grapheme: &str) -> impl Iterator<Item = &str> {
    grapheme
        .char_indices()
        .map(move |(i, c)| &grapheme[i..i + c.len_utf8()])
}

fn is_emoji(grapheme: &str) -> bool {
    if emojis::get(grapheme).is_some() {
        return true;
    }
    let bare = grapheme.trim_end_matches(PRESENTATION_SELECTOR);
    !bare.is_empty() && bare != grapheme && emojis::get(bare).is_some()
}

fn is_curated(emoji: &str) -> bool {
    in_set(&POSITIVE_EMOJIS, emoji) || in_set(&NEGATIVE_EMOJIS, emoji)
}

fn in_set(set: &[&str], emoji: &str) -> bool {
    let bare = emoji.trim_end_matches(PRESENTATION_SELECTOR);
    set.iter()
        .any(|candidate| candidate.trim_end_matches(PRESENTATION_SELECTOR) == bare)
}

/// Count of (positive, negative) curated emoji among `emojis`
pub fn count_curated(emojis: &[&str]) -> (usize, usize) {
    emojis.iter().fold((0, 0), |(pos, neg), emoji| {
        if in_set(&POSITIVE_EMOJIS, emoji) {
            (pos + 1, neg)
        } else if in_set(&NEGATIVE_EMOJIS, emoji) {
            (pos, neg + 1)
        } else {
            (pos, neg)
        }
    })
}

/// Decide by emoji majority, or abstain on a tie (including no curated emoji).
pub fn emoji_stage(text: &str) -> Option<AnalysisResult> {
    let emojis = extract_emojis(text);
    if emojis.is_empty() {
        return None;
    }

    let (pos_count, neg_count) = count_curated(&emojis);

    if neg_count > pos_count && neg_count > 0 {
        Some(AnalysisResult::new(Mood::Negative, Energy::HighStress))
    } else if pos_count > neg_count && pos_count > 0 {
        Some(AnalysisResult::new(Mood::Positive, Energy::High))
    } else {
        None
    }
}

/// Emoji sentiment in [-1, 1]: +0.2 per positive, -0.2 per negative emoji.
pub fn emoji_valence(text: &str) -> f64 {
    let emojis = extract_emojis(text);
    if emojis.is_empty() {
        return 0.0;
    }

    let (pos_count, neg_count) = count_curated(&emojis);
    let score = VALENCE_STEP * pos_count as f64 - VALENCE_STEP * neg_count as f64;
    score.clamp(-1.0, 1.0)
}
