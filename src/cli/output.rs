//! Output formatting utilities

use crate::application::CheckReport;
use crate::domain::{JournalEntry, MoodStats};
use std::collections::BTreeMap;

/// Format a freshly saved entry
pub fn format_saved_entry(entry: &JournalEntry) -> String {
    format!(
        "\n✓ Entry saved!\n  Text: {}\n  Mood: {}\n  Energy: {}\n  Time: {}\n",
        entry.text, entry.mood, entry.energy, entry.timestamp
    )
}

/// Format a numbered list of entries, oldest first
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let mut output = format!("\n📖 Last {} entries:\n\n", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}. [{}]\n", i + 1, entry.timestamp));
        output.push_str(&format!("   Text: {}\n", entry.text));
        output.push_str(&format!(
            "   Mood: {} | Energy: {}\n\n",
            entry.mood, entry.energy
        ));
    }
    output
}

fn push_breakdown(output: &mut String, stats: &MoodStats, counts: &BTreeMap<&'static str, usize>) {
    for (label, count) in counts {
        output.push_str(&format!(
            "  {}: {} ({:.1}%)\n",
            label,
            count,
            stats.percentage(*count)
        ));
    }
}

/// Format mood and energy percentages
pub fn format_stats(stats: &MoodStats) -> String {
    if stats.is_empty() {
        return "No entries found.".to_string();
    }

    let mut output = format!("\n📊 Mood Statistics (last {} entries):\n\nMoods:\n", stats.total);
    push_breakdown(&mut output, stats, &stats.moods);
    output.push_str("\nEnergy Levels:\n");
    push_breakdown(&mut output, stats, &stats.energies);
    output
}

/// Format the result of a dry-run analysis
pub fn format_check_report(report: &CheckReport) -> String {
    format!(
        "Mood: {}\nEnergy: {}\nDecided by: {}\nCompound score: {:.3}\nEmoji valence: {:.3}\nCombined score: {:.3}\n",
        report.decision.result.mood,
        report.decision.result.energy,
        report.decision.stage,
        report.compound,
        report.emoji_valence,
        report.combined
    )
}
