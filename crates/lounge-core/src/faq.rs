//! FAQ matching - keyword scoring over curated entries

use crate::entities::FaqEntry;

/// Minimum keyword hits before an entry counts as a match
const MIN_SCORE: usize = 1;

/// Pick the best FAQ entry for a free-form question.
///
/// Scores each entry by how many of its keywords appear as words in the
/// question (case-insensitive). Ties go to the earlier entry. Returns None
/// when nothing scores.
pub fn best_match<'a>(question: &str, entries: &'a [FaqEntry]) -> Option<&'a FaqEntry> {
    let words: Vec<String> = question
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    entries
        .iter()
        .map(|entry| {
            let score = entry
                .keywords
                .iter()
                .filter(|kw| words.iter().any(|w| w == *kw))
                .count();
            (entry, score)
        })
        .filter(|(_, score)| *score >= MIN_SCORE)
        // Strict comparison keeps the first of equally scored entries
        .fold(None, |best: Option<(&FaqEntry, usize)>, (entry, score)| {
            match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((entry, score)),
            }
        })
        .map(|(entry, _)| entry)
}
