//! Content moderation - profanity screening for user-submitted text
//!
//! Normalizes the input (lowercase, strip punctuation to spaces) and matches
//! whole words against a block list, so "class" passes while "a**" spelled
//! out does not.

const BLOCKED_WORDS: &[&str] = &[
    "ass", "asshole", "bastard", "bitch", "cock", "crap", "cunt", "damn", "dick", "fuck",
    "fucking", "nigga", "nigger", "piss", "prick", "pussy", "shit", "slut", "twat", "whore",
];

/// Check whether `text` contains a blocked word.
pub fn contains_profanity(text: &str) -> bool {
    normalized_words(text).any(|word| BLOCKED_WORDS.binary_search(&word.as_str()).is_ok())
}

/// Screen a submission field. Returns the offending word if one is found.
pub fn find_profanity(text: &str) -> Option<String> {
    normalized_words(text).find(|word| BLOCKED_WORDS.binary_search(&word.as_str()).is_ok())
}

fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
