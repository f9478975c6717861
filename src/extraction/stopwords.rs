use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words that never count as vocabulary, matched case-insensitively.
pub const EXCLUDED_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    // prepositions
    "in", "on", "at", "over", "under", "between", "from", "to", "with", "about",
    // conjunctions
    "and", "or", "but", "although", "because", "if", "unless", "since", "until",
    // auxiliary and modal verbs
    "be", "do", "have", "can", "could", "may", "might", "must", "shall", "should", "will",
    "would",
    // interjections
    "oh", "ah", "wow", "alas", "ouch", "hurrah",
    // intensifiers
    "very", "quite", "rather", "just", "so", "too", "enough", "almost", "only",
    // question and relative words
    "when", "where", "why", "how", "what", "that", "who", "whom", "whose", "which",
];

static EXCLUDED_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EXCLUDED_WORDS.iter().copied().collect());

pub fn is_excluded(word: &str) -> bool {
    EXCLUDED_SET.contains(word.to_lowercase().as_str())
}
