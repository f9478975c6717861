use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::is_excluded;

/// Shortest token that can count as a word.
pub const MIN_LEN: usize = 4;

/// Exemplar sentences kept per word.
pub const MAX_EXEMPLARS: usize = 3;

/// Sentences starting with this are leftover markup, not prose.
const MARKUP_PREFIX: &str = "<div ";

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{RIGHT_SINGLE_QUOTE}A-Za-z-]{{{MIN_LEN},}}")).expect("TOKEN_RE should compile")
});

/// Maximal runs of ASCII letters, hyphens and U+2019 at least `MIN_LEN` long.
pub fn candidate_tokens(sentence: &str) -> impl Iterator<Item = &str> + '_ {
    TOKEN_RE.find_iter(sentence).map(|m| m.as_str())
}

/// Occurrences of one word and the sentences it was first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally<'a> {
    pub count: u64,
    pub sentences: Vec<&'a str>,
}

impl<'a> WordTally<'a> {
    fn record(&mut self, sentence: &'a str) {
        self.count += 1;
        if self.sentences.len() < MAX_EXEMPLARS && !self.sentences.contains(&sentence) {
            self.sentences.push(sentence);
        }
    }
}

/// Accumulates word frequencies over the sentences of one document.
///
/// Words and exemplars borrow from the content buffer; nothing is copied
/// until ranking.
#[derive(Debug, Default)]
pub struct WordCounter<'a> {
    total_count: usize,
    sentences_scanned: usize,
    words: BTreeMap<&'a str, WordTally<'a>>,
}

impl<'a> WordCounter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_sentence(&mut self, sentence: &'a str) {
        if sentence.starts_with(MARKUP_PREFIX) || sentence.chars().count() < MIN_LEN {
            return;
        }
        self.sentences_scanned += 1;

        for token in candidate_tokens(sentence) {
            let word = token.strip_prefix('-').unwrap_or(token);

            // Contractions are dropped whole, not normalized.
            if word.contains(RIGHT_SINGLE_QUOTE) || is_excluded(word) || word.len() < MIN_LEN {
                continue;
            }

            // Counted before the proper-noun filter below.
            self.total_count += 1;

            if word.starts_with(|c: char| c.is_ascii_uppercase()) {
                continue;
            }

            self.words.entry(word).or_default().record(sentence);
        }
    }

    /// Tokens that passed the contraction, stopword and length filters.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Distinct words kept.
    pub fn net_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentences_scanned(&self) -> usize {
        self.sentences_scanned
    }

    pub fn get(&self, word: &str) -> Option<&WordTally<'a>> {
        self.words.get(word)
    }

    /// Words in ascending text order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &WordTally<'a>)> + '_ {
        self.words.iter().map(|(word, tally)| (*word, tally))
    }
}
