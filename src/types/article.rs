use serde::{Deserialize, Serialize};

/// Vocabulary statistics for one page.
///
/// Field names and their order are part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    /// Empty when the content was supplied directly rather than fetched.
    pub source_url: String,
    /// The original markup, untouched.
    pub html_content: String,
    pub min_len: usize,
    /// Prefix of `word_infos` texts, at most `TOP_N` long.
    #[serde(rename = "topN")]
    pub top_n: Vec<String>,
    /// Tokens that survived the contraction, stopword and length filters.
    /// Capitalized tokens are included here even though they are never ranked.
    pub total_count: usize,
    /// Number of distinct ranked words.
    pub net_count: usize,
    /// Sorted by count descending, then text ascending.
    pub word_infos: Vec<WordInfo>,
}

/// A ranked word with its usage context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    pub text: String,
    /// Canonical link for the word, or the word itself when no mapping exists.
    pub word_link: String,
    pub count: u64,
    /// Up to three distinct sentences the word was seen in, in first-seen order.
    pub sentence: Vec<String>,
}
