use std::cmp::Ordering;

use crate::dictionary::WordLinkLookup;
use crate::types::WordInfo;

use super::words::WordCounter;

/// Length of the top-words summary.
pub const TOP_N: usize = 50;

/// Total order: count descending, then text ascending.
pub fn rank_order(a: &WordInfo, b: &WordInfo) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text))
}

/// Turn accumulated tallies into sorted `WordInfo` records.
pub fn rank_words<L>(counter: &WordCounter<'_>, links: &L) -> Vec<WordInfo>
where
    L: WordLinkLookup + ?Sized,
{
    let mut ranked: Vec<WordInfo> = counter
        .iter()
        .map(|(text, tally)| WordInfo {
            text: text.to_string(),
            word_link: resolve_link(links, text),
            count: tally.count,
            sentence: tally.sentences.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    ranked.sort_by(rank_order);

    debug_assert!(ranked
        .windows(2)
        .all(|w| w[0].count > w[1].count || (w[0].count == w[1].count && w[0].text < w[1].text)));

    ranked
}

/// Look the word up as-is; an absent or empty link falls back to the word.
pub fn resolve_link<L>(links: &L, word: &str) -> String
where
    L: WordLinkLookup + ?Sized,
{
    links
        .word_link(word)
        .filter(|link| !link.is_empty())
        .unwrap_or(word)
        .to_string()
}

/// Texts of the first `min(n, len)` ranked words.
pub fn top_n(ranked: &[WordInfo], n: usize) -> Vec<String> {
    ranked.iter().take(n).map(|info| info.text.clone()).collect()
}
