pub mod assembly;
pub mod normalize;
pub mod ranking;
pub mod sentences;
pub mod stopwords;
pub mod words;

use tracing::debug;

use crate::dictionary::{NoWordLinks, WordLinkLookup};
use crate::fetch::{fetch_page, FetchConfig};
use crate::page::{HtmlNodeSelector, NodeSelector, Page};
use crate::types::{Article, ExtractError, SourceError};

pub use assembly::{assemble, ArticleParts};
pub use normalize::{contains_cjk, normalize_nodes};
pub use ranking::{rank_order, rank_words, resolve_link, top_n, TOP_N};
pub use sentences::{split_sentences, SENTENCE_BOUNDARY};
pub use stopwords::{is_excluded, EXCLUDED_WORDS};
pub use words::{candidate_tokens, WordCounter, WordTally, MAX_EXEMPLARS, MIN_LEN};

/// Drives one page through selection, normalization, counting and ranking.
///
/// Holds no per-document state, so one extractor serves any number of calls.
pub struct ArticleExtractor<S, L> {
    selector: S,
    links: L,
}

impl Default for ArticleExtractor<HtmlNodeSelector, NoWordLinks> {
    fn default() -> Self {
        Self {
            selector: HtmlNodeSelector,
            links: NoWordLinks,
        }
    }
}

impl<S, L> ArticleExtractor<S, L>
where
    S: NodeSelector,
    L: WordLinkLookup,
{
    pub fn new(selector: S, links: L) -> Self {
        Self { selector, links }
    }

    /// Extract vocabulary from content the caller already has.
    pub fn parse_content(
        &self,
        source_url: &str,
        expression: &str,
        raw_content: Vec<u8>,
    ) -> Result<Article, ExtractError> {
        let compiled = self.selector.compile(expression)?;
        self.extract(source_url, &compiled, raw_content)
    }

    /// Fetch `source_url` and extract vocabulary from the response body.
    ///
    /// The expression is compiled before the request goes out.
    pub async fn parse_source_url(
        &self,
        source_url: &str,
        expression: &str,
        config: &FetchConfig,
    ) -> Result<Article, SourceError> {
        let compiled = self.selector.compile(expression)?;
        let fetched = fetch_page(source_url, config).await?;

        let mut article = self.extract(source_url, &compiled, fetched.body)?;
        article.source_url = source_url.to_string();
        Ok(article)
    }

    fn extract(
        &self,
        source_url: &str,
        compiled: &S::Expression,
        raw_content: Vec<u8>,
    ) -> Result<Article, ExtractError> {
        // 1. Node selection
        let page = Page::ingest(source_url, &raw_content);
        let nodes = self.selector.select(&page.html, compiled)?;

        // 2. Normalization
        let content = normalize_nodes(&nodes.texts);

        // 3-4. Sentences and word counting
        let sentences = split_sentences(&content);
        let mut counter = WordCounter::new();
        for sentence in sentences.iter().copied() {
            counter.observe_sentence(sentence);
        }

        // 5. Ranking
        let word_infos = rank_words(&counter, &self.links);

        debug!(
            target: "vocab.extract",
            nodes = nodes.texts.len(),
            sentences = sentences.len(),
            sentences_scanned = counter.sentences_scanned(),
            total_count = counter.total_count(),
            net_count = counter.net_count(),
            "extracted vocabulary"
        );

        // 6. Assembly
        Ok(assemble(ArticleParts {
            total_count: counter.total_count(),
            word_infos,
            title: nodes.title,
            page,
        }))
    }
}
