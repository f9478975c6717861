//! Deterministic English vocabulary extraction from web pages.
//!
//! `vocab-core` selects the readable text of a page, splits it into sentences,
//! filters tokens down to meaningful words and ranks them by frequency, with
//! up to three example sentences per word. Extraction is a pure function of
//! its inputs: identical bytes and expression produce identical output.

pub mod dictionary;
pub mod extraction;
pub mod fetch;
pub mod page;
pub mod types;

pub use dictionary::{NoWordLinks, WordLinkLookup, WordLinkTable};
pub use extraction::{ArticleExtractor, MIN_LEN, TOP_N};
pub use fetch::{fetch_page, FetchConfig, FetchError, FetchedPage};
pub use page::{HtmlNodeSelector, NodeSelector, Page, SelectedNodes};
pub use types::{Article, ExtractError, SourceError, WordInfo};

/// Extract vocabulary from already-fetched content with the default
/// HTML selector and no word links.
pub fn parse_content(source_url: &str, expression: &str, raw_content: Vec<u8>) -> Result<Article, ExtractError> {
    ArticleExtractor::default().parse_content(source_url, expression, raw_content)
}

/// Fetch a page and extract its vocabulary with the default HTML selector and
/// no word links.
pub async fn parse_source_url(
    source_url: &str,
    expression: &str,
    config: &FetchConfig,
) -> Result<Article, SourceError> {
    ArticleExtractor::default()
        .parse_source_url(source_url, expression, config)
        .await
}
