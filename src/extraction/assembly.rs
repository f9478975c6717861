use crate::page::Page;
use crate::types::{Article, WordInfo};

use super::ranking::{top_n, TOP_N};
use super::words::MIN_LEN;

pub struct ArticleParts {
    pub page: Page,
    pub title: Option<String>,
    pub total_count: usize,
    /// Already in rank order.
    pub word_infos: Vec<WordInfo>,
}

pub fn assemble(parts: ArticleParts) -> Article {
    let ArticleParts {
        page,
        title,
        total_count,
        word_infos,
    } = parts;

    Article {
        title: title.unwrap_or_default(),
        source_url: page.source_url,
        html_content: page.html,
        min_len: MIN_LEN,
        top_n: top_n(&word_infos, TOP_N),
        total_count,
        net_count: word_infos.len(),
        word_infos,
    }
}
