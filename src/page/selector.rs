use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::types::ExtractError;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("TITLE_SELECTOR should compile"));

/// Text pulled out of a page by a selection expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedNodes {
    /// Inner text of every matched node, in document order.
    pub texts: Vec<String>,
    pub title: Option<String>,
}

pub trait NodeSelector {
    type Expression;

    /// Compile a selection expression. Done up front so a bad expression
    /// is reported before anything is fetched or parsed.
    fn compile(&self, expression: &str) -> Result<Self::Expression, ExtractError>;

    fn select(&self, markup: &str, expression: &Self::Expression) -> Result<SelectedNodes, ExtractError>;
}

/// CSS-selector based node selection over an html5ever parse tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlNodeSelector;

impl NodeSelector for HtmlNodeSelector {
    type Expression = Selector;

    fn compile(&self, expression: &str) -> Result<Selector, ExtractError> {
        Selector::parse(expression)
            .map_err(|e| ExtractError::invalid_expression(expression, format!("{:?}", e)))
    }

    fn select(&self, markup: &str, expression: &Selector) -> Result<SelectedNodes, ExtractError> {
        // html5ever recovers from any markup, so parsing itself cannot fail here.
        let document = Html::parse_document(markup);

        let texts = document
            .select(expression)
            .map(|el| el.text().collect::<String>())
            .collect();

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>());

        Ok(SelectedNodes { texts, title })
    }
}
