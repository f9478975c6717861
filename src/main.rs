mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use vocab_core::{Article, ArticleExtractor, FetchConfig, HtmlNodeSelector, WordLinkTable};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "vocab", error = %err, "extraction failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let links = match &cli.links {
        Some(path) => WordLinkTable::from_path(path)?,
        None => WordLinkTable::new(),
    };
    info!(target: "vocab", links = links.len(), "word link table loaded");

    let extractor = ArticleExtractor::new(HtmlNodeSelector, links);

    let article = if cli.file {
        let raw = std::fs::read(&cli.source)?;
        extractor.parse_content("", &cli.expr, raw)?
    } else {
        let mut config = match &cli.config {
            Some(path) => FetchConfig::from_path(path)?,
            None => FetchConfig::default(),
        };
        if let Some(proxy) = &cli.proxy {
            config = config.with_proxy(Some(proxy.clone()));
        }
        if let Some(timeout) = cli.timeout {
            config = config.with_timeout_secs(timeout);
        }
        extractor.parse_source_url(&cli.source, &cli.expr, &config).await?
    };

    info!(
        target: "vocab",
        total_count = article.total_count,
        net_count = article.net_count,
        "article ready"
    );
    print_article(&article, cli)
}

fn print_article(article: &Article, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.top_only {
        for word in &article.top_n {
            println!("{word}");
        }
        return Ok(());
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(article)?
    } else {
        serde_json::to_string(article)?
    };
    println!("{json}");
    Ok(())
}
