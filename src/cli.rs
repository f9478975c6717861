use std::path::PathBuf;

use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "vocab", version, about = "Rank the English vocabulary of a web page")]
pub struct Cli {
    /// URL to fetch, or a local file path with --file
    pub source: String,

    /// CSS selector for the nodes whose text is analysed
    #[arg(short, long, default_value = "p")]
    pub expr: String,

    /// Treat SOURCE as a local HTML file instead of a URL
    #[arg(long)]
    pub file: bool,

    /// Proxy for the page request
    #[arg(long)]
    pub proxy: Option<Url>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// JSON fetch config (timeout_secs, user_agent, proxy)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON object mapping words to canonical links
    #[arg(long)]
    pub links: Option<PathBuf>,

    /// Print only the top words, one per line
    #[arg(long)]
    pub top_only: bool,

    /// Pretty-print the JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
