use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "stockdash",
    version,
    about = "Fetch and read AI stock analyses in the terminal"
)]
pub struct Cli {
    /// Backend base URL, e.g. http://localhost:8000.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Ticker to analyze right away.
    #[arg(long, value_name = "TICKER")]
    pub symbol: Option<String>,

    /// Write the analysis as a standalone HTML page and exit.
    #[arg(long, value_name = "PATH", requires = "symbol", conflicts_with = "plain")]
    pub html: Option<PathBuf>,

    /// Print the analysis as plain text and exit.
    #[arg(long, requires = "symbol")]
    pub plain: bool,

    /// Config file to read instead of ./stockdash.ron.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_flags_require_symbol() {
        assert!(Cli::try_parse_from(["stockdash", "--plain"]).is_err());
        assert!(Cli::try_parse_from(["stockdash", "--html", "out.html"]).is_err());

        let cli = Cli::try_parse_from(["stockdash", "--symbol", "aapl", "--plain"]).unwrap();
        assert_eq!(cli.symbol.as_deref(), Some("aapl"));
        assert!(cli.plain);
    }

    #[test]
    fn html_and_plain_are_exclusive() {
        let parsed = Cli::try_parse_from([
            "stockdash",
            "--symbol",
            "AAPL",
            "--plain",
            "--html",
            "out.html",
        ]);
        assert!(parsed.is_err());
    }
}
