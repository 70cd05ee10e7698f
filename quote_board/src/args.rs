//! Command-line arguments for the quote board.
//!
//! This module defines the CLI interface using `clap`. Every feed option can also be
//! set from the environment. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_feed::OutputFormat;
use quote_feed::QuoteError;
use quote_feed::query::{DEFAULT_FEED_URL, DEFAULT_FIELDS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Request prefix; the typed symbols are appended to it.
    #[clap(long, env = "QUOTE_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Field list appended after the symbols.
    #[clap(long, env = "QUOTE_FEED_FIELDS", default_value = DEFAULT_FIELDS, allow_hyphen_values = true)]
    pub fields: String,

    /// HTTP timeout in seconds.
    #[clap(long, env = "QUOTE_FEED_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,

    /// How results are printed.
    #[clap(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Symbols to look up once. Without them the interactive keyboard starts.
    pub symbols: Vec<String>,
}

impl Args {
    /// Request timeout; zero is rejected.
    pub fn timeout(&self) -> Result<Duration, QuoteError> {
        if self.timeout_secs == 0 {
            return Err(QuoteError::InvalidConfig(
                "--timeout-secs must be greater than zero".to_string(),
            ));
        }
        Ok(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_csv_feed() {
        let args = Args::try_parse_from(["quote_board"]).unwrap();
        assert_eq!(args.feed_url, DEFAULT_FEED_URL);
        assert_eq!(args.fields, DEFAULT_FIELDS);
        assert_eq!(args.format, OutputFormat::Html);
        assert!(args.symbols.is_empty());
        assert_eq!(args.timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn symbols_and_format() {
        let args =
            Args::try_parse_from(["quote_board", "--format", "json", "AAPL", "MSFT"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.symbols, ["AAPL", "MSFT"]);
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let args = Args::try_parse_from(["quote_board", "--timeout-secs", "0"]).unwrap();
        assert!(matches!(args.timeout(), Err(QuoteError::InvalidConfig(_))));
    }
}
