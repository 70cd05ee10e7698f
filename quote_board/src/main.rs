//! Quote Board — look up stock quotes from a CSV quote feed from the terminal.
//!
//! With symbols on the command line the board submits them once and prints the
//! report. Without symbols it starts an interactive keyboard: type symbols separated
//! by spaces and press Enter to look them up.
//!
//! Usage example (CLI):
//! ```bash
//! quote_board --format text AAPL MSFT BARC.L
//! QUOTE_FEED_URL=http://localhost:8080/d/quotes.csv?s= quote_board
//! ```
//!
//! Output is the markup envelope by default; see `quote_feed::report` for the other
//! renderings.
#![warn(missing_docs)]
mod args;
mod console;
mod fetcher;

use crate::args::Args;
use crate::console::Console;
use crate::fetcher::HttpFetcher;
use clap::Parser;
use log::info;
use quote_feed::QueryBuilder;
use quote_feed::QuoteError;
use std::io;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let query = QueryBuilder::new(&args.feed_url, &args.fields);
    let fetcher = HttpFetcher::new(args.timeout()?)?;
    let console = Console::new(fetcher, query, args.format);
    let mut stdout = io::stdout().lock();

    if args.symbols.is_empty() {
        info!("Starting keyboard session against {}", args.feed_url);
        console.run(io::stdin().lock(), &mut stdout)
    } else {
        console.run_once(&args.symbols.join(" "), &mut stdout)
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
