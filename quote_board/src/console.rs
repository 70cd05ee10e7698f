//! Terminal stand-in for the on-screen keyboard.
//!
//! Each line read from the console is a burst of key presses: every character is
//! typed in order (lowercase letters are upper-cased, `<` is Delete) and the end of
//! the line presses Return. `:quit` or end of input leaves the loop.
use std::io::{BufRead, Write};

use log::{info, warn};
use quote_feed::controller::{Board, KEY_ROWS, Key, handle};
use quote_feed::{OutputFormat, QueryBuilder, QuoteFetcher, Result, submit};

/// Line that ends the interactive session.
pub const QUIT_COMMAND: &str = ":quit";
/// Character standing in for the Delete key.
pub const DELETE_CHAR: char = '<';

/// Drives the board from a text console.
pub struct Console<F> {
    fetcher: F,
    query: QueryBuilder,
    format: OutputFormat,
}

impl<F: QuoteFetcher> Console<F> {
    /// Console using `fetcher` for requests built by `query`.
    pub fn new(fetcher: F, query: QueryBuilder, format: OutputFormat) -> Self {
        Console {
            fetcher,
            query,
            format,
        }
    }

    /// Submit `symbols` once and print the report.
    pub fn run_once<W: Write>(&self, symbols: &str, out: &mut W) -> Result<()> {
        let report = submit(&self.fetcher, &self.query, symbols);
        writeln!(out, "{}", report.render(self.format)?)?;
        Ok(())
    }

    /// Interactive loop over `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        print_keyboard(out)?;
        let mut board = Board::default();

        for line in input.lines() {
            let line = line?;
            if line.trim() == QUIT_COMMAND {
                break;
            }
            for key in parse_line(&line) {
                board = handle(board, key, &self.fetcher, &self.query);
            }
            if let Some(report) = &board.output {
                writeln!(out, "{}", report.render(self.format)?)?;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        info!("Keyboard session closed");
        Ok(())
    }
}

/// Key presses for one console line, ending with Return.
pub fn parse_line(line: &str) -> Vec<Key> {
    let mut keys = Vec::with_capacity(line.len() + 1);
    for c in line.chars() {
        if c == DELETE_CHAR {
            keys.push(Key::Delete);
            continue;
        }
        let c = c.to_ascii_uppercase();
        if Key::is_on_keyboard(c) {
            keys.push(Key::Char(c));
        } else {
            warn!("No key for {:?}, ignored", c);
        }
    }
    keys.push(Key::Submit);
    keys
}

fn print_keyboard<W: Write>(out: &mut W) -> Result<()> {
    for (i, row) in KEY_ROWS.iter().enumerate() {
        let keys: Vec<String> = row.chars().map(|c| format!("[{}]", c)).collect();
        let extra = match i {
            1 => " [Delete: <]",
            2 => " [Return: Enter]",
            _ => "",
        };
        writeln!(out, "{}{}", keys.join(" "), extra)?;
    }
    writeln!(out, "[        Spacebar        ]")?;
    writeln!(out, "Type symbols separated by spaces, {} to exit.", QUIT_COMMAND)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
