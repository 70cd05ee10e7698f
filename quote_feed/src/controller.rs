//! Keyboard input and submission.
//!
//! The board is a small value: the symbols typed so far plus the last report. Every
//! key press consumes the current `Board` and returns the next one, so callers never
//! share mutable state with the pipeline.
//!
//! Typing rules follow the on-screen keyboard:
//! - only digits, `A-Z`, `.` and space are accepted;
//! - no two spaces in a row;
//! - each space-separated symbol holds at most `MAX_SYMBOL_LEN` characters;
//! - Delete drops the last character; Return submits and clears the input.
use log::{error, info, warn};

use crate::error::QuoteError;
use crate::fetch::QuoteFetcher;
use crate::query::QueryBuilder;
use crate::report::Report;
use crate::result::Result;

/// Longest symbol the keyboard lets you type.
pub const MAX_SYMBOL_LEN: usize = 8;

/// Key rows of the on-screen keyboard, top to bottom. Space, Delete and Return
/// are separate keys.
pub const KEY_ROWS: [&str; 4] = ["0123456789", "QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM."];

/// A single interaction with the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Character entry, including the spacebar (`' '`).
    Char(char),
    /// Remove the last character.
    Delete,
    /// Submit the typed symbols.
    Submit,
}

impl Key {
    /// `true` for characters that have a key on the keyboard.
    pub fn is_on_keyboard(c: char) -> bool {
        c == ' ' || KEY_ROWS.iter().any(|row| row.contains(c))
    }
}

/// Symbols typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Current contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Apply a character key. Returns `false` when the keyboard rules refuse it.
    pub fn push(&mut self, c: char) -> bool {
        if !Key::is_on_keyboard(c) {
            return false;
        }
        if c == ' ' {
            if self.text.ends_with(' ') {
                return false;
            }
        } else if self.current_symbol_len() >= MAX_SYMBOL_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character, if any.
    pub fn delete(&mut self) {
        self.text.pop();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    fn current_symbol_len(&self) -> usize {
        self.text
            .rsplit(' ')
            .next()
            .map(|symbol| symbol.chars().count())
            .unwrap_or(0)
    }
}

/// State shown on screen: the input line and the last report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Symbols being typed.
    pub input: InputBuffer,
    /// Outcome of the last submission, if any.
    pub output: Option<Report>,
}

/// Apply one key press and return the resulting board.
pub fn handle<F: QuoteFetcher>(mut board: Board, key: Key, fetcher: &F, query: &QueryBuilder) -> Board {
    match key {
        Key::Char(c) => {
            if !board.input.push(c) {
                warn!("Key {:?} refused after {:?}", c, board.input.as_str());
            }
        }
        Key::Delete => board.input.delete(),
        Key::Submit => {
            let text = board.input.take();
            board.output = Some(submit(fetcher, query, &text));
        }
    }
    board
}

/// Reject empty and whitespace-only input.
pub fn validate_input(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(QuoteError::EmptyInput);
    }
    Ok(text)
}

/// Run the typed symbols through the whole pipeline.
///
/// Empty input short-circuits to `Report::NoInput` without a request; a transport
/// failure becomes `Report::Unavailable`.
pub fn submit<F: QuoteFetcher>(fetcher: &F, query: &QueryBuilder, text: &str) -> Report {
    let symbols = match validate_input(text) {
        Ok(symbols) => symbols,
        Err(_) => return Report::NoInput,
    };

    let url = query.build(symbols);
    info!("Requesting quotes: {}", url);
    match fetcher.fetch(&url) {
        Ok(body) => Report::from_response(&body),
        Err(e) => {
            error!("Quote request failed: {}", e);
            Report::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}
