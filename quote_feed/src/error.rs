//! Error types shared between the feed library and the board binary.
//!
//! Only failures that abort a step are represented here. A symbol the feed does not
//! know, or a record without usable prices, is not an error: the formatter turns
//! those into their own `QuoteBlock` shapes.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the binary.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Nothing (or only whitespace) was submitted.
    #[error("No input detected")]
    EmptyInput,

    /// The feed could not be reached or answered with a failure status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response line did not contain the 7 separators needed for 8 fields.
    #[error("Malformed quote record ({commas} of 7 separators found): {line}")]
    MalformedRecord {
        /// Number of commas found before the scan ran out of input.
        commas: usize,
        /// The offending line, as received.
        line: String,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error from the console or standard streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding a report as JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
