//!
//! Parsing, formatting and input handling for the CSV stock quote feed.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `record` — splitting a raw feed line into a fixed 8-field `QuoteRecord`.
//! - `exchange` — exchange codes and the currency symbol shown for each.
//! - `format` — turning one record into a displayable `QuoteBlock`.
//! - `query` — building the request URL from the typed symbols.
//! - `fetch` — the `QuoteFetcher` seam implemented by the transport layer.
//! - `report` — running a whole response through the pipeline and rendering it.
//! - `controller` — keyboard keys, the input buffer and the board state.
#![warn(missing_docs)]
pub mod controller;
pub mod error;
pub mod exchange;
pub mod fetch;
pub mod format;
pub mod query;
pub mod record;
pub mod report;
pub mod result;

pub use controller::{Board, Key, submit};
pub use error::QuoteError;
pub use fetch::QuoteFetcher;
pub use query::QueryBuilder;
pub use record::QuoteRecord;
pub use report::{OutputFormat, Report};
pub use result::Result;
