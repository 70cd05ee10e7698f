//! Transport seam between the pipeline and the quote feed.

use crate::result::Result;

/// Anything that can turn a request URL into the feed's response body.
///
/// Implementations report network or status failures as `QuoteError::Transport`.
pub trait QuoteFetcher {
    /// Perform a blocking GET of `url` and return the body as text.
    fn fetch(&self, url: &str) -> Result<String>;
}
