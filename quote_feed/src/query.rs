//! Request URL construction for the CSV quote feed.

/// Default request prefix; the symbols follow it directly.
pub const DEFAULT_FEED_URL: &str = "http://finance.yahoo.com/d/quotes.csv?s=";
/// Default field list appended after the symbols (`nl1pdj1xe1s`).
pub const DEFAULT_FIELDS: &str = "&f=nl1pdj1xe1s";

/// Builds `<prefix><symbols><suffix>` request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    prefix: String,
    suffix: String,
}

impl QueryBuilder {
    /// Builder with a custom prefix and suffix.
    pub fn new(prefix: &str, suffix: &str) -> Self {
        QueryBuilder {
            prefix: String::from(prefix),
            suffix: String::from(suffix),
        }
    }

    /// Request URL for the typed symbols.
    ///
    /// Spaces become `+`; nothing else is escaped.
    pub fn build(&self, symbols: &str) -> String {
        format!("{}{}{}", self.prefix, symbols.replace(' ', "+"), self.suffix)
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL, DEFAULT_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_for_single_symbol() {
        assert_eq!(
            QueryBuilder::default().build("AAPL"),
            "http://finance.yahoo.com/d/quotes.csv?s=AAPL&f=nl1pdj1xe1s"
        );
    }

    #[test]
    fn spaces_become_plus() {
        let query = QueryBuilder::new("http://localhost/q?s=", "&f=x");
        assert_eq!(query.build("AAPL MSFT BARC.L"), "http://localhost/q?s=AAPL+MSFT+BARC.L&f=x");
    }
}
