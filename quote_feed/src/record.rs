//! Splitting one line of the CSV quote feed into a `QuoteRecord`.
//!
//! The feed answers with one line per requested symbol and a fixed field list
//! (`nl1pdj1xe1s`): name, last price, previous close, dividend, market cap,
//! exchange, error indication and symbol. Only the company name may contain commas
//! (`"Canon, Inc America"`), so the line is cut from the right: the first 7 commas
//! found from the end delimit fields 7 down to 1 and whatever is left is the name.
use std::str::FromStr;

use log::debug;

use crate::error::QuoteError;
use crate::result::Result;

/// Number of positional fields in a record.
pub const FIELD_COUNT: usize = 8;

/// Error indication sent by the feed when the symbol was found.
pub const NO_ERROR_MARKER: &str = "\"N/A\"";

/// Positions of the fields inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Quoted company name.
    Name,
    /// Last trade price.
    Price,
    /// Previous close.
    PreviousClose,
    /// Dividend per share.
    Dividend,
    /// Market capitalisation.
    MarketCap,
    /// Quoted exchange code.
    Exchange,
    /// Error indication, `"N/A"` when there is no error.
    Error,
    /// Ticker symbol as echoed by the feed.
    Symbol,
}

impl Field {
    /// Every field, in feed order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Price,
        Field::PreviousClose,
        Field::Dividend,
        Field::MarketCap,
        Field::Exchange,
        Field::Error,
        Field::Symbol,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// One company's quote, exactly as the feed sent it (quotes included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    fields: [String; FIELD_COUNT],
}

impl QuoteRecord {
    /// Split a raw line into 8 fields, keeping commas inside the name.
    ///
    /// Returns `QuoteError::MalformedRecord` when the line holds fewer than 7 commas.
    pub fn split(line: &str) -> Result<Self> {
        let mut fields: [String; FIELD_COUNT] = Default::default();
        let mut end = line.len();
        let mut commas = 0;

        for (idx, _) in line.rmatch_indices(',').take(FIELD_COUNT - 1) {
            fields[FIELD_COUNT - 1 - commas] = line[idx + 1..end].to_string();
            end = idx;
            commas += 1;
        }

        if commas < FIELD_COUNT - 1 {
            return Err(QuoteError::MalformedRecord {
                commas,
                line: line.to_string(),
            });
        }
        fields[Field::Name.index()] = line[..end].to_string();
        debug!("Split record: {:?}", fields);

        Ok(QuoteRecord { fields })
    }

    /// Raw field, quotes included.
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Company name without its surrounding quotes.
    pub fn name(&self) -> &str {
        unquote(self.field(Field::Name))
    }

    /// Exchange code without its surrounding quotes.
    pub fn exchange(&self) -> &str {
        unquote(self.field(Field::Exchange))
    }

    /// Ticker symbol without its surrounding quotes.
    pub fn symbol(&self) -> &str {
        unquote(self.field(Field::Symbol))
    }

    /// `true` when the feed reported the symbol as unknown.
    pub fn is_not_found(&self) -> bool {
        self.field(Field::Error) != NO_ERROR_MARKER
    }
}

impl FromStr for QuoteRecord {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::split(s)
    }
}

/// Strip one pair of surrounding double quotes, if present.
pub fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const APPLE: &str = r#""Apple Inc.",150.00,148.00,"0.88","2.5T","NasdaqNM","N/A","AAPL""#;

    #[test]
    fn splits_plain_line() {
        let record = QuoteRecord::split(APPLE).unwrap();
        assert_eq!(record.field(Field::Name), "\"Apple Inc.\"");
        assert_eq!(record.field(Field::Price), "150.00");
        assert_eq!(record.field(Field::PreviousClose), "148.00");
        assert_eq!(record.field(Field::Dividend), "\"0.88\"");
        assert_eq!(record.field(Field::MarketCap), "\"2.5T\"");
        assert_eq!(record.exchange(), "NasdaqNM");
        assert!(!record.is_not_found());
        assert_eq!(record.symbol(), "AAPL");
    }

    #[test]
    fn keeps_commas_in_company_name() {
        let line = r#""Canon, Inc America",30.10,29.90,N/A,40.1B,"NYSE","N/A","CAJ""#;
        let record: QuoteRecord = line.parse().unwrap();
        assert_eq!(record.name(), "Canon, Inc America");
        assert_eq!(record.field(Field::Price), "30.10");
    }

    #[test]
    fn empty_trailing_fields_are_kept() {
        let record = QuoteRecord::split("\"X\",1,2,3,4,5,6,").unwrap();
        assert_eq!(record.field(Field::Symbol), "");
        assert_eq!(record.field(Field::Error), "6");
    }

    #[test]
    fn too_few_commas_is_malformed() {
        match QuoteRecord::split("\"Broken\",1,2,3") {
            Err(QuoteError::MalformedRecord { commas, line }) => {
                assert_eq!(commas, 3);
                assert_eq!(line, "\"Broken\",1,2,3");
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
        assert!(QuoteRecord::split("").is_err());
    }

    #[test]
    fn error_marker_other_than_na_means_not_found() {
        let line = r#""ZZZZ",0.00,N/A,N/A,N/A,"N/A","No such ticker symbol.","ZZZZ""#;
        let record = QuoteRecord::split(line).unwrap();
        assert!(record.is_not_found());
        assert_eq!(record.name(), "ZZZZ");
    }

    #[test]
    fn unquote_only_strips_matching_pair() {
        assert_eq!(unquote("\"NYSE\""), "NYSE");
        assert_eq!(unquote("NYSE"), "NYSE");
        assert_eq!(unquote("\"NYSE"), "\"NYSE");
        assert_eq!(unquote("\""), "\"");
    }

    proptest! {
        #[test]
        fn recovers_name_and_trailing_fields(
            name in "[A-Za-z ,.\"&]{0,24}",
            rest in proptest::collection::vec("[A-Za-z0-9 .\"/-]{0,10}", 7),
        ) {
            let line = format!("{},{}", name, rest.join(","));
            let record = QuoteRecord::split(&line).unwrap();
            prop_assert_eq!(record.field(Field::Name), name.as_str());
            for (field, expected) in Field::ALL[1..].iter().zip(&rest) {
                prop_assert_eq!(record.field(*field), expected.as_str());
            }
        }
    }
}
