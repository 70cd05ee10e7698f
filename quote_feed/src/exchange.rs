//! Stock exchanges known to the board and the currency symbol shown for each.

use strum_macros::{Display, EnumString};

/// Exchange codes as reported by the feed.
///
/// Matching is exact and case-sensitive; anything else has no currency.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Display, EnumString, Eq, PartialEq)]
pub enum Exchange {
    NasdaqNM,
    NYSE,
    Brussels,
    Paris,
    SES,
    London,
    HKSE,
    NCM,
}

impl Exchange {
    /// Currency symbol appended to prices listed on this exchange.
    pub fn currency(self) -> &'static str {
        match self {
            Exchange::NasdaqNM | Exchange::NYSE => "$",
            Exchange::Brussels | Exchange::Paris => "EUR",
            Exchange::SES => "S$",
            Exchange::London => "p",
            Exchange::HKSE => "HK$",
            Exchange::NCM => "AU$",
        }
    }
}

/// Currency symbol for an unquoted exchange code, or `""` when the code is unknown.
pub fn resolve_currency(code: &str) -> &'static str {
    code.parse::<Exchange>()
        .map(Exchange::currency)
        .unwrap_or("")
}
