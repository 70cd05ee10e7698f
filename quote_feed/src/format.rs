//! Turning one `QuoteRecord` into a displayable `QuoteBlock`.
//!
//! The formatter is pure: it never fails and never touches shared state. Feed-side
//! problems are folded into the block shape instead:
//! - error indication other than `"N/A"` — `QuoteBlock::NotFound`;
//! - prices that do not parse — `QuoteBlock::DataUnavailable`;
//! - otherwise a full `QuoteBlock::Detail` with the computed change.
use log::debug;
use serde::Serialize;

use crate::exchange::resolve_currency;
use crate::record::{Field, QuoteRecord};

/// Color used for a falling price.
pub const LOSS_COLOR: &str = "#FF0000";
/// Color used for a rising price.
pub const GAIN_COLOR: &str = "#4AA02C";

/// Direction of the price change, used to pick its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStyle {
    /// Price went up.
    Gain,
    /// Price went down.
    Loss,
    /// Price did not move.
    Unchanged,
}

impl ChangeStyle {
    /// Classify a (rounded) absolute change.
    pub fn from_change(change: f64) -> Self {
        if change < 0.0 {
            ChangeStyle::Loss
        } else if change > 0.0 {
            ChangeStyle::Gain
        } else {
            ChangeStyle::Unchanged
        }
    }

    /// Font color for the change line; unchanged prices keep the default color.
    pub fn color(self) -> Option<&'static str> {
        match self {
            ChangeStyle::Gain => Some(GAIN_COLOR),
            ChangeStyle::Loss => Some(LOSS_COLOR),
            ChangeStyle::Unchanged => None,
        }
    }
}

/// Everything shown for a symbol the feed knows and prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteDetail {
    /// Company name, unquoted.
    pub name: String,
    /// Ticker symbol echoed by the feed, unquoted.
    pub symbol: String,
    /// Last price as sent by the feed.
    pub price: String,
    /// Currency symbol for the exchange, possibly empty.
    pub currency: String,
    /// Absolute change against the previous close, rounded to 3 decimals.
    pub change: f64,
    /// Relative change in percent, rounded to 3 decimals.
    pub change_percent: f64,
    /// Direction of `change`.
    pub style: ChangeStyle,
    /// Dividend field as sent.
    pub dividend: String,
    /// Market capitalisation field as sent.
    pub market_cap: String,
    /// Exchange code, unquoted.
    pub exchange: String,
}

impl QuoteDetail {
    /// Change rendered as `abs (pct%)`, with an explicit `+` on gains' percentage.
    pub fn change_text(&self) -> String {
        let sign = if self.style == ChangeStyle::Gain { "+" } else { "" };
        format!("{:.3} ({}{:.3}%)", self.change, sign, self.change_percent)
    }
}

/// Displayable outcome for one response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteBlock {
    /// Full quote.
    Detail(QuoteDetail),
    /// Symbol found but price data missing.
    DataUnavailable {
        /// Company name, unquoted.
        name: String,
    },
    /// The feed did not recognise the symbol.
    NotFound {
        /// Name echoed by the feed, unquoted.
        name: String,
    },
    /// The line could not be split into a record.
    Malformed {
        /// The raw line.
        line: String,
    },
}

impl QuoteBlock {
    /// Markup for this block, as shown inside the report envelope.
    pub fn to_markup(&self) -> String {
        match self {
            QuoteBlock::Detail(detail) => {
                let change = match detail.style.color() {
                    Some(color) => format!(
                        "<font color = '{}'>{}</font>",
                        color,
                        detail.change_text()
                    ),
                    None => detail.change_text(),
                };
                format!(
                    "<u>{}</u><br />Price: {}{}<br />Change: {}<br />Dividends: {}<br />\
                     Market Cap: {}<br />Stock Exchange: {}<br /><br />",
                    detail.name,
                    detail.price,
                    detail.currency,
                    change,
                    detail.dividend,
                    detail.market_cap,
                    detail.exchange
                )
            }
            QuoteBlock::DataUnavailable { name } => {
                format!("Data unavailable for {}. <br /><br />", name)
            }
            QuoteBlock::NotFound { name } => format!("{} not found. <br /><br />", name),
            QuoteBlock::Malformed { line } => {
                format!("Malformed quote data: {}. <br /><br />", line)
            }
        }
    }

    /// Plain terminal rendering, one field per line.
    pub fn to_plain_text(&self) -> String {
        match self {
            QuoteBlock::Detail(detail) => {
                let marker = match detail.style {
                    ChangeStyle::Gain => " ▲",
                    ChangeStyle::Loss => " ▼",
                    ChangeStyle::Unchanged => "",
                };
                format!(
                    "{}\n  Price: {}{}\n  Change: {}{}\n  Dividends: {}\n  Market Cap: {}\n  Stock Exchange: {}\n",
                    detail.name,
                    detail.price,
                    detail.currency,
                    detail.change_text(),
                    marker,
                    detail.dividend,
                    detail.market_cap,
                    detail.exchange
                )
            }
            QuoteBlock::DataUnavailable { name } => format!("Data unavailable for {}.\n", name),
            QuoteBlock::NotFound { name } => format!("{} not found.\n", name),
            QuoteBlock::Malformed { line } => format!("Malformed quote data: {}.\n", line),
        }
    }
}

/// Round to 3 decimals: scale by 1000, round half away from zero, scale back.
///
/// Negative zero is folded into zero so a vanishing loss prints as `0.000`.
pub fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build the block for one record.
pub fn format_record(record: &QuoteRecord) -> QuoteBlock {
    let name = record.name().to_string();
    if record.is_not_found() {
        debug!("Feed reported {} as not found", name);
        return QuoteBlock::NotFound { name };
    }

    let prices = parse_price(record.field(Field::Price)).zip(
        parse_price(record.field(Field::PreviousClose)).filter(|previous| *previous != 0.0),
    );
    let Some((current, previous)) = prices else {
        debug!("No usable prices for {}", name);
        return QuoteBlock::DataUnavailable { name };
    };

    let delta = current - previous;
    let change = round3(delta);
    let change_percent = round3(delta / previous * 100.0);

    QuoteBlock::Detail(QuoteDetail {
        name,
        symbol: record.symbol().to_string(),
        price: record.field(Field::Price).to_string(),
        currency: resolve_currency(record.exchange()).to_string(),
        change,
        change_percent,
        style: ChangeStyle::from_change(change),
        dividend: record.field(Field::Dividend).to_string(),
        market_cap: record.field(Field::MarketCap).to_string(),
        exchange: record.exchange().to_string(),
    })
}
