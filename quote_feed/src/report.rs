//! Running a feed response through the pipeline and rendering the result.
//!
//! A response is split on newlines; every line goes through the record
//! splitter and the formatter and yields exactly one `QuoteBlock`, in order. A line
//! that cannot be split becomes a `QuoteBlock::Malformed` instead of aborting the
//! batch.
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use log::warn;
use serde::Serialize;
use strum_macros::Display;

use crate::format::{QuoteBlock, format_record};
use crate::record::QuoteRecord;
use crate::result::Result;

/// Message shown when Return is pressed with nothing typed.
pub const NO_INPUT_MESSAGE: &str = "No input detected. Please enter at least one symbol.";

/// How a report is written out.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, PartialEq, Eq)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Markup envelope for a rich-text label.
    #[default]
    Html,
    /// Plain lines for a terminal.
    Text,
    /// Structured JSON.
    Json,
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    /// Nothing was typed; no request was made.
    NoInput,
    /// The feed answered; one block per response line.
    Quotes {
        /// When the response was processed.
        fetched_at: DateTime<Utc>,
        /// Blocks in response order.
        blocks: Vec<QuoteBlock>,
    },
    /// The feed could not be reached.
    Unavailable {
        /// Transport failure description.
        reason: String,
    },
}

impl Report {
    /// Build a `Quotes` report from a raw response body.
    pub fn from_response(body: &str) -> Self {
        Report::Quotes {
            fetched_at: Utc::now(),
            blocks: process_response(body),
        }
    }

    /// Blocks carried by the report, empty unless the feed answered.
    pub fn blocks(&self) -> &[QuoteBlock] {
        match self {
            Report::Quotes { blocks, .. } => blocks,
            _ => &[],
        }
    }

    /// Markup for a rich-text label: all blocks inside one `<html>` envelope.
    pub fn to_markup(&self) -> String {
        match self {
            Report::NoInput => NO_INPUT_MESSAGE.to_string(),
            Report::Quotes { blocks, .. } => {
                let body: String = blocks.iter().map(QuoteBlock::to_markup).collect();
                format!("<html>{}</html>", body)
            }
            Report::Unavailable { reason } => format!(
                "<html>Unable to retrieve quotes: {}. <br /><br /></html>",
                reason
            ),
        }
    }

    /// Plain text, blocks separated by blank lines.
    pub fn to_plain_text(&self) -> String {
        match self {
            Report::NoInput => format!("{}\n", NO_INPUT_MESSAGE),
            Report::Quotes { blocks, .. } => blocks
                .iter()
                .map(QuoteBlock::to_plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Unavailable { reason } => format!("Unable to retrieve quotes: {}.\n", reason),
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Html => Ok(self.to_markup()),
            OutputFormat::Text => Ok(self.to_plain_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// One block per response line, in order.
///
/// Line breaks at the end of the body are dropped; every other line, blank or not,
/// goes through the splitter.
pub fn process_response(body: &str) -> Vec<QuoteBlock> {
    let body = body.trim_end_matches(['\r', '\n']);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(process_line)
        .collect()
}

fn process_line(line: &str) -> QuoteBlock {
    match QuoteRecord::split(line) {
        Ok(record) => format_record(&record),
        Err(e) => {
            warn!("{}", e);
            QuoteBlock::Malformed {
                line: line.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LINES: &str = "\"Apple Inc.\",150.00,148.00,\"0.88\",\"2.5T\",\"NasdaqNM\",\"N/A\",\"AAPL\"\r\n\
                             \"XYZQ\",0.00,N/A,N/A,N/A,\"N/A\",\"No such ticker symbol.\",\"XYZQ\"\r\n";

    #[test]
    fn one_block_per_line_in_order() {
        let blocks = process_response(TWO_LINES);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], QuoteBlock::Detail(d) if d.symbol == "AAPL"));
        assert_eq!(blocks[1], QuoteBlock::NotFound { name: "XYZQ".into() });
    }

    #[test]
    fn malformed_line_does_not_abort_batch() {
        let body = "garbage,line\n\"XYZQ\",0.00,N/A,N/A,N/A,\"N/A\",\"No such ticker symbol.\",\"XYZQ\"\n";
        let blocks = process_response(body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], QuoteBlock::Malformed { line: "garbage,line".into() });
        assert!(matches!(blocks[1], QuoteBlock::NotFound { .. }));
    }

    #[test]
    fn trailing_line_breaks_add_no_blocks() {
        assert!(process_response("\n\r\n").is_empty());
        assert!(process_response("").is_empty());
    }

    #[test]
    fn interior_blank_line_is_its_own_malformed_block() {
        let body = "\"Apple Inc.\",150.00,148.00,\"0.88\",\"2.5T\",\"NasdaqNM\",\"N/A\",\"AAPL\"\n\
                    \n\
                    \"XYZQ\",0.00,N/A,N/A,N/A,\"N/A\",\"No such ticker symbol.\",\"XYZQ\"\n";
        let blocks = process_response(body);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], QuoteBlock::Detail(_)));
        assert_eq!(blocks[1], QuoteBlock::Malformed { line: String::new() });
        assert!(matches!(blocks[2], QuoteBlock::NotFound { .. }));
    }

    #[test]
    fn markup_is_wrapped_once() {
        let markup = Report::from_response(TWO_LINES).to_markup();
        assert!(markup.starts_with("<html><u>Apple Inc.</u>"));
        assert!(markup.ends_with("XYZQ not found. <br /><br /></html>"));
        assert_eq!(markup.matches("<html>").count(), 1);
    }

    #[test]
    fn no_input_renders_fixed_message() {
        assert_eq!(Report::NoInput.to_markup(), NO_INPUT_MESSAGE);
        assert!(Report::NoInput.blocks().is_empty());
    }

    #[test]
    fn unavailable_is_visible() {
        let report = Report::Unavailable { reason: "connection refused".into() };
        assert_eq!(
            report.to_markup(),
            "<html>Unable to retrieve quotes: connection refused. <br /><br /></html>"
        );
    }

    #[test]
    fn json_carries_status_and_blocks() {
        let json = Report::from_response(TWO_LINES).render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "quotes");
        assert_eq!(value["blocks"][0]["kind"], "detail");
        assert_eq!(value["blocks"][0]["currency"], "$");
        assert_eq!(value["blocks"][0]["style"], "gain");
        assert_eq!(value["blocks"][1]["kind"], "not_found");
        assert!(value["fetched_at"].is_string());
    }

    #[test]
    fn text_rendering_lists_fields() {
        let text = Report::from_response(TWO_LINES).render(OutputFormat::Text).unwrap();
        assert!(text.contains("Apple Inc.\n  Price: 150.00$\n  Change: 2.000 (+1.351%) ▲\n"));
        assert!(text.ends_with("XYZQ not found.\n"));
    }
}
