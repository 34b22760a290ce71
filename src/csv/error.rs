//! Typed failures for the CSV codec.
//!
//! Decoding runs at report-generation scale, so soft failures are values
//! the caller can match on and count, not unwinding. Positions are byte
//! offsets into the line being decoded.

use thiserror::Error;

/// Errors raised by the field codec and the line decoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A quoted field ran to the end of the line without a closing quote.
    #[error("quoted column not properly closed at position {pos}")]
    UnclosedQuote { pos: usize },

    /// After a closing quote, only a delimiter or end of line is legal.
    #[error("delimiter or end of line expected at position {pos}")]
    DelimiterExpected { pos: usize },

    /// Inside a quoted field, a quote character was not doubled.
    #[error("quote character at position {pos} is not followed by another quote")]
    BadQuoteEscape { pos: usize },

    /// A record must carry at least one field.
    #[error("cannot encode an empty field list")]
    EmptyRecord,
}
