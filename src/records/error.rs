//! Typed failures for record reconstruction.
//!
//! A batch reader decoding millions of lines catches these per line,
//! counts them, and moves on; none are retried and none abort the batch.

use thiserror::Error;

use crate::csv::CsvError;

/// Errors raised while rebuilding a typed record from a field list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Fewer fields than the kind's oldest supported schema requires.
    #[error("expected at least {expected_min} fields, got {actual}")]
    TooFewFields { expected_min: usize, actual: usize },

    /// The line's type code does not match the kind being reconstructed.
    #[error("read type code '{actual}' does not match the expected type code '{expected}'")]
    TypeCodeMismatch { expected: char, actual: String },

    /// The line's type code matches no kind in the dispatch table.
    #[error("unknown record type code '{code}'")]
    UnknownTypeCode { code: String },

    /// A fixed-position numeric field did not parse.
    #[error("field {index} is not a valid number: '{value}'")]
    InvalidNumber { index: usize, value: String },

    /// A fixed-position boolean field was neither "true" nor "false".
    #[error("field {index} is not a valid boolean: '{value}'")]
    InvalidBool { index: usize, value: String },

    /// A field holds bytes that are not valid UTF-8.
    #[error("field {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    /// Timestamps must be positive; zero or negative is a corrupt record.
    #[error("invalid time value: {time}")]
    InvalidTime { time: i64 },

    /// Run times are durations and cannot be negative.
    #[error("invalid run time value: {run_time}")]
    NegativeRunTime { run_time: i64 },

    /// The underlying line failed to decode.
    #[error(transparent)]
    Csv(#[from] CsvError),
}
