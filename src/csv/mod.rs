//! # CSV Line Codec
//!
//! This module provides encoding and decoding for the one-record-per-line
//! CSV dialect used by the measurement logs. The "C" stands for "comma";
//! no other delimiter is supported on this path.
//!
//! ## Quoting Rules
//!
//! | Field contains          | Wire form                         |
//! |-------------------------|-----------------------------------|
//! | none of `,` `"` CR LF   | unchanged                         |
//! | any of `,` `"` CR LF    | wrapped in `"`, inner `"` doubled |
//!
//! The rule is symmetric: `decode_field(encode_field(x)) == x` for every
//! string `x`, and encoding never quotes unnecessarily.
//!
//! ## Two Decode Strategies
//!
//! - [`split_line`] + [`decode_field`]: simple two-pass variant returning
//!   borrowed or owned field values. Fine for cold paths and tooling.
//! - [`LineDecoder`]: single-pass in-place scanner for report-generation
//!   scale (millions of lines). It mutates the line buffer, shifting
//!   surviving bytes left over consumed quote characters, and emits
//!   offset+length [`FieldSpan`] views instead of new strings.
//!
//! ## Module Structure
//!
//! - `codec`: field-level quoting/unquoting and the line encoder
//! - `scan`: the zero-copy in-place line decoder
//! - `error`: typed decode failures with byte offsets

mod codec;
mod error;
mod scan;


pub use codec::{decode_field, decode_line, encode_field, encode_line, split_line};
pub use error::CsvError;
pub use scan::{FieldSpan, Fields, LineDecoder};

pub(crate) const COMMA: u8 = b',';
pub(crate) const QUOTE: u8 = b'"';
