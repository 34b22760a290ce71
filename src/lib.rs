//! # timerlog - Load-Test Measurement Log Codec
//!
//! timerlog is the record-logging substrate of a distributed load-testing
//! tool. During a test run, worker agents emit millions of small structured
//! performance samples (request timings, action timings, transaction
//! outcomes, custom measurements) that must be written to disk as fast as
//! possible and re-read in bulk during report generation. This crate
//! prioritizes:
//!
//! - **Zero-copy decoding**: field views are offset windows into the
//!   caller's line buffer, compacted in place, never copied out
//! - **Zero allocation on the hot path**: reusable span lists and buffers,
//!   borrowed passthrough for unquoted fields
//! - **Typed failures**: malformed quoting, type-code mismatches, and
//!   short field lists are distinct error values, never panics
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     Record Model (typed sample kinds)    │
//! ├─────────────────────────────────────────┤
//! │   Line Encoder │ Zero-Copy Line Decoder  │
//! ├────────────────┼────────────────────────┤
//! │      Field Codec (quoting rules)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Encode path: a record is built with a fresh timestamp from an injected
//! [`Clock`], turned into an ordered field list, and joined into one CSV
//! line handed to the log sink. Decode path: report generation feeds each
//! line buffer to a [`LineDecoder`], which scans it once, squeezes out
//! quoting artifacts in place, and yields field views the record model
//! dispatches on by type code.
//!
//! ## Wire Format
//!
//! One record per line, comma separated, no trailing delimiter:
//!
//! ```text
//! <typeCode>,<name>,<timestampMillis>[,<kind-specific fields>...]
//! ```
//!
//! A field is wrapped in double quotes iff it contains `,`, `"`, `\r`, or
//! `\n`; embedded quotes are doubled. Type codes are a closed, append-only
//! set; see [`records::TypeCode`].
//!
//! ## Quick Start
//!
//! ```
//! use timerlog::clock::FixedClock;
//! use timerlog::csv::LineDecoder;
//! use timerlog::records::{ActionRecord, Record};
//!
//! // encode path
//! let clock = FixedClock(1_700_000_000_000);
//! let mut action = ActionRecord::new("Login", &clock);
//! action.timing.run_time = 42;
//! let line = Record::Action(action).to_line().unwrap();
//! assert_eq!(line, "A,Login,1700000000000,42,false");
//!
//! // decode path
//! let mut buf = line.into_bytes();
//! let mut decoder = LineDecoder::new();
//! let record = Record::parse_line(&mut buf, &mut decoder).unwrap();
//! assert_eq!(record.name(), "Login");
//! ```
//!
//! ## Module Overview
//!
//! - [`csv`]: field codec, line encoder, and the in-place zero-copy line
//!   decoder
//! - [`records`]: the closed hierarchy of record kinds and their
//!   wire-format readers, including legacy schema fallbacks
//! - [`clock`]: injectable millisecond time source

pub mod clock;
pub mod csv;
pub mod records;

pub use clock::{Clock, FixedClock, SystemClock};
pub use csv::{CsvError, FieldSpan, Fields, LineDecoder};
pub use records::{
    ActionRecord, CustomTimerRecord, CustomValueRecord, EventRecord, PageLoadRecord, Record,
    RecordError, RecordHeader, RequestRecord, Timing, TransactionRecord, TypeCode, WebVitalRecord,
};
