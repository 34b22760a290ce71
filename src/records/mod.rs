//! # Typed Record Model
//!
//! Every measurement a load test emits is one line in a timer log, and
//! every line is one record of a closed set of kinds. The first field is
//! a single-character type code that selects the kind; the set is
//! append-only and codes are never reused:
//!
//! | Code | Kind                  | Shape                          |
//! |------|-----------------------|--------------------------------|
//! | `A`  | [`ActionRecord`]      | header + timing                |
//! | `C`  | [`CustomTimerRecord`] | header + timing                |
//! | `E`  | [`EventRecord`]       | header + test case + message   |
//! | `P`  | [`PageLoadRecord`]    | header + timing                |
//! | `R`  | [`RequestRecord`]     | header + timing + 18 fields    |
//! | `T`  | [`TransactionRecord`] | header + timing + failure info |
//! | `V`  | [`CustomValueRecord`] | header + f64 value             |
//! | `W`  | [`WebVitalRecord`]    | header + f64 value             |
//!
//! ## Schema Evolution
//!
//! Kinds only ever append trailing fields. The decode side therefore
//! branches on field count: every field past a kind's minimum is applied
//! when present and defaulted when not, so logs written by old producers
//! stay readable forever. The encode side always writes the full current
//! schema.
//!
//! ## Failure Model
//!
//! Reconstruction returns [`RecordError`] values rather than panicking;
//! a batch reader counts and skips bad lines at its own policy.

mod error;
mod event;
mod header;
mod reader;
mod request;
#[cfg(test)]
mod tests;
mod timer;
mod transaction;
mod value;

pub use error::RecordError;
pub use event::EventRecord;
pub use header::{RecordHeader, Timing};
pub use request::RequestRecord;
pub use timer::{ActionRecord, CustomTimerRecord, PageLoadRecord};
pub use transaction::TransactionRecord;
pub use value::{CustomValueRecord, WebVitalRecord};

use crate::csv::{self, CsvError, Fields, LineDecoder};

/// Single-character discriminant carried as every line's first field.
///
/// The set is closed and append-only; a code, once assigned, keeps its
/// meaning forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Action,
    CustomTimer,
    Event,
    PageLoad,
    Request,
    Transaction,
    CustomValue,
    WebVital,
}

impl TypeCode {
    pub fn as_char(self) -> char {
        match self {
            TypeCode::Action => 'A',
            TypeCode::CustomTimer => 'C',
            TypeCode::Event => 'E',
            TypeCode::PageLoad => 'P',
            TypeCode::Request => 'R',
            TypeCode::Transaction => 'T',
            TypeCode::CustomValue => 'V',
            TypeCode::WebVital => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(TypeCode::Action),
            'C' => Some(TypeCode::CustomTimer),
            'E' => Some(TypeCode::Event),
            'P' => Some(TypeCode::PageLoad),
            'R' => Some(TypeCode::Request),
            'T' => Some(TypeCode::Transaction),
            'V' => Some(TypeCode::CustomValue),
            'W' => Some(TypeCode::WebVital),
            _ => None,
        }
    }
}

/// Any record kind, dispatched by type code.
///
/// The decode entry points live here: [`Record::from_fields`] for an
/// already-decoded field view and [`Record::parse_line`] for one raw
/// line buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Action(ActionRecord),
    CustomTimer(CustomTimerRecord),
    Event(EventRecord),
    PageLoad(PageLoadRecord),
    Request(RequestRecord),
    Transaction(TransactionRecord),
    CustomValue(CustomValueRecord),
    WebVital(WebVitalRecord),
}

impl Record {
    pub fn type_code(&self) -> TypeCode {
        match self {
            Record::Action(_) => TypeCode::Action,
            Record::CustomTimer(_) => TypeCode::CustomTimer,
            Record::Event(_) => TypeCode::Event,
            Record::PageLoad(_) => TypeCode::PageLoad,
            Record::Request(_) => TypeCode::Request,
            Record::Transaction(_) => TypeCode::Transaction,
            Record::CustomValue(_) => TypeCode::CustomValue,
            Record::WebVital(_) => TypeCode::WebVital,
        }
    }

    pub fn header(&self) -> &RecordHeader {
        match self {
            Record::Action(r) => &r.header,
            Record::CustomTimer(r) => &r.header,
            Record::Event(r) => &r.header,
            Record::PageLoad(r) => &r.header,
            Record::Request(r) => &r.header,
            Record::Transaction(r) => &r.header,
            Record::CustomValue(r) => &r.header,
            Record::WebVital(r) => &r.header,
        }
    }

    pub fn name(&self) -> &str {
        &self.header().name
    }

    /// Timestamp in milliseconds since the Unix epoch.
    pub fn time(&self) -> i64 {
        self.header().time
    }

    /// Serializes into the ordered field list of the current schema.
    pub fn to_fields(&self) -> Vec<String> {
        match self {
            Record::Action(r) => r.to_fields(),
            Record::CustomTimer(r) => r.to_fields(),
            Record::Event(r) => r.to_fields(),
            Record::PageLoad(r) => r.to_fields(),
            Record::Request(r) => r.to_fields(),
            Record::Transaction(r) => r.to_fields(),
            Record::CustomValue(r) => r.to_fields(),
            Record::WebVital(r) => r.to_fields(),
        }
    }

    /// Serializes into one timer-log line, ready for the log sink.
    pub fn to_line(&self) -> Result<String, CsvError> {
        csv::encode_line(&self.to_fields())
    }

    /// Rebuilds a record from a decoded field view, dispatching on the
    /// type code in field 0.
    pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
        let code_field = fields.get(0).unwrap_or_default();
        let code = match code_field {
            [c] => TypeCode::from_char(*c as char),
            _ => None,
        };

        let code = code.ok_or_else(|| RecordError::UnknownTypeCode {
            code: String::from_utf8_lossy(code_field).into_owned(),
        })?;

        Ok(match code {
            TypeCode::Action => Record::Action(ActionRecord::from_fields(fields)?),
            TypeCode::CustomTimer => Record::CustomTimer(CustomTimerRecord::from_fields(fields)?),
            TypeCode::Event => Record::Event(EventRecord::from_fields(fields)?),
            TypeCode::PageLoad => Record::PageLoad(PageLoadRecord::from_fields(fields)?),
            TypeCode::Request => Record::Request(RequestRecord::from_fields(fields)?),
            TypeCode::Transaction => Record::Transaction(TransactionRecord::from_fields(fields)?),
            TypeCode::CustomValue => Record::CustomValue(CustomValueRecord::from_fields(fields)?),
            TypeCode::WebVital => Record::WebVital(WebVitalRecord::from_fields(fields)?),
        })
    }

    /// Decodes one raw line buffer in place and rebuilds its record.
    ///
    /// This is the batch reader's entry point: the buffer and decoder are
    /// reused across lines, and a bad line surfaces as an `Err` for the
    /// caller to count or skip without aborting the batch.
    pub fn parse_line(line: &mut [u8], decoder: &mut LineDecoder) -> Result<Self, RecordError> {
        let fields = decoder.decode(line)?;
        Self::from_fields(&fields)
    }

    /// One-shot convenience over [`Record::parse_line`] for cold paths.
    pub fn parse_str(line: &str) -> Result<Self, RecordError> {
        let mut buf = line.as_bytes().to_vec();
        let mut decoder = LineDecoder::new();
        Self::parse_line(&mut buf, &mut decoder)
    }
}
