//! Common wire prefix shared by every record kind.
//!
//! The first three fields of every line are fixed forever:
//! `[typeCode, name, timestamp]`. Timer-based kinds extend the prefix
//! with `[runTime, failed]` before any kind-specific fields.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::reader;
use super::TypeCode;

/// The `[typeCode, name, timestamp]` prefix common to all kinds.
///
/// `name` correlates records of the same logical measurement; `time` is
/// milliseconds since the Unix epoch, taken from the injected clock at
/// measurement time or restored from the wire on decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordHeader {
    pub name: String,
    pub time: i64,
}

impl RecordHeader {
    /// Creates a header stamped with the clock's current time.
    pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            name: name.into(),
            time: clock.now_millis(),
        }
    }

    /// Creates a header with an explicit timestamp.
    pub fn with_time(name: impl Into<String>, time: i64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }

    /// Starts the field list for a line: `[typeCode, name, timestamp]`.
    pub(crate) fn base_fields(&self, code: TypeCode) -> Vec<String> {
        let mut fields = Vec::with_capacity(24);
        fields.push(code.as_char().to_string());
        fields.push(self.name.clone());
        fields.push(self.time.to_string());
        fields
    }

    /// Restores the header, verifying the type code and timestamp.
    pub(crate) fn from_fields(code: TypeCode, fields: &Fields<'_>) -> Result<Self, RecordError> {
        let read_code = reader::str_at(fields, 0)?;
        if read_code.len() != 1 || read_code.as_bytes()[0] != code.as_char() as u8 {
            return Err(RecordError::TypeCodeMismatch {
                expected: code.as_char(),
                actual: read_code.to_owned(),
            });
        }

        let name = reader::string_at(fields, 1)?;
        let time = reader::i64_at(fields, 2)?;
        if time <= 0 {
            return Err(RecordError::InvalidTime { time });
        }

        Ok(Self { name, time })
    }
}

/// The `[runTime, failed]` extension carried by timer-based kinds at
/// field positions 3 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    /// Duration of the measured piece of work, in milliseconds.
    pub run_time: i64,
    /// Whether the measured piece of work failed.
    pub failed: bool,
}

impl Timing {
    pub(crate) fn push_fields(&self, fields: &mut Vec<String>) {
        fields.push(self.run_time.to_string());
        fields.push(self.failed.to_string());
    }

    pub(crate) fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
        let run_time = reader::i64_at(fields, 3)?;
        if run_time < 0 {
            return Err(RecordError::NegativeRunTime { run_time });
        }

        Ok(Self {
            run_time,
            failed: reader::bool_at(fields, 4)?,
        })
    }
}
