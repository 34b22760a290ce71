//! Transaction records (`T`) with their single-line stack trace format.
//!
//! A failed transaction carries its stack trace on the wire. Traces are
//! multi-line, so the encoder folds every `\n` into `\` and drops `\r`
//! to keep the record on one line; the decoder reverses the fold. An
//! empty trace field means the transaction carried no trace at all.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::header::{RecordHeader, Timing};
use super::reader;
use super::TypeCode;

/// One completed test scenario run (`T`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionRecord {
    pub header: RecordHeader,
    pub timing: Timing,
    /// Stack trace of the failure, if the run failed with one.
    pub stack_trace: Option<String>,
    /// Name of the action the run failed in, empty when unknown.
    pub failed_action_name: String,
    pub test_user_number: String,
    /// Name of the result directory holding the run's dump output.
    pub directory_name: String,
}

impl TransactionRecord {
    pub const TYPE_CODE: TypeCode = TypeCode::Transaction;
    pub(crate) const MIN_FIELDS: usize = 6;

    pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            header: RecordHeader::new(name, clock),
            ..Self::default()
        }
    }

    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.header.base_fields(Self::TYPE_CODE);
        self.timing.push_fields(&mut fields);

        let trace = match &self.stack_trace {
            None => String::new(),
            Some(t) => t.replace('\n', "\\").replace('\r', ""),
        };
        fields.push(trace);

        fields.push(self.failed_action_name.clone());
        fields.push(self.test_user_number.clone());
        fields.push(self.directory_name.clone());

        fields
    }

    pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
        let header = RecordHeader::from_fields(Self::TYPE_CODE, fields)?;
        reader::ensure_min(fields, Self::MIN_FIELDS)?;

        let mut record = Self {
            header,
            timing: Timing::from_fields(fields)?,
            ..Self::default()
        };

        let trace = reader::str_at(fields, 5)?.trim();
        if !trace.is_empty() {
            record.stack_trace = Some(trace.replace('\\', "\n"));
        }

        let len = fields.len();
        if len > 6 {
            record.failed_action_name = reader::string_at(fields, 6)?;
        }
        // user number and directory name joined the schema together, so a
        // line either has both or neither
        if len > 8 {
            record.test_user_number = reader::string_at(fields, 7)?;
            record.directory_name = reader::string_at(fields, 8)?;
        }

        Ok(record)
    }
}
