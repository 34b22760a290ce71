//! Event records (`E`), free-form notable occurrences during a run.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::header::RecordHeader;
use super::reader;
use super::TypeCode;

/// A named event raised by a test, with its scenario and message (`E`).
///
/// Events carry no timing; their trailing fields are the name of the
/// test case that raised them and a descriptive message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventRecord {
    pub header: RecordHeader,
    pub test_case_name: String,
    pub message: String,
}

impl EventRecord {
    pub const TYPE_CODE: TypeCode = TypeCode::Event;
    pub(crate) const MIN_FIELDS: usize = 5;

    pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            header: RecordHeader::new(name, clock),
            ..Self::default()
        }
    }

    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.header.base_fields(Self::TYPE_CODE);
        fields.push(self.test_case_name.clone());
        fields.push(self.message.clone());
        fields
    }

    pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
        let header = RecordHeader::from_fields(Self::TYPE_CODE, fields)?;
        reader::ensure_min(fields, Self::MIN_FIELDS)?;
        Ok(Self {
            header,
            test_case_name: reader::string_at(fields, 3)?,
            message: reader::string_at(fields, 4)?,
        })
    }
}
