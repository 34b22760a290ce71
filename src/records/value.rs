//! Scalar sample kinds: custom values and web vitals.
//!
//! Both carry a single `f64` sample after the common header and share
//! their wire shape; the type code decides how a report aggregates them.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::header::RecordHeader;
use super::reader;
use super::TypeCode;

macro_rules! value_record {
    ($(#[$doc:meta])* $name:ident, $code:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            pub header: RecordHeader,
            pub value: f64,
        }

        impl $name {
            pub const TYPE_CODE: TypeCode = $code;
            pub(crate) const MIN_FIELDS: usize = 4;

            pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
                Self {
                    header: RecordHeader::new(name, clock),
                    value: 0.0,
                }
            }

            pub fn to_fields(&self) -> Vec<String> {
                let mut fields = self.header.base_fields(Self::TYPE_CODE);
                fields.push(self.value.to_string());
                fields
            }

            pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
                let header = RecordHeader::from_fields(Self::TYPE_CODE, fields)?;
                reader::ensure_min(fields, Self::MIN_FIELDS)?;
                Ok(Self {
                    header,
                    value: reader::f64_at(fields, 3)?,
                })
            }
        }
    };
}

value_record!(
    /// An arbitrary user-reported sample (`V`).
    CustomValueRecord,
    TypeCode::CustomValue
);

value_record!(
    /// A browser web-vital sample such as LCP or CLS (`W`).
    WebVitalRecord,
    TypeCode::WebVital
);
