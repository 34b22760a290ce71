//! Plain timer kinds: actions, custom timers, and page loads.
//!
//! All three carry nothing beyond the common header and the timing
//! extension; only the type code tells them apart on the wire.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::header::{RecordHeader, Timing};
use super::reader;
use super::TypeCode;

macro_rules! timer_record {
    ($(#[$doc:meta])* $name:ident, $code:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name {
            pub header: RecordHeader,
            pub timing: Timing,
        }

        impl $name {
            pub const TYPE_CODE: TypeCode = $code;
            pub(crate) const MIN_FIELDS: usize = 5;

            pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
                Self {
                    header: RecordHeader::new(name, clock),
                    timing: Timing::default(),
                }
            }

            pub fn to_fields(&self) -> Vec<String> {
                let mut fields = self.header.base_fields(Self::TYPE_CODE);
                self.timing.push_fields(&mut fields);
                fields
            }

            pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
                // the type code decides whether this kind applies at all,
                // so it is checked before the kind's own width requirement
                let header = RecordHeader::from_fields(Self::TYPE_CODE, fields)?;
                reader::ensure_min(fields, Self::MIN_FIELDS)?;
                Ok(Self {
                    header,
                    timing: Timing::from_fields(fields)?,
                })
            }
        }
    };
}

timer_record!(
    /// One executed action within a test scenario (`A`).
    ActionRecord,
    TypeCode::Action
);

timer_record!(
    /// A user-defined timer around an arbitrary piece of work (`C`).
    CustomTimerRecord,
    TypeCode::CustomTimer
);

timer_record!(
    /// A page-load timing measured in the browser (`P`).
    PageLoadRecord,
    TypeCode::PageLoad
);
