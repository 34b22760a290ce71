//! Request records (`R`), the widest and hottest kind.
//!
//! The trailing schema grew over several format revisions, so the decode
//! path branches on field count: a full-width line is read positionally
//! in one pass, anything shorter applies each optional field only when
//! present and leaves the rest at their defaults.

use crate::clock::Clock;
use crate::csv::Fields;

use super::error::RecordError;
use super::header::{RecordHeader, Timing};
use super::reader;
use super::TypeCode;

const IP_SEPARATOR: &str = "|";

/// One measured request with its network timing breakdown (`R`).
///
/// Field positions 5+ on the wire, in order: bytes_sent, bytes_received,
/// response_code, url, content_type, connect_time, send_time,
/// server_busy_time, receive_time, time_to_first_bytes,
/// time_to_last_bytes, request_id, http_method, form_data_encoding,
/// form_data, dns_time, ip_addresses, response_id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestRecord {
    pub header: RecordHeader,
    pub timing: Timing,
    pub bytes_sent: i32,
    pub bytes_received: i32,
    pub response_code: i32,
    pub url: String,
    pub content_type: String,
    pub connect_time: i32,
    pub send_time: i32,
    pub server_busy_time: i32,
    pub receive_time: i32,
    pub time_to_first_bytes: i32,
    pub time_to_last_bytes: i32,
    pub request_id: String,
    pub http_method: String,
    pub form_data_encoding: String,
    pub form_data: String,
    pub dns_time: i32,
    /// Resolved target addresses, pipe-joined on the wire.
    pub ip_addresses: Vec<String>,
    pub response_id: String,
}

impl RequestRecord {
    pub const TYPE_CODE: TypeCode = TypeCode::Request;
    /// Oldest supported schema ends after response_code.
    pub(crate) const MIN_FIELDS: usize = 8;
    /// Field count of the current full-width schema.
    const FULL_FIELDS: usize = 23;

    pub fn new(name: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            header: RecordHeader::new(name, clock),
            ..Self::default()
        }
    }

    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.header.base_fields(Self::TYPE_CODE);
        self.timing.push_fields(&mut fields);

        fields.push(self.bytes_sent.to_string());
        fields.push(self.bytes_received.to_string());
        fields.push(self.response_code.to_string());
        fields.push(self.url.clone());
        fields.push(self.content_type.clone());
        fields.push(self.connect_time.to_string());
        fields.push(self.send_time.to_string());
        fields.push(self.server_busy_time.to_string());
        fields.push(self.receive_time.to_string());
        fields.push(self.time_to_first_bytes.to_string());
        fields.push(self.time_to_last_bytes.to_string());
        fields.push(self.request_id.clone());
        fields.push(self.http_method.clone());
        fields.push(self.form_data_encoding.clone());
        fields.push(self.form_data.clone());
        fields.push(self.dns_time.to_string());
        fields.push(self.ip_addresses.join(IP_SEPARATOR));
        fields.push(self.response_id.clone());

        fields
    }

    pub fn from_fields(fields: &Fields<'_>) -> Result<Self, RecordError> {
        // type-code verification comes first so a foreign line reports a
        // mismatch rather than this kind's width requirement
        let header = RecordHeader::from_fields(Self::TYPE_CODE, fields)?;
        reader::ensure_min(fields, Self::MIN_FIELDS)?;

        let mut record = Self {
            header,
            timing: Timing::from_fields(fields)?,
            bytes_sent: reader::i32_at(fields, 5)?,
            bytes_received: reader::i32_at(fields, 6)?,
            response_code: reader::i32_at(fields, 7)?,
            ..Self::default()
        };

        if fields.len() >= Self::FULL_FIELDS {
            record.read_full(fields)?;
        } else {
            record.read_legacy(fields)?;
        }

        Ok(record)
    }

    /// Positional one-pass read of a full-width line.
    fn read_full(&mut self, fields: &Fields<'_>) -> Result<(), RecordError> {
        self.url = reader::string_at(fields, 8)?;
        self.content_type = reader::string_at(fields, 9)?;
        self.connect_time = reader::i32_at(fields, 10)?;
        self.send_time = reader::i32_at(fields, 11)?;
        self.server_busy_time = reader::i32_at(fields, 12)?;
        self.receive_time = reader::i32_at(fields, 13)?;
        self.time_to_first_bytes = reader::i32_at(fields, 14)?;
        self.time_to_last_bytes = reader::i32_at(fields, 15)?;
        self.request_id = reader::string_at(fields, 16)?;
        self.http_method = reader::string_at(fields, 17)?;
        self.form_data_encoding = reader::string_at(fields, 18)?;
        self.form_data = reader::string_at(fields, 19)?;
        self.dns_time = reader::i32_at(fields, 20)?;
        self.ip_addresses = split_ip_addresses(reader::str_at(fields, 21)?);
        self.response_id = reader::string_at(fields, 22)?;
        Ok(())
    }

    /// Reads a line from an older schema revision, applying each trailing
    /// field only when present and keeping defaults for the rest.
    fn read_legacy(&mut self, fields: &Fields<'_>) -> Result<(), RecordError> {
        let len = fields.len();

        if len > 8 {
            self.url = reader::string_at(fields, 8)?;
        }
        if len > 9 {
            self.content_type = reader::string_at(fields, 9)?;
        }
        if len > 10 {
            self.connect_time = reader::i32_at(fields, 10)?;
        }
        if len > 11 {
            self.send_time = reader::i32_at(fields, 11)?;
        }
        if len > 12 {
            self.server_busy_time = reader::i32_at(fields, 12)?;
        }
        if len > 13 {
            self.receive_time = reader::i32_at(fields, 13)?;
        }
        if len > 14 {
            self.time_to_first_bytes = reader::i32_at(fields, 14)?;
        }
        if len > 15 {
            self.time_to_last_bytes = reader::i32_at(fields, 15)?;
        }
        if len > 16 {
            self.request_id = reader::string_at(fields, 16)?;
        }
        if len > 17 {
            self.http_method = reader::string_at(fields, 17)?;
        }
        if len > 18 {
            self.form_data_encoding = reader::string_at(fields, 18)?;
        }
        if len > 19 {
            self.form_data = reader::string_at(fields, 19)?;
        }
        if len > 20 {
            self.dns_time = reader::i32_at(fields, 20)?;
        }
        if len > 21 {
            self.ip_addresses = split_ip_addresses(reader::str_at(fields, 21)?);
        }

        Ok(())
    }
}

fn split_ip_addresses(raw: &str) -> Vec<String> {
    raw.split(IP_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
