//! Typed field access over decoded line views.
//!
//! Thin readers mapping raw field bytes to the scalar types the record
//! kinds declare, each failure carrying the field index it occurred at.

use crate::csv::Fields;

use super::error::RecordError;

/// Fails with the kind's own minimum when the field list is too short.
pub(crate) fn ensure_min(fields: &Fields<'_>, min: usize) -> Result<(), RecordError> {
    if fields.len() < min {
        return Err(RecordError::TooFewFields {
            expected_min: min,
            actual: fields.len(),
        });
    }
    Ok(())
}

pub(crate) fn str_at<'a>(fields: &Fields<'a>, idx: usize) -> Result<&'a str, RecordError> {
    let bytes = fields.get(idx).ok_or(RecordError::TooFewFields {
        expected_min: idx + 1,
        actual: fields.len(),
    })?;
    std::str::from_utf8(bytes).map_err(|_| RecordError::InvalidUtf8 { index: idx })
}

pub(crate) fn string_at(fields: &Fields<'_>, idx: usize) -> Result<String, RecordError> {
    str_at(fields, idx).map(str::to_owned)
}

pub(crate) fn i64_at(fields: &Fields<'_>, idx: usize) -> Result<i64, RecordError> {
    let s = str_at(fields, idx)?;
    s.parse().map_err(|_| RecordError::InvalidNumber {
        index: idx,
        value: s.to_owned(),
    })
}

pub(crate) fn i32_at(fields: &Fields<'_>, idx: usize) -> Result<i32, RecordError> {
    let s = str_at(fields, idx)?;
    s.parse().map_err(|_| RecordError::InvalidNumber {
        index: idx,
        value: s.to_owned(),
    })
}

pub(crate) fn f64_at(fields: &Fields<'_>, idx: usize) -> Result<f64, RecordError> {
    let s = str_at(fields, idx)?;
    s.parse().map_err(|_| RecordError::InvalidNumber {
        index: idx,
        value: s.to_owned(),
    })
}

pub(crate) fn bool_at(fields: &Fields<'_>, idx: usize) -> Result<bool, RecordError> {
    let s = str_at(fields, idx)?;
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(RecordError::InvalidBool {
            index: idx,
            value: s.to_owned(),
        })
    }
}
