//! Field-level quoting and the line encoder.
//!
//! [`encode_field`] and [`decode_field`] implement the quoting invariant
//! for one value; [`encode_line`] composes the former over an ordered
//! field list; [`split_line`] is the simple raw splitter whose output
//! still carries the quoting (pair it with [`decode_field`] per field).

use std::borrow::Cow;

use super::error::CsvError;
use super::{COMMA, QUOTE};

fn needs_quoting(b: u8) -> bool {
    b == QUOTE || b == COMMA || b == b'\n' || b == b'\r'
}

/// Encodes one logical value into its wire representation.
///
/// Returns the input unchanged (borrowed) when no quoting is required,
/// otherwise a quote-wrapped copy with every interior quote doubled.
pub fn encode_field(value: &str) -> Cow<'_, str> {
    let mut quotes = 0;
    let mut quoting = false;
    for &b in value.as_bytes() {
        if b == QUOTE {
            quotes += 1;
        }
        if needs_quoting(b) {
            quoting = true;
        }
    }

    if !quoting {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + quotes + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Decodes one raw field back into its logical value.
///
/// A field that is not quote-delimited at both ends was never quoted and
/// passes through unchanged. Inside a quoted field every quote character
/// must be immediately followed by another quote (the pair collapses to
/// one); a lone quote is a malformed encoding.
pub fn decode_field(raw: &str) -> Result<Cow<'_, str>, CsvError> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 || bytes[0] != QUOTE || bytes[bytes.len() - 1] != QUOTE {
        return Ok(Cow::Borrowed(raw));
    }

    let interior = &raw[1..raw.len() - 1];
    if !interior.as_bytes().contains(&QUOTE) {
        return Ok(Cow::Borrowed(interior));
    }

    let mut out = String::with_capacity(interior.len());
    let mut rest = interior;
    loop {
        match rest.find('"') {
            None => {
                out.push_str(rest);
                break;
            }
            Some(i) => {
                out.push_str(&rest[..i]);
                if rest.as_bytes().get(i + 1) == Some(&QUOTE) {
                    out.push('"');
                    rest = &rest[i + 2..];
                } else {
                    // offset of the lone quote within the original raw field
                    let pos = 1 + (interior.len() - rest.len()) + i;
                    return Err(CsvError::BadQuoteEscape { pos });
                }
            }
        }
    }

    Ok(Cow::Owned(out))
}

/// Splits a line into its raw, still-quoted field substrings.
///
/// Commas inside quotes do not split; the quote state is a simple toggle
/// (doubled-quote resolution is [`decode_field`]'s job). An empty line
/// yields exactly one empty field; a trailing comma yields a trailing
/// empty field.
pub fn split_line(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(8);
    let mut begin = 0;
    let mut inside_quotes = false;

    for (i, b) in line.bytes().enumerate() {
        if b == COMMA {
            if !inside_quotes {
                fields.push(&line[begin..i]);
                begin = i + 1;
            }
        } else if b == QUOTE {
            inside_quotes = !inside_quotes;
        }
    }

    fields.push(&line[begin..]);
    fields
}

/// Encodes an ordered field list into one line.
///
/// Fields are joined with commas, no delimiter before the first or after
/// the last. An empty field list is a caller error.
pub fn encode_line<S: AsRef<str>>(fields: &[S]) -> Result<String, CsvError> {
    if fields.is_empty() {
        return Err(CsvError::EmptyRecord);
    }

    let mut out = String::with_capacity(64);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&encode_field(field.as_ref()));
    }
    Ok(out)
}

/// Decodes a full line into owned field values.
///
/// Convenience composition of [`split_line`] and [`decode_field`] for
/// cold paths; the hot path is [`super::LineDecoder`].
pub fn decode_line(line: &str) -> Result<Vec<String>, CsvError> {
    split_line(line)
        .into_iter()
        .map(|field| decode_field(field).map(Cow::into_owned))
        .collect()
}
