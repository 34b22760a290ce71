//! # Zero-Copy Line Decoder
//!
//! Single-pass replacement for [`split_line`](super::split_line) +
//! [`decode_field`](super::decode_field) used on the decode side at
//! report-generation scale. It avoids copying at all cost and moves
//! through the cache efficiently:
//!
//! - Plain fields are emitted as offset windows into the untouched buffer.
//! - Quoted fields shed their bounding quotes by moving the window, not
//!   the bytes.
//! - Doubled quotes are collapsed by shifting the surviving bytes of that
//!   field leftward within the same buffer, closing the gap; no second
//!   buffer is ever allocated.
//!
//! ## State Machine
//!
//! ```text
//! start-of-field --'"'--> in-quotes --'"'+not-'"'--> after-quotes
//!       |                    |                           |
//!    plain scan          '""' keeps one,          ',' or EOL legal,
//!    to ',' / EOL        stays in-quotes          anything else errors
//! ```
//!
//! ## Ownership
//!
//! [`LineDecoder::decode`] borrows the line buffer mutably and returns
//! [`Fields`] views tied to that borrow, so a view can neither outlive the
//! buffer nor observe it being reused for the next line. Reuse the decoder
//! (it owns the span list) and the buffer across calls to amortize
//! allocation; each call starts from a cleared span list.
//!
//! ## Edge Cases
//!
//! | Input      | Fields          |
//! |------------|-----------------|
//! | ``         | `[""]`          |
//! | `a,b,`     | `["a","b",""]`  |
//! | `""`       | `[""]`          |
//! | `"a""b"`   | `["a\"b"]`      |
//! | `"a"b`     | error at 3      |
//! | `"abc`     | unclosed error  |

use smallvec::SmallVec;

use super::error::CsvError;
use super::{COMMA, QUOTE};

/// Offset+length window into a decode buffer. Never owns data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    start: u32,
    len: u32,
}

impl FieldSpan {
    fn new(start: usize, end: usize) -> Self {
        Self {
            start: start as u32,
            len: (end - start) as u32,
        }
    }

    pub fn start(&self) -> usize {
        self.start as usize
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves this window against its backing buffer.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start as usize..(self.start + self.len) as usize]
    }
}

type SpanList = SmallVec<[FieldSpan; 16]>;

/// Reusable single-pass decoder for one line buffer at a time.
///
/// The decoder owns the span list so that decoding N lines performs no
/// per-line allocation once the list has grown to the widest record seen.
#[derive(Debug, Default)]
pub struct LineDecoder {
    spans: SpanList,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self {
            spans: SpanList::new(),
        }
    }

    /// Decodes one line in place and returns views over its fields.
    ///
    /// The buffer must hold exactly one record without its line
    /// terminator. On success the buffer's field regions are compacted
    /// and the returned [`Fields`] resolve against them; on error the
    /// buffer contents are unspecified and must be refilled before the
    /// next call.
    pub fn decode<'a>(&'a mut self, line: &'a mut [u8]) -> Result<Fields<'a>, CsvError> {
        self.spans.clear();
        scan(line, &mut self.spans)?;
        Ok(Fields {
            buf: &*line,
            spans: &self.spans,
        })
    }
}

/// Field views produced by one [`LineDecoder::decode`] call.
///
/// Borrows both the compacted line buffer and the decoder's span list;
/// dropping it releases the buffer for reuse.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    buf: &'a [u8],
    spans: &'a [FieldSpan],
}

impl<'a> Fields<'a> {
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Raw bytes of field `idx`, or `None` past the end.
    pub fn get(&self, idx: usize) -> Option<&'a [u8]> {
        self.spans.get(idx).map(|span| span.slice(self.buf))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.spans.iter().map(|span| span.slice(self.buf))
    }
}

/// Runs the state machine over the whole line.
fn scan(src: &mut [u8], spans: &mut SpanList) -> Result<(), CsvError> {
    let len = src.len();

    // empty case is handled here
    if len == 0 {
        spans.push(FieldSpan::new(0, 0));
        return Ok(());
    }

    let mut pos = 0;
    while pos < len {
        if src[pos] == QUOTE {
            pos = quoted_column(src, spans, pos)?;
        } else {
            pos = plain_column(src, spans, pos);
        }
    }

    // a line ending on the delimiter carries one more empty field; field
    // compaction never writes a comma into the final byte, so checking
    // the mutated buffer here is equivalent to checking the original
    if src[len - 1] == COMMA {
        spans.push(FieldSpan::new(len, len));
    }

    Ok(())
}

/// Reads a column that started unquoted. Quotes seen here are ordinary
/// characters; the field ends at a comma or end of line. No bytes move.
fn plain_column(src: &[u8], spans: &mut SpanList, current: usize) -> usize {
    let len = src.len();
    let mut pos = current;

    while pos < len {
        if src[pos] == COMMA {
            spans.push(FieldSpan::new(current, pos));
            return pos + 1;
        }
        pos += 1;
    }

    spans.push(FieldSpan::new(current, pos));
    pos
}

/// Reads a column that started with a quote. Commas are ordinary until
/// the closing quote; a doubled quote hands off to the shifting variant.
fn quoted_column(src: &mut [u8], spans: &mut SpanList, current: usize) -> Result<usize, CsvError> {
    let len = src.len();
    let start = current + 1;
    let mut pos = start;

    while pos < len {
        if src[pos] == QUOTE {
            if peek(src, pos + 1) == Some(QUOTE) {
                // quoted quote; from here on bytes have to move, which is
                // kept out of this main path
                return escaped_column(src, spans, start, pos + 1);
            }

            // closing quote ends the field
            spans.push(FieldSpan::new(start, pos));
            pos += 1;

            return match peek(src, pos) {
                None | Some(COMMA) => Ok(pos + 1),
                Some(_) => Err(CsvError::DelimiterExpected { pos }),
            };
        }
        pos += 1;
    }

    Err(CsvError::UnclosedQuote { pos })
}

/// Finishes a quoted column after its first doubled quote, shifting the
/// surviving bytes left over each consumed quote character.
///
/// `current` is the index of the second quote of the first pair; that
/// position is the first gap, so every byte read from here on lands
/// `offset` places to the left.
fn escaped_column(
    src: &mut [u8],
    spans: &mut SpanList,
    start: usize,
    current: usize,
) -> Result<usize, CsvError> {
    let len = src.len();
    let mut pos = current + 1;
    let mut offset = 1;

    while pos < len {
        let c = src[pos];
        src[pos - offset] = c;

        if c == QUOTE {
            match peek(src, pos + 1) {
                Some(QUOTE) => {
                    // another quoted quote; the gap widens by one
                    offset += 1;
                    pos += 2;
                }
                next => {
                    if !(next.is_none() || next == Some(COMMA)) {
                        return Err(CsvError::DelimiterExpected { pos: pos + 1 });
                    }

                    // the copied closing quote sits past the window end
                    spans.push(FieldSpan::new(start, pos - offset));
                    return Ok(pos + 2);
                }
            }
        } else {
            pos += 1;
        }
    }

    Err(CsvError::UnclosedQuote { pos })
}

fn peek(src: &[u8], pos: usize) -> Option<u8> {
    src.get(pos).copied()
}
