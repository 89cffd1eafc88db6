//! Line-terminator handling over byte views.
//!
//! The host counts lines over raw bytes, so terminator recognition is
//! byte-exact: no decoding, no normalization. The recognized encodings are
//! the Unicode line terminators plus the legacy `\n\r` pair:
//!
//! | Name                | Escape | Code point | Encoding     |
//! |---------------------|--------|------------|--------------|
//! | Line feed           | `\n`   | `U+000A`   | `0A`         |
//! | Line tabulation     | `\v`   | `U+000B`   | `0B`         |
//! | Form feed           | `\f`   | `U+000C`   | `0C`         |
//! | Carriage return     | `\r`   | `U+000D`   | `0D`         |
//! | Next line           |        | `U+0085`   | `C2 85`      |
//! | Line separator      |        | `U+2028`   | `E2 80 A8`   |
//! | Paragraph separator |        | `U+2029`   | `E2 80 A9`   |
//!
//! A leading `\n\r` is consumed as one terminator (two bytes). A leading
//! `\r\n` is NOT: the `\r` alone is consumed and the `\n` stays, because
//! `\r` is matched by the single-byte case first.

use crate::slice::ByteSlice;

/// UTF-8 encoding of `U+0085` NEXT LINE.
const NEXT_LINE: &[u8] = &[0xC2, 0x85];
/// UTF-8 encoding of `U+2028` LINE SEPARATOR.
const LINE_SEPARATOR: &[u8] = &[0xE2, 0x80, 0xA8];
/// UTF-8 encoding of `U+2029` PARAGRAPH SEPARATOR.
const PARAGRAPH_SEPARATOR: &[u8] = &[0xE2, 0x80, 0xA9];

/// Strip one leading line terminator, returning the rest of the input as a
/// re-based sub-view (no copying).
///
/// Input that does not start with a terminator (including input too short
/// to complete a multi-byte terminator) is returned unchanged. Empty input
/// returns itself.
pub fn strip_leading_line_terminator(s: ByteSlice<'_>) -> ByteSlice<'_> {
    if s.is_empty() {
        return s;
    }

    match *s.get(0) {
        b'\n' => {
            if s.len() >= 2 && *s.get(1) == b'\r' {
                s.slice_from(2)
            } else {
                s.slice_from(1)
            }
        }
        0x0B | 0x0C | b'\r' => s.slice_from(1),
        0xC2 => {
            if s.len() >= 2 && s.slice(0, 2).as_bytes() == NEXT_LINE {
                s.slice_from(2)
            } else {
                s
            }
        }
        0xE2 => {
            if s.len() >= 3 {
                let prefix = s.slice(0, 3).as_bytes();
                if prefix == LINE_SEPARATOR || prefix == PARAGRAPH_SEPARATOR {
                    return s.slice_from(3);
                }
            }
            s
        }
        _ => s,
    }
}
