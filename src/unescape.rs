use crate::error::{ChompError, ChompErrorKind};
use memchr::memchr;

/// Interpret the whole input as the interior of a double-quoted string
/// literal, decoding `\uXXXX` and the JSON escape set. This is the pre-pass
/// for inputs that were transport-escaped before being embedded in a page.
/// Surrogate pairs combine; an unpaired surrogate decodes to U+FFFD; any
/// malformed escape is an error.
pub fn decode_unicode_escape(input: &str) -> Result<String, ChompError> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;
    while i < bytes.len() {
        let Some(off) = memchr(b'\\', &bytes[i..]) else {
            out.push_str(&input[i..]);
            break;
        };
        out.push_str(&input[i..i + off]);
        i += off;
        let start = i;
        let Some(&esc) = bytes.get(i + 1) else {
            return Err(ChompError::new(ChompErrorKind::InvalidUnicodeEscape, start));
        };
        i += 2;
        match esc {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let hi = read_hex4(input, i)
                    .ok_or_else(|| ChompError::new(ChompErrorKind::InvalidUnicodeEscape, start))?;
                i += 4;
                if (0xD800..=0xDBFF).contains(&hi) {
                    let lo = if input[i..].starts_with("\\u") {
                        read_hex4(input, i + 2).filter(|lo| (0xDC00..=0xDFFF).contains(lo))
                    } else {
                        None
                    };
                    match lo {
                        Some(lo) => {
                            let code =
                                0x1_0000 + ((u32::from(hi - 0xD800) << 10) | u32::from(lo - 0xDC00));
                            out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                            i += 6;
                        }
                        None => out.push('\u{FFFD}'),
                    }
                } else if (0xDC00..=0xDFFF).contains(&hi) {
                    out.push('\u{FFFD}');
                } else {
                    out.push(char::from_u32(u32::from(hi)).unwrap_or('\u{FFFD}'));
                }
            }
            _ => return Err(ChompError::new(ChompErrorKind::InvalidUnicodeEscape, start)),
        }
    }
    Ok(out)
}

fn read_hex4(input: &str, at: usize) -> Option<u16> {
    let hex = input.get(at..at + 4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}
