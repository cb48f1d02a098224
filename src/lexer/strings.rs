use crate::error::{ChompError, ChompErrorKind};

/// Transcribe one quoted string starting at `pos` (any of `'`, `"`, a
/// backtick) into a double-quoted JSON string appended to `out`. Returns the
/// offset just past the closing quote.
///
/// Escapes are rewritten, not decoded: the recognized JSON escapes pass
/// through, quote escapes that JSON does not know (`\'`, backtick) lose the
/// backslash, and anything else is passed through verbatim so the downstream
/// decoder gets the final say.
pub(crate) fn transcribe_string(
    input: &str,
    pos: usize,
    out: &mut String,
) -> Result<usize, ChompError> {
    let bytes = input.as_bytes();
    let quote = bytes[pos];
    out.push('"');
    let mut i = pos + 1;
    let mut run = i;
    loop {
        let Some(&b) = bytes.get(i) else {
            return Err(ChompError::new(ChompErrorKind::UnexpectedEnd, input.len()));
        };
        match b {
            b'\\' => {
                out.push_str(&input[run..i]);
                let Some(&esc) = bytes.get(i + 1) else {
                    return Err(ChompError::new(ChompErrorKind::UnexpectedEnd, input.len()));
                };
                match esc {
                    b'\'' | b'`' => {
                        out.push(esc as char);
                        i += 2;
                    }
                    b'"' => {
                        out.push_str("\\\"");
                        i += 2;
                    }
                    b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                        out.push('\\');
                        out.push(esc as char);
                        i += 2;
                    }
                    b'u' if i + 6 <= bytes.len()
                        && bytes[i + 2..i + 6].iter().all(u8::is_ascii_hexdigit) =>
                    {
                        out.push_str(&input[i..i + 6]);
                        i += 6;
                    }
                    b'\n' | b'\r' => {
                        return Err(ChompError::new(ChompErrorKind::NewlineInString, i + 1));
                    }
                    _ => {
                        // Not a recognized escape: keep the backslash and let
                        // the escaped byte flow through the normal path.
                        out.push('\\');
                        i += 1;
                    }
                }
                run = i;
            }
            _ if b == quote => {
                out.push_str(&input[run..i]);
                out.push('"');
                return Ok(i + 1);
            }
            b'"' => {
                out.push_str(&input[run..i]);
                out.push_str("\\\"");
                i += 1;
                run = i;
            }
            b'\n' => {
                return Err(ChompError::new(ChompErrorKind::NewlineInString, i));
            }
            0x00..=0x1F => {
                out.push_str(&input[run..i]);
                push_control_escape(out, b);
                i += 1;
                run = i;
            }
            _ => i += 1,
        }
    }
}

/// Append `s` to `out` as a double-quoted JSON string, escaping as needed.
/// Safe runs are flushed as whole slices; the common case writes one slice.
pub(crate) fn emit_json_string(out: &mut String, s: &str) {
    out.push('"');
    let bytes = s.as_bytes();
    let mut run = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let escaped: Option<&str> = match b {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x00..=0x1F => None,
            _ => continue,
        };
        out.push_str(&s[run..i]);
        match escaped {
            Some(e) => out.push_str(e),
            None => push_control_escape(out, b),
        }
        run = i + 1;
    }
    out.push_str(&s[run..]);
    out.push('"');
}

fn push_control_escape(out: &mut String, b: u8) {
    match b {
        0x08 => out.push_str("\\b"),
        0x09 => out.push_str("\\t"),
        0x0A => out.push_str("\\n"),
        0x0C => out.push_str("\\f"),
        0x0D => out.push_str("\\r"),
        _ => {
            out.push_str("\\u00");
            const HEX: &[u8; 16] = b"0123456789abcdef";
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
}

/// Skip a quoted run starting at `i` without emitting anything; used while
/// seeking between literals and inside opaque expression values. Returns the
/// offset just past the closing quote, or `bytes.len()` when unterminated.
pub(crate) fn skip_quoted_raw(bytes: &[u8], i: usize) -> usize {
    let quote = bytes[i];
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}
