use crate::classify::is_whitespace;
use crate::error::{ChompError, ChompErrorKind};
use memchr::{memchr, memchr2};

/// Skip whitespace and `//` / `/* */` comments starting at `pos`.
/// Returns the offset of the next significant byte (possibly `input.len()`).
/// An unterminated block comment is an error at the comment opener.
pub(crate) fn skip_ws_and_comments(input: &str, mut pos: usize) -> Result<usize, ChompError> {
    let bytes = input.as_bytes();
    loop {
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos + 1 >= bytes.len() || bytes[pos] != b'/' {
            return Ok(pos);
        }
        match bytes[pos + 1] {
            b'/' => {
                let rest = &bytes[pos + 2..];
                match memchr2(b'\n', b'\r', rest) {
                    Some(nl) => pos += 2 + nl + 1,
                    None => return Ok(bytes.len()),
                }
            }
            b'*' => {
                let open = pos;
                let mut off = pos + 2;
                loop {
                    match memchr(b'*', &bytes[off..]) {
                        Some(star) if off + star + 1 < bytes.len() => {
                            if bytes[off + star + 1] == b'/' {
                                pos = off + star + 2;
                                break;
                            }
                            off += star + 1;
                        }
                        _ => {
                            return Err(ChompError::new(ChompErrorKind::UnterminatedComment, open))
                        }
                    }
                }
            }
            _ => return Ok(pos),
        }
    }
}
