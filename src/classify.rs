#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x0B)
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

#[inline]
pub(crate) fn is_quote(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b'`')
}

#[inline]
pub(crate) fn is_comment_lead(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'/' && matches!(bytes.get(i + 1), Some(b'/') | Some(b'*'))
}

/// Does a number token begin at `i`? Covers a bare digit, a dot followed by a
/// digit, and a sign followed (after optional whitespace, which the number
/// scanner collapses) by either of those.
pub(crate) fn starts_number(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i) {
        Some(b'0'..=b'9') => true,
        Some(b'.') => matches!(bytes.get(i + 1), Some(b'0'..=b'9')),
        Some(b'-') | Some(b'+') => {
            let mut j = i + 1;
            while j < bytes.len() && is_whitespace(bytes[j]) {
                j += 1;
            }
            match bytes.get(j) {
                Some(b'0'..=b'9') => true,
                Some(b'.') => matches!(bytes.get(j + 1), Some(b'0'..=b'9')),
                _ => false,
            }
        }
        _ => false,
    }
}

/// Length of the identifier run starting at `i` (zero if none).
pub(crate) fn ident_run(bytes: &[u8], i: usize) -> usize {
    if i >= bytes.len() || !is_ident_start(bytes[i]) {
        return 0;
    }
    let mut j = i + 1;
    while j < bytes.len() && is_ident_continue(bytes[j]) {
        j += 1;
    }
    j - i
}
