use crate::classify::is_whitespace;
use crate::error::{ChompError, ChompErrorKind};

/// Rewrite one numeric literal starting at `pos` into JSON-legal decimal
/// form appended to `out`, returning the offset just past the token.
///
/// Accepted forms: optional sign (a lone `+` is dropped, whitespace between
/// sign and digits is collapsed), decimal integers with `_` separators,
/// `0x`/`0o`/`0b` radix literals and legacy `0`-prefixed octal (re-encoded as
/// decimal), and floats with optional leading/trailing dot and exponent.
pub(crate) fn transcribe_number(
    input: &str,
    pos: usize,
    out: &mut String,
) -> Result<usize, ChompError> {
    let bytes = input.as_bytes();
    let mut i = pos;
    let mut neg = false;
    match bytes.get(i) {
        Some(b'-') => {
            neg = true;
            i += 1;
        }
        Some(b'+') => i += 1,
        _ => {}
    }
    if i > pos {
        while i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        }
    }

    if bytes.get(i) == Some(&b'0') {
        let radix = match bytes.get(i + 1) {
            Some(b'x') | Some(b'X') => Some(16),
            Some(b'o') | Some(b'O') => Some(8),
            Some(b'b') | Some(b'B') => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return radix_literal(bytes, pos, i + 2, radix, neg, out);
        }
    }

    let mut int_digits = String::new();
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => {
                int_digits.push(b as char);
                i += 1;
            }
            b'_' => i += 1,
            _ => break,
        }
    }

    let mut frac: Option<String> = None;
    if bytes.get(i) == Some(&b'.')
        && (!int_digits.is_empty() || matches!(bytes.get(i + 1), Some(b'0'..=b'9')))
    {
        i += 1;
        let mut digits = String::new();
        while let Some(&b) = bytes.get(i) {
            match b {
                b'0'..=b'9' => {
                    digits.push(b as char);
                    i += 1;
                }
                b'_' => i += 1,
                _ => break,
            }
        }
        frac = Some(digits);
    }

    if int_digits.is_empty() && frac.is_none() {
        return Err(ChompError::new(ChompErrorKind::MalformedNumber, pos));
    }

    let mut exp: Option<String> = None;
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut text = String::new();
        text.push(bytes[i] as char);
        let mark = i;
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            text.push(bytes[j] as char);
            j += 1;
        }
        let mut any = false;
        while let Some(&b) = bytes.get(j) {
            match b {
                b'0'..=b'9' => {
                    text.push(b as char);
                    any = true;
                    j += 1;
                }
                b'_' => j += 1,
                _ => break,
            }
        }
        if !any {
            return Err(ChompError::new(ChompErrorKind::MalformedNumber, mark));
        }
        exp = Some(text);
        i = j;
    }

    // Legacy octal: a multi-digit integer run that starts with 0 and stays
    // within 0..7 re-encodes as decimal.
    if frac.is_none()
        && exp.is_none()
        && int_digits.len() > 1
        && int_digits.as_bytes()[0] == b'0'
        && int_digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        let mut value: u128 = 0;
        for b in int_digits.bytes() {
            value = value
                .checked_mul(8)
                .and_then(|v| v.checked_add(u128::from(b - b'0')))
                .ok_or_else(|| ChompError::new(ChompErrorKind::MalformedNumber, pos))?;
        }
        push_integer(out, neg, value);
        return Ok(i);
    }

    if frac.is_none() && exp.is_none() {
        // Sign on integer zero is dropped.
        if neg && !int_digits.bytes().all(|b| b == b'0') {
            out.push('-');
        }
        out.push_str(&int_digits);
        return Ok(i);
    }

    if neg {
        out.push('-');
    }
    if int_digits.is_empty() {
        out.push('0');
    } else {
        out.push_str(&int_digits);
    }
    if let Some(digits) = frac {
        out.push('.');
        if digits.is_empty() {
            out.push('0');
        } else {
            out.push_str(&digits);
        }
    }
    if let Some(text) = exp {
        out.push_str(&text);
    }
    Ok(i)
}

fn radix_literal(
    bytes: &[u8],
    err_pos: usize,
    digits_at: usize,
    radix: u128,
    neg: bool,
    out: &mut String,
) -> Result<usize, ChompError> {
    let mut i = digits_at;
    let mut any = false;
    let mut value: u128 = 0;
    while let Some(&b) = bytes.get(i) {
        let digit = match b {
            b'0'..=b'9' => u128::from(b - b'0'),
            b'a'..=b'f' => u128::from(b - b'a' + 10),
            b'A'..=b'F' => u128::from(b - b'A' + 10),
            b'_' => {
                i += 1;
                continue;
            }
            _ => break,
        };
        if digit >= radix {
            break;
        }
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| ChompError::new(ChompErrorKind::MalformedNumber, err_pos))?;
        any = true;
        i += 1;
    }
    if !any {
        return Err(ChompError::new(ChompErrorKind::MalformedNumber, err_pos));
    }
    push_integer(out, neg, value);
    Ok(i)
}

fn push_integer(out: &mut String, neg: bool, value: u128) {
    if neg && value != 0 {
        out.push('-');
    }
    out.push_str(&value.to_string());
}
