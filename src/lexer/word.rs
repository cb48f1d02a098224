use super::strings::{emit_json_string, skip_quoted_raw};
use crate::classify::{ident_run, is_whitespace};

/// Value-position token that is not a string, number, or container. The three
/// JSON keywords pass through unquoted; everything else (bare identifiers,
/// `undefined`, `NaN`, functions, regexes, arbitrary expressions) becomes a
/// quoted string. Returns the offset of the terminating separator.
pub(crate) fn transcribe_word_value(input: &str, pos: usize, out: &mut String) -> usize {
    let bytes = input.as_bytes();
    let run = ident_run(bytes, pos);
    if run > 0 {
        let word = &input[pos..pos + run];
        if matches!(word, "true" | "false" | "null") {
            out.push_str(word);
            return pos + run;
        }
    }
    capture_expression(input, pos, out)
}

/// Copy an opaque expression until a separator (`,`, `}`, `]`, or end of
/// input) at brace/bracket/paren depth zero. Quoted runs inside the
/// expression are skipped without affecting depth; unmatched closers do not
/// push depth below zero. Trailing whitespace is trimmed before the capture
/// is emitted as a JSON string.
fn capture_expression(input: &str, pos: usize, out: &mut String) -> usize {
    let bytes = input.as_bytes();
    let mut i = pos;
    let mut depth = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if depth == 0 && matches!(b, b',' | b'}' | b']') {
            break;
        }
        match b {
            b'{' | b'[' | b'(' => {
                depth += 1;
                i += 1;
            }
            b'}' | b']' | b')' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b'"' | b'\'' | b'`' => i = skip_quoted_raw(bytes, i),
            _ => i += 1,
        }
    }
    let mut end = i;
    while end > pos && is_whitespace(bytes[end - 1]) {
        end -= 1;
    }
    emit_json_string(out, &input[pos..end]);
    i
}
