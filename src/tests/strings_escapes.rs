use super::*;
use serde_json::json;

#[test]
fn single_quotes_become_double() {
    assert_eq!(normalize("{'a': 'b'}"), "{\"a\":\"b\"}");
}

#[test]
fn backtick_strings() {
    assert_eq!(parse("{`a`: `b`}"), json!({"a": "b"}));
}

#[test]
fn escaped_single_quote_loses_backslash() {
    assert_eq!(parse(r"{'a': '123\'456\n'}"), json!({"a": "123'456\n"}));
}

#[test]
fn double_quote_inside_single_quoted_string() {
    assert_eq!(parse(r#"{'a': 'say "hi"'}"#), json!({"a": "say \"hi\""}));
}

#[test]
fn single_quote_inside_double_quoted_string() {
    assert_eq!(parse(r#"{"a": "b'"}"#), json!({"a": "b'"}));
}

#[test]
fn recognized_escapes_pass_through() {
    assert_eq!(
        parse(r#"{'a': '\"\"', 'b': '\\\\', 'c': '\t\n'}"#),
        json!({"a": "\"\"", "b": "\\\\", "c": "\t\n"})
    );
    assert_eq!(parse(r#"["\n"]"#), json!(["\n"]));
}

#[test]
fn unicode_escapes_pass_through_for_the_decoder() {
    // The surrogate-pair escape is copied verbatim; the decoder assembles it.
    assert_eq!(
        normalize(r#"["\uD834\uDD1E"]"#),
        r#"["\uD834\uDD1E"]"#
    );
    assert_eq!(parse(r#"["\uD834\uDD1E"]"#), json!(["\u{1D11E}"]));
    assert_eq!(
        parse(r#"{"cache":{"\u002Ftest\u002F": 0}}"#),
        json!({"cache": {"/test/": 0}})
    );
}

#[test]
fn raw_non_ascii_passes_through() {
    assert_eq!(parse("['é']"), json!(["é"]));
    assert_eq!(parse("{'名': '字'}"), json!({"名": "字"}));
}

#[test]
fn comment_lookalikes_inside_strings_are_preserved() {
    assert_eq!(parse(r#"["/* ... */", "// ..."]"#), json!(["/* ... */", "// ..."]));
    assert_eq!(
        parse(r#"{"inclusions":["/*","/"]}"#),
        json!({"inclusions": ["/*", "/"]})
    );
}

#[test]
fn raw_newline_in_string_errors() {
    assert!(crate::normalize_to_string("{'a': 'line\nbreak'}").is_err());
    assert!(crate::normalize_to_string("{'a': 'line\\\nbreak'}").is_err());
}

#[test]
fn raw_carriage_return_is_escaped() {
    assert_eq!(parse("{'a': 'x\ry'}"), json!({"a": "x\ry"}));
}

#[test]
fn raw_tab_is_escaped() {
    assert_eq!(parse("{'a': 'x\ty'}"), json!({"a": "x\ty"}));
}

#[test]
fn unterminated_string_errors() {
    assert!(crate::normalize_to_string("{'a': 'xxx").is_err());
    assert!(crate::normalize_to_string(r#"{"test": """}"#).is_err());
}

#[test]
fn stray_quote_inside_string_errors() {
    assert!(crate::normalize_to_string("{whose: 's's', category_name: '>'}").is_err());
}
