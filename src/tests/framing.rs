use super::*;
use serde_json::json;

#[test]
fn trailing_text_is_ignored() {
    assert_eq!(
        parse(r#"{"a": {"b": [12, 13, 14]}}text text"#),
        json!({"a": {"b": [12, 13, 14]}})
    );
}

#[test]
fn variable_declaration_prefix() {
    assert_eq!(
        parse(r#"var test = {"a": {"b": [12, 13, 14]}}"#),
        json!({"a": {"b": [12, 13, 14]}})
    );
    assert_eq!(
        parse("var x = [1, 2, 3, 4, 5,]"),
        json!([1, 2, 3, 4, 5])
    );
    assert_eq!(
        normalize(r#"var x = {"a": [12, 13, 14,]} trailing junk"#),
        r#"{"a":[12,13,14]}"#
    );
}

#[test]
fn leading_whitespace_only() {
    assert_eq!(parse("      {'a': 12}"), json!({"a": 12}));
}

#[test]
fn openers_inside_leading_strings_are_skipped() {
    assert_eq!(
        parse("var s = \"ignore { this\"; [1, 2]"),
        json!([1, 2])
    );
}

#[test]
fn openers_inside_leading_comments_are_skipped() {
    assert_eq!(parse("/* { */ [3]"), json!([3]));
}

#[test]
fn close_before_open_errors() {
    let err = crate::normalize_to_string("}{").unwrap_err();
    assert_eq!(err.kind, crate::ChompErrorKind::UnexpectedChar('}'));
    assert_eq!(err.position, 0);
}

#[test]
fn empty_and_blank_inputs_error() {
    assert!(crate::normalize_to_string("").is_err());
    assert!(crate::normalize_to_string("         ").is_err());
    assert!(crate::normalize_to_string("no literal here").is_err());
}

#[test]
fn error_positions_point_into_the_input() {
    let err = crate::normalize_to_string("[1,,2]").unwrap_err();
    assert_eq!(err.position, 3);
    let err = crate::normalize_to_string("{'a': 'x").unwrap_err();
    assert_eq!(err.position, 8);
}

#[test]
fn normalization_is_idempotent() {
    let corpus = [
        "{'hello': 'world', 'my': {'master': 'of Orion'}}",
        "{abc: 100, dev: 200}",
        "[0x12, 0o17, 0b1010, 12_34, .5, 5., -0]",
        "{age: function(a,b){return b-a;}}",
        "var x = {\"a\": [12, 13, 14,]} trailing junk",
        "[false, {'true': true, `pies`: \"kot\"}, false,]",
        "{1: 1, _a: 2, $b: 3}",
        "[/*...*/1,2,3/*...*/]",
    ];
    for input in corpus {
        let once = crate::normalize_to_string(input).unwrap();
        let twice = crate::normalize_to_string(&once).unwrap();
        assert_eq!(once, twice, "input={}", input);
    }
}

#[test]
fn position_is_monotone_across_advances() {
    use crate::lexer::{Lexer, Status};
    let input = "var x = {a: [1, 2,], b: 'two' /* c */, c: function(q){return q;}} rest";
    let mut lexer = Lexer::new(input);
    let mut last = lexer.position();
    while lexer.status() == Status::CanAdvance {
        lexer.advance();
        assert!(lexer.position() >= last);
        last = lexer.position();
    }
    assert_eq!(lexer.status(), Status::Finished);
}

#[test]
fn streaming_matches_single_value_partition() {
    let input = "[1] {'a': 2} [3, 4,]";
    let streamed: Vec<String> = crate::js_literals(input).collect();
    assert_eq!(streamed, vec!["[1]", "{\"a\":2}", "[3,4]"]);
    for (text, piece) in streamed.iter().zip(["[1]", "{'a': 2}", "[3, 4,]"]) {
        assert_eq!(text, &crate::normalize_to_string(piece).unwrap());
    }
}
