use super::*;
use serde_json::json;

#[test]
fn line_comments_around_members() {
    let input = "
        var obj = {
            // Comment
            x: \"X\", // Comment
        };
    ";
    assert_eq!(parse(input), json!({"x": "X"}));
}

#[test]
fn block_comments_everywhere() {
    let input = "
        var /* Comment */ obj = /* Comment */ {
            /* Comment */
            x: /* Comment */ \"X\", /* Comment */
        };
    ";
    assert_eq!(parse(input), json!({"x": "X"}));
}

#[test]
fn block_comments_between_array_elements() {
    assert_eq!(
        parse("[/*...*/1,2,3,/*...*/4,5,6]"),
        json!([1, 2, 3, 4, 5, 6])
    );
}

#[test]
fn comment_between_key_and_colon() {
    assert_eq!(parse("{a /* note */ : 1}"), json!({"a": 1}));
    assert_eq!(parse("{a // note\n : 1}"), json!({"a": 1}));
}

#[test]
fn form_feed_and_crlf_whitespace() {
    assert_eq!(parse("{\"a\":\r\n10}"), json!({"a": 10}));
    assert_eq!(parse("{\u{0C}\"a\":\u{0B}10}"), json!({"a": 10}));
}

#[test]
fn unterminated_block_comment_errors() {
    assert!(crate::normalize_to_string("{a: 1 /* trailing").is_err());
}

#[test]
fn line_comment_running_to_end_of_input_errors_inside_literal() {
    // The comment swallows the closer, so the literal never completes.
    assert!(crate::normalize_to_string("{a: 1 // trailing }").is_err());
}
