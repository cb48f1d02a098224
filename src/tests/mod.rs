use serde_json::Value;

// Shared test helpers

fn parse(input: &str) -> Value {
    crate::parse_js_object(input, false).unwrap()
}

fn normalize(input: &str) -> String {
    crate::normalize_to_string(input).unwrap()
}

fn stream_all(input: &str, omit_empty: bool) -> Vec<Value> {
    crate::parse_js_objects_iter(input, omit_empty).collect()
}

// Submodules (topic-based)
mod comments_ws;
mod framing;
mod strings_escapes;
