use crate::error::ChompError;
use crate::lexer::Lexer;
use crate::unescape::decode_unicode_escape;
use serde_json::Value;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;

/// Iterator over the normalized JSON text of each top-level literal in the
/// input. Malformed literals are skipped silently; iteration ends when the
/// input is exhausted.
pub struct JsLiterals<'i> {
    lexer: Lexer<'i>,
}

impl<'i> JsLiterals<'i> {
    pub fn new(input: &'i str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }
}

impl<'i> Iterator for JsLiterals<'i> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.lexer.next_literal()
    }
}

/// Decode each normalized literal with `loader`, dropping any the loader
/// rejects (matching the upstream scraping behavior of skipping, not
/// reporting, bad literals).
pub fn parse_js_objects_with<'i, T, E, F>(
    input: &'i str,
    mut loader: F,
) -> impl Iterator<Item = T> + 'i
where
    F: FnMut(&str) -> Result<T, E> + 'i,
{
    JsLiterals::new(input).filter_map(move |text| loader(&text).ok())
}

/// Decode each literal to a `serde_json::Value`; with `omit_empty`, values
/// decoding to an empty object or array are dropped.
pub fn parse_js_objects_iter(input: &str, omit_empty: bool) -> impl Iterator<Item = Value> + '_ {
    parse_js_objects_with(input, |text| serde_json::from_str::<Value>(text))
        .filter(move |v| !(omit_empty && is_empty_container(v)))
}

/// Channel form of the streaming entry point: a producer thread runs the
/// normalizer and hands each decoded value over a bounded capacity-one
/// channel, giving natural back-pressure. Dropping the value receiver stops
/// the producer at its next hand-off. The error channel only ever carries a
/// unicode-escape pre-pass failure; malformed literals are skipped silently.
/// Both channels close once the input is exhausted.
pub fn parse_js_objects(
    input: String,
    unicode_escape: bool,
    omit_empty: bool,
) -> (Receiver<Value>, Receiver<ChompError>) {
    let (data_tx, data_rx) = sync_channel::<Value>(1);
    let (err_tx, err_rx) = sync_channel::<ChompError>(1);
    let text = if unicode_escape {
        match decode_unicode_escape(&input) {
            Ok(s) => s,
            Err(e) => {
                let _ = err_tx.send(e);
                return (data_rx, err_rx);
            }
        }
    } else {
        input
    };
    thread::spawn(move || {
        for value in parse_js_objects_iter(&text, omit_empty) {
            if data_tx.send(value).is_err() {
                return;
            }
        }
    });
    (data_rx, err_rx)
}

fn is_empty_container(v: &Value) -> bool {
    match v {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
