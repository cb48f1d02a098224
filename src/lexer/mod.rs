pub(crate) mod number;
pub(crate) mod strings;
pub(crate) mod trivia;
pub(crate) mod word;

use crate::classify::{ident_run, is_comment_lead, is_quote, starts_number};
use crate::error::{ChompError, ChompErrorKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Nest {
    Object,
    Array,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    CanAdvance,
    Finished,
    Exhausted,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Expect {
    Value,
    Key,
    Colon,
    CommaOrClose,
}

/// The lexer-normalizer: consumes one top-level JavaScript literal and emits
/// canonical JSON into `out`. One `advance` call consumes one lexical unit;
/// the driver loops until `status` leaves `CanAdvance`.
pub(crate) struct Lexer<'i> {
    input: &'i str,
    pos: usize,
    out: String,
    nesting: Vec<Nest>,
    status: Status,
    expect: Expect,
    pending_comma: bool,
    error: Option<ChompError>,
}

impl<'i> Lexer<'i> {
    pub(crate) fn new(input: &'i str) -> Self {
        Self {
            input,
            pos: 0,
            out: String::new(),
            nesting: Vec::new(),
            status: Status::CanAdvance,
            expect: Expect::Value,
            pending_comma: false,
            error: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> Status {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Normalize exactly one literal, surfacing the first error.
    pub(crate) fn run_single(&mut self) -> Result<String, ChompError> {
        while self.status == Status::CanAdvance {
            self.advance();
        }
        match self.status {
            Status::Finished => Ok(std::mem::take(&mut self.out)),
            Status::Exhausted => Err(ChompError::new(
                ChompErrorKind::UnexpectedEnd,
                self.input.len(),
            )),
            Status::Error => Err(self.take_error()),
            Status::CanAdvance => unreachable!(),
        }
    }

    /// Streaming driver: normalize the next top-level literal, silently
    /// skipping malformed ones. `None` when the input is exhausted.
    pub(crate) fn next_literal(&mut self) -> Option<String> {
        loop {
            self.begin_literal();
            while self.status == Status::CanAdvance {
                self.advance();
            }
            match self.status {
                Status::Finished => return Some(std::mem::take(&mut self.out)),
                Status::Error => self.recover(),
                Status::Exhausted => return None,
                Status::CanAdvance => unreachable!(),
            }
        }
    }

    /// One indivisible step: skip trivia, then consume a single token.
    pub(crate) fn advance(&mut self) {
        if self.status != Status::CanAdvance {
            return;
        }
        if self.nesting.is_empty() && self.out.is_empty() {
            return self.seek_opener();
        }
        match trivia::skip_ws_and_comments(self.input, self.pos) {
            Ok(p) => self.pos = p,
            Err(e) => return self.fail(e),
        }
        let Some(&b) = self.input.as_bytes().get(self.pos) else {
            return self.fail(ChompError::new(ChompErrorKind::UnexpectedEnd, self.pos));
        };
        match self.expect {
            Expect::Value => self.advance_value(b),
            Expect::Key => self.advance_key(b),
            Expect::Colon => self.advance_colon(b),
            Expect::CommaOrClose => self.advance_comma_or_close(b),
        }
    }

    fn begin_literal(&mut self) {
        self.out.clear();
        self.nesting.clear();
        self.expect = Expect::Value;
        self.pending_comma = false;
        if self.status != Status::Exhausted {
            self.status = Status::CanAdvance;
        }
    }

    /// Step one char past the offending byte and re-arm, so the streaming
    /// driver can resume seeking the next literal.
    fn recover(&mut self) {
        if self.pos < self.input.len() {
            let mut step = 1;
            while !self.input.is_char_boundary(self.pos + step) {
                step += 1;
            }
            self.pos += step;
        }
        self.error = None;
        self.status = Status::CanAdvance;
    }

    fn take_error(&mut self) -> ChompError {
        self.error
            .take()
            .unwrap_or_else(|| ChompError::new(ChompErrorKind::UnexpectedEnd, self.pos))
    }

    /// Between literals: skip arbitrary leading content (variable
    /// declarations, call prefixes, unrelated text) up to the next `{` or
    /// `[`, with string and comment awareness. A closer seen here means
    /// close-before-open.
    fn seek_opener(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            match b {
                b'{' => return self.open(Nest::Object),
                b'[' => return self.open(Nest::Array),
                b'}' | b']' => {
                    return self.fail(ChompError::new(
                        ChompErrorKind::UnexpectedChar(b as char),
                        self.pos,
                    ))
                }
                _ if is_quote(b) => self.pos = strings::skip_quoted_raw(bytes, self.pos),
                _ if is_comment_lead(bytes, self.pos) => {
                    match trivia::skip_ws_and_comments(self.input, self.pos) {
                        Ok(p) => self.pos = p,
                        Err(_) => self.pos = self.input.len(),
                    }
                }
                _ => self.pos += 1,
            }
        }
        self.status = Status::Exhausted;
    }

    fn advance_value(&mut self, b: u8) {
        match b {
            b'{' => self.open(Nest::Object),
            b'[' => self.open(Nest::Array),
            b']' => self.close(Nest::Array),
            b',' | b':' | b'}' => self.fail(ChompError::new(
                ChompErrorKind::UnexpectedChar(b as char),
                self.pos,
            )),
            _ if is_quote(b) => {
                self.flush_comma();
                match strings::transcribe_string(self.input, self.pos, &mut self.out) {
                    Ok(p) => {
                        self.pos = p;
                        self.expect = Expect::CommaOrClose;
                    }
                    Err(e) => self.fail(e),
                }
            }
            _ if starts_number(self.input.as_bytes(), self.pos) => {
                self.flush_comma();
                match number::transcribe_number(self.input, self.pos, &mut self.out) {
                    Ok(p) => {
                        self.pos = p;
                        self.expect = Expect::CommaOrClose;
                    }
                    Err(e) => self.fail(e),
                }
            }
            _ => {
                self.flush_comma();
                self.pos = word::transcribe_word_value(self.input, self.pos, &mut self.out);
                self.expect = Expect::CommaOrClose;
            }
        }
    }

    fn advance_key(&mut self, b: u8) {
        match b {
            b'}' => self.close(Nest::Object),
            _ if is_quote(b) => {
                self.flush_comma();
                match strings::transcribe_string(self.input, self.pos, &mut self.out) {
                    Ok(p) => {
                        self.pos = p;
                        self.expect = Expect::Colon;
                    }
                    Err(e) => self.fail(e),
                }
            }
            _ if starts_number(self.input.as_bytes(), self.pos) => {
                self.flush_comma();
                self.out.push('"');
                match number::transcribe_number(self.input, self.pos, &mut self.out) {
                    Ok(p) => {
                        self.out.push('"');
                        self.pos = p;
                        self.expect = Expect::Colon;
                    }
                    Err(e) => self.fail(e),
                }
            }
            _ => {
                let run = ident_run(self.input.as_bytes(), self.pos);
                if run == 0 {
                    return self.fail(ChompError::new(
                        ChompErrorKind::UnexpectedChar(self.char_at_pos()),
                        self.pos,
                    ));
                }
                self.flush_comma();
                strings::emit_json_string(&mut self.out, &self.input[self.pos..self.pos + run]);
                self.pos += run;
                self.expect = Expect::Colon;
            }
        }
    }

    fn advance_colon(&mut self, b: u8) {
        if b == b':' {
            self.pos += 1;
            self.out.push(':');
            self.expect = Expect::Value;
        } else {
            self.fail(ChompError::new(
                ChompErrorKind::UnexpectedChar(self.char_at_pos()),
                self.pos,
            ));
        }
    }

    fn advance_comma_or_close(&mut self, b: u8) {
        match b {
            b',' => {
                self.pos += 1;
                self.pending_comma = true;
                self.expect = match self.nesting.last() {
                    Some(Nest::Object) => Expect::Key,
                    _ => Expect::Value,
                };
            }
            b'}' => self.close(Nest::Object),
            b']' => self.close(Nest::Array),
            _ => self.fail(ChompError::new(
                ChompErrorKind::UnexpectedChar(self.char_at_pos()),
                self.pos,
            )),
        }
    }

    fn open(&mut self, nest: Nest) {
        self.flush_comma();
        self.pos += 1;
        match nest {
            Nest::Object => {
                self.out.push('{');
                self.expect = Expect::Key;
            }
            Nest::Array => {
                self.out.push('[');
                self.expect = Expect::Value;
            }
        }
        self.nesting.push(nest);
    }

    fn close(&mut self, nest: Nest) {
        if self.nesting.last() != Some(&nest) {
            return self.fail(ChompError::new(
                ChompErrorKind::UnexpectedChar(self.char_at_pos()),
                self.pos,
            ));
        }
        self.nesting.pop();
        self.pending_comma = false;
        self.pos += 1;
        self.out.push(match nest {
            Nest::Object => '}',
            Nest::Array => ']',
        });
        if self.nesting.is_empty() {
            self.status = Status::Finished;
        } else {
            self.expect = Expect::CommaOrClose;
        }
    }

    /// A consumed comma is only emitted once a following member
    /// materializes; a closer discards it instead.
    fn flush_comma(&mut self) {
        if self.pending_comma {
            self.out.push(',');
            self.pending_comma = false;
        }
    }

    /// Errors are sticky: `out` is frozen and `pos` lands on the offending
    /// byte (never rewinding).
    fn fail(&mut self, err: ChompError) {
        self.pos = self.pos.max(err.position.min(self.input.len()));
        self.error = Some(err);
        self.status = Status::Error;
    }

    fn char_at_pos(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\u{0}')
    }
}
