use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChompErrorKind {
    UnexpectedEnd,
    UnexpectedChar(char),
    NewlineInString,
    UnterminatedComment,
    MalformedNumber,
    InvalidUnicodeEscape,
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChompError {
    pub kind: ChompErrorKind,
    pub position: usize,
}

impl ChompError {
    pub fn new(kind: ChompErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn from_decode(err: serde_json::Error) -> Self {
        Self {
            kind: ChompErrorKind::Decode(err.to_string()),
            position: err.column(),
        }
    }
}

impl fmt::Display for ChompError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ChompErrorKind::UnexpectedEnd => {
                write!(f, "Unexpected end of input near position {}", self.position)
            }
            ChompErrorKind::UnexpectedChar(c) => {
                write!(
                    f,
                    "Unexpected character {:?} near position {}",
                    c, self.position
                )
            }
            ChompErrorKind::NewlineInString => {
                write!(f, "Raw newline in string near position {}", self.position)
            }
            ChompErrorKind::UnterminatedComment => {
                write!(f, "Unterminated comment near position {}", self.position)
            }
            ChompErrorKind::MalformedNumber => {
                write!(f, "Malformed number near position {}", self.position)
            }
            ChompErrorKind::InvalidUnicodeEscape => {
                write!(f, "Invalid unicode escape near position {}", self.position)
            }
            ChompErrorKind::Decode(msg) => write!(f, "{} near position {}", msg, self.position),
        }
    }
}

impl std::error::Error for ChompError {}
