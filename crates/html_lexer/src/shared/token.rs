//! Owned token values.
//!
//! The tokenizer itself never builds these; it calls a `TokenHandler`
//! directly. Collectors and test harnesses use `Token` to record what they
//! were handed.

use super::attributes::Attributes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype {
        name: String,
        public_id: Option<String>,
        system_id: Option<String>,
        correct: bool,
    },
    StartTag {
        name: String,
        attributes: Attributes,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Comment {
        text: String,
    },
    Characters {
        text: String,
    },
    Eof,
}

impl Token {
    pub fn is_characters(&self) -> bool {
        matches!(self, Token::Characters { .. })
    }
}
