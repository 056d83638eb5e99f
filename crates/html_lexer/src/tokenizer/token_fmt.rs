//! Deterministic token formatting for golden tests.
//!
//! One line per token; attributes keep their encounter order.

use crate::shared::{Attribute, Token};
use std::fmt::Write;

/// Stable one-line rendering of a token.
pub trait TokenFmt {
    fn to_test_string(&self) -> String;
}

impl TokenFmt for Token {
    fn to_test_string(&self) -> String {
        match self {
            Token::Doctype {
                name,
                public_id,
                system_id,
                correct,
            } => {
                let public_id = quoted_or_null(public_id.as_deref());
                let system_id = quoted_or_null(system_id.as_deref());
                format!(
                    "DOCTYPE name={name} public_id={public_id} system_id={system_id} correct={correct}"
                )
            }
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let mut out = String::new();
                out.push_str("START name=");
                out.push_str(name);
                out.push_str(" attrs=[");
                for (i, attr) in attributes.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&format_attr(attr));
                }
                out.push_str("] self_closing=");
                out.push_str(if *self_closing { "true" } else { "false" });
                out
            }
            Token::EndTag { name } => format!("END name={name}"),
            Token::Comment { text } => format!("COMMENT text=\"{}\"", escape_text(text)),
            Token::Characters { text } => format!("CHAR text=\"{}\"", escape_text(text)),
            Token::Eof => "EOF".to_string(),
        }
    }
}

pub fn format_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(TokenFmt::to_test_string).collect()
}

fn quoted_or_null(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_string(), |s| format!("\"{}\"", escape_text(s)))
}

fn format_attr(attr: &Attribute) -> String {
    format!("{}=\"{}\"", attr.name, escape_text(&attr.value))
}

fn simple_escape(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\\' => "\\\\",
        '"' => "\\\"",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        _ => return None,
    })
}

/// Quotes, backslashes and control characters escaped; everything else
/// verbatim.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(escaped) = simple_escape(ch) {
            out.push_str(escaped);
        } else if ch.is_ascii_control() {
            let _ = write!(out, "\\u{{{:02X}}}", u32::from(ch));
        } else {
            out.push(ch);
        }
    }
    out
}
