//! Lexical core of an HTML5 parser: encoding resolution, transcoding and
//! the tokenizer state machine.
//!
//! Bytes of unknown encoding go through [`encoding::resolve_encoding`]
//! (declared label, byte order mark, `<meta>` prescan, default) and are
//! decoded to UTF-16; the [`Tokenizer`] turns the code units into calls on a
//! [`TokenHandler`], reporting conformance diagnostics to a
//! [`DiagnosticSink`].

pub mod collect;
pub mod encoding;
pub mod entities;
pub mod handler;
pub mod tokenizer;

mod shared;

pub use collect::TokenCollector;
pub use handler::{ContentModelFlag, TextObserver, TokenHandler, TokenizerHandle};
pub use shared::{
    Attribute, Attributes, CollectingSink, Counters, Diagnostic, DiagnosticSink, DocumentIds,
    LogSink, NullSink, Position, Severity, Token, TokenizeError, XmlViolationPolicy,
};
pub use tokenizer::{InputSource, TokenFmt, Tokenizer, TokenizerConfig, format_tokens};
