//! Encoding resolution and transcoding.
//!
//! Resolution is a synchronous pre-pass over at most [`SNIFFING_LIMIT`]
//! bytes. Precedence: an externally declared label, then a byte order mark,
//! then a `<meta>` prescan, then windows-1252. The result is fixed for the
//! rest of the parse.

mod bom;
mod byte_source;
mod charset;
mod info;
mod meta;
mod reader;
mod source;
mod utf32;

pub use bom::{Bom, sniff_bom};
pub use byte_source::{ByteSource, ByteStream};
pub use charset::{BomHandling, Charset};
pub use info::{is_iana_registered, is_obscure, is_preferred_name};
pub use meta::{extract_charset_from_content, sniff_meta};
pub use reader::TranscodingReader;
pub use source::{CharSource, SourceIssue, TextSource};

use crate::shared::{Diagnostic, DiagnosticSink, DocumentIds, Severity, TokenizeError};
use std::io::Read;

/// Size of the window searched for a `<meta>` charset declaration.
pub const SNIFFING_LIMIT: usize = 512;

/// How the encoding was established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    Declared,
    Bom,
    MetaSniffed,
    Default,
}

/// Outcome of [`resolve_encoding`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedEncoding {
    pub charset: Charset,
    pub confidence: Confidence,
    bom: BomHandling,
    skip: usize,
}

impl ResolvedEncoding {
    /// Build the decoding stream; the sniffed prefix is replayed, minus any
    /// byte order mark.
    pub fn into_code_unit_stream<R: Read>(self, stream: ByteStream<R>) -> TranscodingReader<R> {
        TranscodingReader::from_stream(stream, self.charset, self.bom, self.skip)
    }
}

/// Decide the encoding of `stream`.
pub fn resolve_encoding<R: Read>(
    stream: &mut ByteStream<R>,
    declared: Option<&str>,
    sink: &mut dyn DiagnosticSink,
    ids: &DocumentIds,
) -> Result<ResolvedEncoding, TokenizeError> {
    if let Some(label) = declared {
        let label = label
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_ascii_lowercase();
        match Charset::for_label(&label) {
            Some(charset) => {
                vet_label(&label, charset, |severity, message| {
                    report(sink, ids, severity, message)
                });
                let bom = match label.as_str() {
                    "utf-16" | "utf-32" => BomHandling::Sniff,
                    _ if charset.is_utf16_or_utf32() => BomHandling::Keep,
                    _ => BomHandling::Remove,
                };
                log::debug!(
                    target: "html_lexer.encoding",
                    "declared {label} resolved to {}",
                    charset.name()
                );
                return Ok(ResolvedEncoding {
                    charset,
                    confidence: Confidence::Declared,
                    bom,
                    skip: 0,
                });
            }
            None => report(
                sink,
                ids,
                Severity::Error,
                format!("Unsupported character encoding name: \u{201C}{label}\u{201D}. Will sniff."),
            ),
        }
    }

    stream.rewind();
    if let Some(bom) = sniff_bom(stream)? {
        log::debug!(
            target: "html_lexer.encoding",
            "byte order mark selects {}",
            bom.charset.name()
        );
        return Ok(ResolvedEncoding {
            charset: bom.charset,
            confidence: Confidence::Bom,
            bom: BomHandling::Keep,
            skip: bom.len,
        });
    }

    stream.rewind();
    let sniffed = sniff_meta(stream, sink, ids)?;
    stream.rewind();
    if let Some(charset) = sniffed {
        return Ok(ResolvedEncoding {
            charset,
            confidence: Confidence::MetaSniffed,
            bom: BomHandling::Keep,
            skip: 0,
        });
    }

    report(
        sink,
        ids,
        Severity::Warning,
        "Could not determine the character encoding of the document. Using \u{201C}windows-1252\u{201D}."
            .to_string(),
    );
    Ok(ResolvedEncoding {
        charset: Charset::windows_1252(),
        confidence: Confidence::Default,
        bom: BomHandling::Keep,
        skip: 0,
    })
}

fn report(sink: &mut dyn DiagnosticSink, ids: &DocumentIds, severity: Severity, message: String) {
    sink.report(&Diagnostic::new(severity, message, ids.at(1, 0)));
}

/// Diagnostics for a label that names a usable encoding imperfectly.
pub(crate) fn vet_label(label: &str, charset: Charset, mut report: impl FnMut(Severity, String)) {
    if !info::is_iana_registered(charset) {
        if label.len() >= 2 && label.as_bytes()[..2].eq_ignore_ascii_case(b"x-") {
            report(
                Severity::Error,
                format!(
                    "The encoding \u{201C}{label}\u{201D} is not an IANA-registered encoding. (Charmod C022)"
                ),
            );
        } else {
            report(
                Severity::Error,
                format!(
                    "The encoding \u{201C}{label}\u{201D} is not an IANA-registered encoding and did not start with \u{201C}X-\u{201D}. (Charmod C023)"
                ),
            );
        }
    } else if !info::is_preferred_name(label, charset) {
        report(
            Severity::Warning,
            format!(
                "The encoding \u{201C}{label}\u{201D} is not the preferred name of the character encoding in use. The preferred name is \u{201C}{}\u{201D}. (Charmod C024)",
                charset.name()
            ),
        );
    }
    if info::is_obscure(label, charset) {
        report(
            Severity::Warning,
            format!(
                "The character encoding \u{201C}{label}\u{201D} is not widely supported. Better interoperability may be achieved by using \u{201C}UTF-8\u{201D}."
            ),
        );
    }
}

#[cfg(test)]
mod tests;
