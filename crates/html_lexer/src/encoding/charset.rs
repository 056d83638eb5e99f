//! The set of decodable character encodings.

use super::utf32::Utf32Decoder;
use encoding_rs::{DecoderResult, Encoding};

/// A character encoding the transcoding reader can decode.
///
/// Everything except UTF-32 comes from `encoding_rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    Encoding(&'static Encoding),
    Utf32Le,
    Utf32Be,
}

/// What the decoder does with a leading byte order mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BomHandling {
    /// A BOM of either endianness overrides the charset's byte order.
    Sniff,
    /// A BOM matching the charset is dropped; anything else is content.
    Remove,
    /// Every byte is content.
    Keep,
}

impl Charset {
    pub fn utf_8() -> Self {
        Charset::Encoding(encoding_rs::UTF_8)
    }

    pub fn utf_16le() -> Self {
        Charset::Encoding(encoding_rs::UTF_16LE)
    }

    pub fn utf_16be() -> Self {
        Charset::Encoding(encoding_rs::UTF_16BE)
    }

    pub fn windows_1252() -> Self {
        Charset::Encoding(encoding_rs::WINDOWS_1252)
    }

    /// Resolve a label (case-insensitive, surrounding whitespace ignored).
    ///
    /// `ISO-8859-1` and `US-ASCII` resolve to windows-1252.
    pub fn for_label(label: &str) -> Option<Self> {
        let trimmed = label.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.eq_ignore_ascii_case("utf-32") || trimmed.eq_ignore_ascii_case("utf-32be") {
            return Some(Charset::Utf32Be);
        }
        if trimmed.eq_ignore_ascii_case("utf-32le") {
            return Some(Charset::Utf32Le);
        }
        Encoding::for_label(trimmed.as_bytes()).map(Charset::Encoding)
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Charset::Encoding(encoding) => encoding.name(),
            Charset::Utf32Le => "UTF-32LE",
            Charset::Utf32Be => "UTF-32BE",
        }
    }

    /// True if ASCII bytes decode to ASCII, which any encoding declared from
    /// inside the document must satisfy.
    pub fn is_ascii_superset(self) -> bool {
        match self {
            Charset::Encoding(encoding) => encoding.is_ascii_compatible(),
            Charset::Utf32Le | Charset::Utf32Be => false,
        }
    }

    pub fn is_utf16_or_utf32(self) -> bool {
        match self {
            Charset::Encoding(encoding) => {
                encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE
            }
            Charset::Utf32Le | Charset::Utf32Be => true,
        }
    }

    pub(crate) fn new_decoder(self, bom: BomHandling) -> CodeUnitDecoder {
        match self {
            Charset::Encoding(encoding) => CodeUnitDecoder::Encoding(match bom {
                BomHandling::Sniff => encoding.new_decoder(),
                BomHandling::Remove => encoding.new_decoder_with_bom_removal(),
                BomHandling::Keep => encoding.new_decoder_without_bom_handling(),
            }),
            Charset::Utf32Le => CodeUnitDecoder::Utf32(Utf32Decoder::new(false, bom)),
            Charset::Utf32Be => CodeUnitDecoder::Utf32(Utf32Decoder::new(true, bom)),
        }
    }
}

/// Streaming bytes-to-UTF-16 decoder.
pub(crate) enum CodeUnitDecoder {
    Encoding(encoding_rs::Decoder),
    Utf32(Utf32Decoder),
}

impl CodeUnitDecoder {
    /// Decode without replacement; malformed runs are reported to the
    /// caller, which writes U+FFFD itself.
    pub(crate) fn decode(
        &mut self,
        src: &[u8],
        dst: &mut [u16],
        last: bool,
    ) -> (DecoderResult, usize, usize) {
        match self {
            CodeUnitDecoder::Encoding(decoder) => {
                decoder.decode_to_utf16_without_replacement(src, dst, last)
            }
            CodeUnitDecoder::Utf32(decoder) => decoder.decode_to_utf16(src, dst, last),
        }
    }
}
