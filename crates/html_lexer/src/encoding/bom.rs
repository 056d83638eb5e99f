//! Byte order mark detection.

use super::byte_source::ByteSource;
use super::charset::Charset;
use std::io;

/// A recognized byte order mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bom {
    pub charset: Charset,
    /// Number of bytes the mark occupies.
    pub len: usize,
}

/// Inspect at most four bytes for a UTF-8, UTF-16 or UTF-32 byte order mark.
///
/// `FF FE 00 00` is UTF-32LE rather than UTF-16LE followed by U+0000.
pub fn sniff_bom<B: ByteSource + ?Sized>(source: &mut B) -> io::Result<Option<Bom>> {
    let found = |charset, len| Ok(Some(Bom { charset, len }));
    match source.read_byte()? {
        Some(0xEF) => {
            if source.read_byte()? == Some(0xBB) && source.read_byte()? == Some(0xBF) {
                return found(Charset::utf_8(), 3);
            }
        }
        Some(0xFF) => {
            if source.read_byte()? == Some(0xFE) {
                if source.read_byte()? == Some(0x00) && source.read_byte()? == Some(0x00) {
                    return found(Charset::Utf32Le, 4);
                }
                return found(Charset::utf_16le(), 2);
            }
        }
        Some(0xFE) => {
            if source.read_byte()? == Some(0xFF) {
                return found(Charset::utf_16be(), 2);
            }
        }
        Some(0x00) => {
            if source.read_byte()? == Some(0x00)
                && source.read_byte()? == Some(0xFE)
                && source.read_byte()? == Some(0xFF)
            {
                return found(Charset::Utf32Be, 4);
            }
        }
        _ => {}
    }
    Ok(None)
}
