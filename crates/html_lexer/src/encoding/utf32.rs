//! Streaming UTF-32 decoder.
//!
//! `encoding_rs` follows the Encoding Standard, which has no UTF-32. This
//! decoder mirrors the `decode_to_utf16_without_replacement` call shape so
//! the transcoding reader can drive either one.

use super::charset::BomHandling;
use encoding_rs::DecoderResult;

pub(crate) struct Utf32Decoder {
    big_endian: bool,
    bom: BomHandling,
    at_start: bool,
    pending: [u8; 4],
    pending_len: usize,
}

impl Utf32Decoder {
    pub(crate) fn new(big_endian: bool, bom: BomHandling) -> Self {
        Self {
            big_endian,
            bom,
            at_start: true,
            pending: [0; 4],
            pending_len: 0,
        }
    }

    pub(crate) fn decode_to_utf16(
        &mut self,
        src: &[u8],
        dst: &mut [u16],
        last: bool,
    ) -> (DecoderResult, usize, usize) {
        let mut read = 0;
        let mut written = 0;
        loop {
            while self.pending_len < 4 && read < src.len() {
                self.pending[self.pending_len] = src[read];
                self.pending_len += 1;
                read += 1;
            }
            if self.pending_len < 4 {
                if last && self.pending_len > 0 {
                    let bad = self.pending_len as u8;
                    self.pending_len = 0;
                    return (DecoderResult::Malformed(bad, 0), read, written);
                }
                return (DecoderResult::InputEmpty, read, written);
            }

            let value = if self.big_endian {
                u32::from_be_bytes(self.pending)
            } else {
                u32::from_le_bytes(self.pending)
            };
            if std::mem::take(&mut self.at_start) && self.bom != BomHandling::Keep {
                if value == 0xFEFF {
                    self.pending_len = 0;
                    continue;
                }
                if value == 0xFFFE_0000 && self.bom == BomHandling::Sniff {
                    self.big_endian = !self.big_endian;
                    self.pending_len = 0;
                    continue;
                }
            }

            let Some(ch) = char::from_u32(value) else {
                self.pending_len = 0;
                return (DecoderResult::Malformed(4, 0), read, written);
            };
            if dst.len() - written < ch.len_utf16() {
                return (DecoderResult::OutputFull, read, written);
            }
            written += ch.encode_utf16(&mut dst[written..]).len();
            self.pending_len = 0;
        }
    }
}
