//! Bytes to UTF-16 with malformed-input recovery.

use super::byte_source::ByteStream;
use super::charset::{BomHandling, Charset, CodeUnitDecoder};
use super::source::{CharSource, SourceIssue};
use super::SNIFFING_LIMIT;
use crate::shared::TokenizeError;
use encoding_rs::DecoderResult;
use std::fmt::Write;
use std::io::{self, Read};

const BYTE_BUFFER_SIZE: usize = 4096;

/// Consumed bytes kept for malformed-sequence messages. A malformed
/// sequence can straddle refills, so the buffer alone is not enough.
const RECENT_BYTES: usize = 8;

/// Decodes a byte stream into UTF-16 code units.
///
/// Until the sniffing window has been consumed, refills stop exactly at the
/// window edge so the meta-boundary notification is precise.
pub struct TranscodingReader<R> {
    reader: R,
    charset: Charset,
    decoder: CodeUnitDecoder,
    bytes: Box<[u8]>,
    start: usize,
    end: usize,
    bytes_fed: usize,
    bytes_consumed: usize,
    input_done: bool,
    finished: bool,
    pending_replacement: Option<String>,
    issues: Vec<SourceIssue>,
    recent: [u8; RECENT_BYTES],
    recent_len: usize,
}

impl<R: Read> TranscodingReader<R> {
    /// Continue from a sniffed stream, replaying its buffered prefix after
    /// dropping `skip` bytes (a byte order mark).
    pub fn from_stream(
        stream: ByteStream<R>,
        charset: Charset,
        bom: BomHandling,
        skip: usize,
    ) -> Self {
        let (reader, prefix, exhausted) = stream.into_parts();
        let mut bytes = vec![0u8; BYTE_BUFFER_SIZE].into_boxed_slice();
        let skip = skip.min(prefix.len());
        let replay = &prefix[skip..];
        bytes[..replay.len()].copy_from_slice(replay);
        Self {
            reader,
            charset,
            decoder: charset.new_decoder(bom),
            bytes,
            start: 0,
            end: replay.len(),
            bytes_fed: prefix.len(),
            bytes_consumed: skip,
            input_done: exhausted,
            finished: false,
            pending_replacement: None,
            issues: Vec::new(),
            recent: [0; RECENT_BYTES],
            recent_len: 0,
        }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Bytes decoded so far, including any skipped byte order mark.
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }

    fn fill(&mut self) -> io::Result<usize> {
        if self.start > 0 {
            self.bytes.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        let room = BYTE_BUFFER_SIZE - self.end;
        let limit = if self.bytes_fed < SNIFFING_LIMIT {
            room.min(SNIFFING_LIMIT - self.bytes_fed)
        } else {
            room
        };
        let read = loop {
            match self.reader.read(&mut self.bytes[self.end..self.end + limit]) {
                Ok(n) => break n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        };
        self.end += read;
        self.bytes_fed += read;
        Ok(read)
    }

    fn remember(&mut self, from: usize, to: usize) {
        let consumed = &self.bytes[from..to];
        let keep = consumed.len().min(RECENT_BYTES);
        self.recent.copy_within(keep.., 0);
        self.recent[RECENT_BYTES - keep..].copy_from_slice(&consumed[consumed.len() - keep..]);
        self.recent_len = (self.recent_len + keep).min(RECENT_BYTES);
    }

    /// The `bad` bytes that preceded the last `extra` consumed ones.
    fn malformed_bytes(&self, bad: u8, extra: u8) -> &[u8] {
        let extra = usize::from(extra).min(self.recent_len);
        let bad = usize::from(bad).min(self.recent_len - extra);
        &self.recent[RECENT_BYTES - extra - bad..RECENT_BYTES - extra]
    }

    fn record_replacement(&mut self, dst: &mut [u16], out: &mut usize, message: String) {
        self.issues.push(SourceIssue {
            offset: *out,
            message,
        });
        dst[*out] = 0xFFFD;
        *out += 1;
    }
}

impl<R: Read> CharSource for TranscodingReader<R> {
    fn read_units(&mut self, dst: &mut [u16]) -> Result<usize, TokenizeError> {
        if dst.len() < 2 {
            return Err(TokenizeError::InvalidBuffer { len: dst.len() });
        }
        let mut out = 0;
        if let Some(message) = self.pending_replacement.take() {
            self.record_replacement(dst, &mut out, message);
        }
        loop {
            if self.finished {
                return Ok(out);
            }
            if self.start == self.end && !self.input_done && self.fill()? == 0 {
                self.input_done = true;
            }
            let last = self.input_done;
            let (result, read, written) =
                self.decoder
                    .decode(&self.bytes[self.start..self.end], &mut dst[out..], last);
            self.remember(self.start, self.start + read);
            self.start += read;
            self.bytes_consumed += read;
            out += written;
            match result {
                DecoderResult::InputEmpty => {
                    if last {
                        self.finished = true;
                        log::trace!(
                            target: "html_lexer.encoding",
                            "decoder flushed after {} bytes",
                            self.bytes_consumed
                        );
                        return Ok(out);
                    }
                    if out > 0 {
                        return Ok(out);
                    }
                }
                DecoderResult::OutputFull => return Ok(out),
                DecoderResult::Malformed(bad, extra) => {
                    let message = malformed_message(self.malformed_bytes(bad, extra));
                    if out < dst.len() {
                        self.record_replacement(dst, &mut out, message);
                    } else {
                        self.pending_replacement = Some(message);
                        return Ok(out);
                    }
                }
            }
        }
    }

    fn drain_issues(&mut self, out: &mut Vec<SourceIssue>) {
        out.append(&mut self.issues);
    }

    fn meta_boundary_crossed(&self) -> bool {
        self.bytes_consumed >= SNIFFING_LIMIT
    }
}

/// `Malformed byte sequence: “e9”, “80”.`
pub(super) fn malformed_message(bytes: &[u8]) -> String {
    let mut message = String::from("Malformed byte sequence: ");
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            message.push_str(", ");
        }
        let _ = write!(message, "\u{201C}{byte:02x}\u{201D}");
    }
    if bytes.is_empty() {
        message.push_str("\u{201C}\u{201D}");
    }
    message.push('.');
    message
}

