//! Byte-level pull interface for the sniffing phase.

use super::SNIFFING_LIMIT;
use std::io::{self, Read};

/// Minimal byte pull interface consumed by the BOM and meta sniffers.
pub trait ByteSource {
    /// Next byte, or `None` once the source (or its sniffing window) is
    /// exhausted.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Wraps a reader for sniffing and remembers what it read.
///
/// The first [`SNIFFING_LIMIT`] bytes are buffered so that they can be
/// replayed (via [`ByteStream::rewind`]) by the next sniffer and, finally,
/// handed to the transcoding reader without reading them twice.
pub struct ByteStream<R> {
    reader: R,
    prefix: Vec<u8>,
    cursor: usize,
    exhausted: bool,
}

impl<R: Read> ByteStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prefix: Vec::with_capacity(SNIFFING_LIMIT),
            cursor: 0,
            exhausted: false,
        }
    }

    /// Restart reading from the first byte.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Bytes pulled from the reader so far.
    pub fn buffered(&self) -> &[u8] {
        &self.prefix
    }

    pub(crate) fn into_parts(self) -> (R, Vec<u8>, bool) {
        (self.reader, self.prefix, self.exhausted)
    }

    fn fill(&mut self) -> io::Result<usize> {
        let old = self.prefix.len();
        self.prefix.resize(SNIFFING_LIMIT, 0);
        let read = loop {
            match self.reader.read(&mut self.prefix[old..]) {
                Ok(n) => break n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.prefix.truncate(old);
                    return Err(err);
                }
            }
        };
        self.prefix.truncate(old + read);
        if read == 0 {
            self.exhausted = true;
        }
        Ok(read)
    }
}

impl<R: Read> ByteSource for ByteStream<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.cursor >= SNIFFING_LIMIT {
            return Ok(None);
        }
        if self.cursor == self.prefix.len() && (self.exhausted || self.fill()? == 0) {
            return Ok(None);
        }
        let byte = self.prefix[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }
}
