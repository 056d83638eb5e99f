//! Code-unit sources feeding the tokenizer's input window.

use crate::shared::TokenizeError;

/// A recoverable problem found while producing code units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceIssue {
    /// Index, within the units returned by the same `read_units` call, of
    /// the replacement character the issue refers to.
    pub offset: usize,
    pub message: String,
}

/// Block-oriented UTF-16 pull stream.
pub trait CharSource {
    /// Fill `dst` with up to `dst.len()` units; `Ok(0)` means end of input.
    ///
    /// `dst` must hold at least two units so an astral character always
    /// fits.
    fn read_units(&mut self, dst: &mut [u16]) -> Result<usize, TokenizeError>;

    /// Move issues found by the last `read_units` call into `out`.
    fn drain_issues(&mut self, _out: &mut Vec<SourceIssue>) {}

    /// True once the source has consumed the whole meta sniffing window.
    fn meta_boundary_crossed(&self) -> bool {
        false
    }
}

/// Already-decoded text.
#[derive(Clone, Debug, Default)]
pub struct TextSource {
    units: Vec<u16>,
    pos: usize,
}

impl TextSource {
    pub fn from_text(text: &str) -> Self {
        Self::from_units(text.encode_utf16().collect())
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units, pos: 0 }
    }
}

impl CharSource for TextSource {
    fn read_units(&mut self, dst: &mut [u16]) -> Result<usize, TokenizeError> {
        if dst.len() < 2 {
            return Err(TokenizeError::InvalidBuffer { len: dst.len() });
        }
        let remaining = &self.units[self.pos..];
        let n = remaining.len().min(dst.len());
        dst[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}
