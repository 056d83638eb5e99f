//! Incremental longest-prefix matching over a sorted name table.

use super::EntityTable;

/// Result of feeding one character to a [`PrefixMatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feed {
    /// No name continues with this character; it was not consumed.
    Dead,
    /// Still a proper prefix of at least one name.
    Partial,
    /// The characters so far spell a complete name (which may also be the
    /// prefix of longer ones).
    Complete,
}

/// Narrows a `[lo, hi)` window of table indices one character at a time.
///
/// Invariant: every name in the window starts with the `depth` characters
/// fed so far. Within the window, names are ordered by their byte at
/// `depth`, with names of length `depth` first.
pub struct PrefixMatcher {
    table: &'static EntityTable,
    lo: usize,
    hi: usize,
    depth: usize,
    candidate: Option<usize>,
}

impl PrefixMatcher {
    pub fn new(table: &'static EntityTable) -> Self {
        Self {
            table,
            lo: 0,
            hi: table.len(),
            depth: 0,
            candidate: None,
        }
    }

    pub fn feed(&mut self, c: u16) -> Feed {
        if self.lo >= self.hi {
            return Feed::Dead;
        }
        let depth = self.depth;
        let window = &self.table.names()[self.lo..self.hi];
        let key = |name: &&[u8]| name.get(depth).map(|&b| u16::from(b));
        let first = window.partition_point(|name| key(name) < Some(c));
        let last = window.partition_point(|name| key(name) <= Some(c));
        if first == last {
            return Feed::Dead;
        }
        self.hi = self.lo + last;
        self.lo += first;
        self.depth += 1;
        if self.table.name(self.lo).len() == self.depth {
            self.candidate = Some(self.lo);
            Feed::Complete
        } else {
            Feed::Partial
        }
    }

    /// Index of the longest complete name seen so far.
    pub fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}
