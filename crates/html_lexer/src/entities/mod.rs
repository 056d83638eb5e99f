//! Named character reference tables.
//!
//! Two sorted tables: the legacy HTML 4 set (names without `;`) and the
//! HTML5 set (names with `;`, plus the historical ones also valid without).
//! Both support exact lookup and incremental longest-prefix matching.

mod decode;
mod html5;
mod legacy;
mod matcher;

pub use decode::decode_entities;
pub use matcher::{Feed, PrefixMatcher};

/// Which named-reference table the tokenizer consults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntityTableKind {
    Legacy,
    #[default]
    Html5,
}

/// A sorted name table with 1-2 UTF-16 code units per name.
pub struct EntityTable {
    names: &'static [&'static [u8]],
    values: &'static [[u16; 2]],
    terminated_names: bool,
}

static LEGACY_TABLE: EntityTable = EntityTable {
    names: &legacy::LEGACY_NAMES,
    values: &legacy::LEGACY_VALUES,
    terminated_names: false,
};

static HTML5_TABLE: EntityTable = EntityTable {
    names: &html5::HTML5_NAMES,
    values: &html5::HTML5_VALUES,
    terminated_names: true,
};

impl EntityTable {
    pub fn get(kind: EntityTableKind) -> &'static EntityTable {
        match kind {
            EntityTableKind::Legacy => &LEGACY_TABLE,
            EntityTableKind::Html5 => &HTML5_TABLE,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `;` is part of the stored names rather than an optional
    /// terminator consumed after a match.
    pub fn names_include_semicolon(&self) -> bool {
        self.terminated_names
    }

    pub fn name(&self, index: usize) -> &'static [u8] {
        self.names[index]
    }

    pub fn value(&self, index: usize) -> &'static [u16] {
        let units = &self.values[index];
        if units[1] == 0 { &units[..1] } else { &units[..] }
    }

    /// Exact name lookup (including any trailing `;`).
    pub fn lookup(&self, name: &[u8]) -> Option<&'static [u16]> {
        self.names
            .binary_search_by(|probe| (*probe).cmp(name))
            .ok()
            .map(|index| self.value(index))
    }

    pub(crate) fn names(&self) -> &'static [&'static [u8]] {
        self.names
    }
}
