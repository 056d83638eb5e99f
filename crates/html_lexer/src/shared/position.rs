//! Source positions attached to diagnostics.

use std::fmt;
use std::sync::Arc;

/// Identifiers of the document being parsed.
///
/// Cloned into every [`Position`]; the strings are shared, not copied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentIds {
    pub public_id: Option<Arc<str>>,
    pub system_id: Option<Arc<str>>,
}

impl DocumentIds {
    pub fn new(public_id: Option<&str>, system_id: Option<&str>) -> Self {
        Self {
            public_id: public_id.map(Arc::from),
            system_id: system_id.map(Arc::from),
        }
    }

    pub fn at(&self, line: u32, column: u32) -> Position {
        Position {
            line,
            column,
            public_id: self.public_id.clone(),
            system_id: self.system_id.clone(),
        }
    }
}

/// Line/column of the most recently consumed unit plus document identity.
///
/// Lines start at 1. Column 0 means "before the first unit of the line".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub public_id: Option<Arc<str>>,
    pub system_id: Option<Arc<str>>,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            public_id: None,
            system_id: None,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(system_id) = &self.system_id {
            write!(f, "{system_id}:")?;
        }
        write!(f, "{}:{}", self.line, self.column)?;
        if let Some(public_id) = &self.public_id {
            write!(f, " ({public_id})")?;
        }
        Ok(())
    }
}
