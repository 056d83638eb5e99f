//! Errors that abort a parse.

use super::diagnostics::Diagnostic;
use std::io;

#[derive(thiserror::Error, Debug)]
pub enum TokenizeError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Fatal(Diagnostic),
    #[error("code unit buffer of length {len} is too short; at least 2 units are required")]
    InvalidBuffer { len: usize },
}

impl TokenizeError {
    pub fn as_fatal(&self) -> Option<&Diagnostic> {
        match self {
            TokenizeError::Fatal(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
