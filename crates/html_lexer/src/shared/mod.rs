//! Types shared by the encoding pipeline and the tokenizer.

mod attributes;
mod counters;
mod diagnostics;
mod error;
mod policy;
mod position;
mod token;

pub use attributes::{Attribute, Attributes};
pub use counters::Counters;
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, LogSink, NullSink, Severity,
};
pub use error::TokenizeError;
pub use policy::XmlViolationPolicy;
pub use position::{DocumentIds, Position};
pub use token::Token;

#[cfg(test)]
mod tests;
