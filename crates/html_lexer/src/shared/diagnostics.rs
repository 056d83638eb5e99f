//! Position-tagged conformance diagnostics.

use super::position::Position;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, position: Position) -> Self {
        Self {
            severity,
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.severity.as_str(),
            self.position,
            self.message
        )
    }
}

/// Receiver for diagnostics.
///
/// `fatal` is informational: the caller aborts the parse after notifying the
/// sink, so an implementation only has to record or display it.
pub trait DiagnosticSink {
    fn fatal(&mut self, diagnostic: &Diagnostic);
    fn error(&mut self, diagnostic: &Diagnostic);
    fn warning(&mut self, diagnostic: &Diagnostic);

    fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Fatal => self.fatal(diagnostic),
            Severity::Error => self.error(diagnostic),
            Severity::Warning => self.warning(diagnostic),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn fatal(&mut self, diagnostic: &Diagnostic) {
        (**self).fatal(diagnostic);
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        (**self).error(diagnostic);
    }

    fn warning(&mut self, diagnostic: &Diagnostic) {
        (**self).warning(diagnostic);
    }
}

/// Default sink: forwards to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn fatal(&mut self, diagnostic: &Diagnostic) {
        log::error!(target: "html_lexer.diagnostics", "{diagnostic}");
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        log::error!(target: "html_lexer.diagnostics", "{diagnostic}");
    }

    fn warning(&mut self, diagnostic: &Diagnostic) {
        log::warn!(target: "html_lexer.diagnostics", "{diagnostic}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn fatal(&mut self, _diagnostic: &Diagnostic) {}
    fn error(&mut self, _diagnostic: &Diagnostic) {}
    fn warning(&mut self, _diagnostic: &Diagnostic) {}
}

/// Records every diagnostic in arrival order.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// True if any recorded message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message.contains(needle))
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn fatal(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}
