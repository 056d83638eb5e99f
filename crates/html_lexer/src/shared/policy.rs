//! XML 1.0 compatibility knobs.

/// How the tokenizer treats constructs that HTML allows but an XML 1.0
/// infoset cannot represent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XmlViolationPolicy {
    /// Pass the construct through, reporting a warning.
    Allow,
    /// Rewrite the construct into something XML-safe, reporting a warning.
    #[default]
    AlterInfoset,
    /// Abort the parse with a fatal diagnostic.
    Fatal,
}
