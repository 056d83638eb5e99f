//! HTML5 tokenizer public API.
//!
//! The tokenizer is an explicit state machine pulling UTF-16 code units from
//! a [`CharSource`] through a refillable window and calling a
//! [`TokenHandler`] synchronously for every token.
//!
//! Invariants:
//! - Window-size independence: the sequence of handler calls, after merging
//!   adjacent character runs, does not depend on `buffer_size`.
//! - Fresh state: every `tokenize` call starts from the initial state; nothing
//!   carries over from an earlier parse on the same instance.
//! - Diagnostics carry the position of the last code unit read.

use crate::encoding::{
    ByteStream, CharSource, ResolvedEncoding, TextSource, resolve_encoding,
};
use crate::entities::{EntityTable, EntityTableKind};
use crate::handler::{ContentModel, ContentModelFlag, TextObserver, TokenHandler, TokenizerHandle};
use crate::shared::{
    Counters, Diagnostic, DiagnosticSink, DocumentIds, LogSink, Position, Severity,
    TokenizeError, XmlViolationPolicy,
};
use doctype::DoctypeBuilder;
use input::InputWindow;
use states::TokenizerState;
use std::io::Read;
use tag::TagBuilder;

mod charref;
mod comment;
mod doctype;
mod emit;
mod input;
mod states;
mod tag;
mod token_fmt;

pub use token_fmt::{TokenFmt, format_tokens};

/// Configuration for the tokenizer.
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    /// U+000B and U+000C in content and attribute values.
    pub content_space_policy: XmlViolationPolicy,
    /// Other characters XML 1.0 cannot represent, in content.
    pub content_non_xml_char_policy: XmlViolationPolicy,
    /// `--` inside, or `-` at the end of, comment text.
    pub comment_policy: XmlViolationPolicy,
    pub entity_table: EntityTableKind,
    /// Report a failed RCDATA/CDATA end tag as an error rather than a
    /// warning.
    pub html4_mode: bool,
    /// Input window size in code units; at least 2.
    pub buffer_size: usize,
    /// Longest tag, attribute or doctype name accepted before the parse is
    /// aborted.
    pub max_identifier_len: usize,
    pub initial_content_model: ContentModelFlag,
    pub initial_content_model_element: Option<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            content_space_policy: XmlViolationPolicy::AlterInfoset,
            content_non_xml_char_policy: XmlViolationPolicy::AlterInfoset,
            comment_policy: XmlViolationPolicy::AlterInfoset,
            entity_table: EntityTableKind::Html5,
            html4_mode: false,
            buffer_size: 2048,
            max_identifier_len: 4096,
            initial_content_model: ContentModelFlag::Pcdata,
            initial_content_model_element: None,
        }
    }
}

enum InputStream<'a> {
    Bytes(Box<dyn Read + 'a>),
    Units(Vec<u16>),
}

/// A document to tokenize: raw bytes of unknown encoding, or decoded text.
pub struct InputSource<'a> {
    stream: InputStream<'a>,
    encoding: Option<String>,
    public_id: Option<String>,
    system_id: Option<String>,
}

impl<'a> InputSource<'a> {
    /// Bytes whose encoding is resolved by sniffing, unless declared with
    /// [`InputSource::with_encoding`].
    pub fn from_reader(reader: impl Read + 'a) -> Self {
        Self::new(InputStream::Bytes(Box::new(reader)))
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::from_reader(bytes)
    }

    /// Already-decoded text; no sniffing takes place.
    pub fn from_text(text: &str) -> Self {
        Self::new(InputStream::Units(text.encode_utf16().collect()))
    }

    pub fn from_utf16(units: Vec<u16>) -> Self {
        Self::new(InputStream::Units(units))
    }

    /// Externally declared encoding label, e.g. from a transport header.
    /// Ignored for decoded text.
    pub fn with_encoding(mut self, label: &str) -> Self {
        self.encoding = Some(label.to_string());
        self
    }

    pub fn with_public_id(mut self, public_id: &str) -> Self {
        self.public_id = Some(public_id.to_string());
        self
    }

    pub fn with_system_id(mut self, system_id: &str) -> Self {
        self.system_id = Some(system_id.to_string());
        self
    }

    fn new(stream: InputStream<'a>) -> Self {
        Self {
            stream,
            encoding: None,
            public_id: None,
            system_id: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Done,
}

/// HTML5 tokenizer.
pub struct Tokenizer<H, S = LogSink> {
    handler: H,
    sink: S,
    config: TokenizerConfig,
    entities: &'static EntityTable,
    observer: Option<Box<dyn TextObserver>>,
    counters: Counters,
    ids: DocumentIds,
    resolved: Option<ResolvedEncoding>,
    state: TokenizerState,
    content_model: ContentModel,
    input: InputWindow,
    emit_comments: bool,
    /// Names and the text of a character reference being matched.
    ident: Vec<u16>,
    /// Attribute values, comment text and doctype identifiers.
    long: Vec<u16>,
    /// The pending-hyphen slot: the last comment character was `-`.
    comment_hyphen: bool,
    tag: TagBuilder,
    attr_name: String,
    add_attribute: bool,
    /// Value state to resume after a reference inside an attribute value.
    value_state: TokenizerState,
    doctype: DoctypeBuilder,
    warned_private_use: bool,
}

impl<H: TokenHandler> Tokenizer<H, LogSink> {
    pub fn new(handler: H, config: TokenizerConfig) -> Self {
        Self::with_sink(handler, LogSink, config)
    }
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    pub fn with_sink(handler: H, sink: S, config: TokenizerConfig) -> Self {
        let entities = EntityTable::get(config.entity_table);
        let input = InputWindow::new(config.buffer_size);
        Self {
            handler,
            sink,
            config,
            entities,
            observer: None,
            counters: Counters::default(),
            ids: DocumentIds::default(),
            resolved: None,
            state: TokenizerState::Data,
            content_model: ContentModel::default(),
            input,
            emit_comments: true,
            ident: Vec::new(),
            long: Vec::new(),
            comment_hyphen: false,
            tag: TagBuilder::default(),
            attr_name: String::new(),
            add_attribute: false,
            value_state: TokenizerState::AttributeValueUnquoted,
            doctype: DoctypeBuilder::default(),
            warned_private_use: false,
        }
    }

    /// Tokenize one document to completion.
    ///
    /// `handler.eof()` is called on success and after a fatal diagnostic,
    /// but not when the underlying reader fails.
    pub fn tokenize(&mut self, input: InputSource<'_>) -> Result<(), TokenizeError> {
        let InputSource {
            stream,
            encoding,
            public_id,
            system_id,
        } = input;
        self.reset(DocumentIds::new(public_id.as_deref(), system_id.as_deref()));
        match stream {
            InputStream::Bytes(reader) => {
                let mut bytes = ByteStream::new(reader);
                let resolved = {
                    let mut sink = CountingSink {
                        sink: &mut self.sink,
                        counters: &mut self.counters,
                    };
                    resolve_encoding(&mut bytes, encoding.as_deref(), &mut sink, &self.ids)?
                };
                log::debug!(
                    target: "html_lexer.encoding",
                    "tokenizing as {} ({:?})",
                    resolved.charset.name(),
                    resolved.confidence
                );
                self.resolved = Some(resolved);
                let mut source = resolved.into_code_unit_stream(bytes);
                self.run(&mut source)
            }
            InputStream::Units(units) => {
                let mut source = TextSource::from_units(units);
                self.run(&mut source)
            }
        }
    }

    /// Tokenize from an already-built code unit source.
    pub fn tokenize_source(&mut self, source: &mut dyn CharSource) -> Result<(), TokenizeError> {
        self.reset(DocumentIds::default());
        self.run(source)
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Counters for the most recent parse.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Encoding chosen for the most recent byte input.
    pub fn resolved_encoding(&self) -> Option<ResolvedEncoding> {
        self.resolved
    }

    pub fn set_text_observer(&mut self, observer: Box<dyn TextObserver>) {
        self.observer = Some(observer);
    }

    pub fn into_parts(self) -> (H, S) {
        (self.handler, self.sink)
    }

    fn reset(&mut self, ids: DocumentIds) {
        self.counters = Counters::default();
        self.ids = ids;
        self.resolved = None;
        self.state = TokenizerState::Data;
        self.content_model = ContentModel::default();
        if self.config.initial_content_model != ContentModelFlag::Pcdata {
            let element = self
                .config
                .initial_content_model_element
                .as_deref()
                .unwrap_or("");
            self.content_model
                .set(self.config.initial_content_model, element);
        }
        self.input.reset();
        self.emit_comments = true;
        self.ident.clear();
        self.long.clear();
        self.comment_hyphen = false;
        self.tag.reset(false);
        self.attr_name.clear();
        self.add_attribute = false;
        self.value_state = TokenizerState::AttributeValueUnquoted;
        self.doctype.reset();
        self.warned_private_use = false;
    }

    fn run(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        {
            let mut handle = TokenizerHandle::new(&mut self.content_model);
            self.handler.start(&mut handle);
        }
        self.emit_comments = self.handler.wants_comments();
        loop {
            match self.step(src) {
                Ok(Step::Continue) => {}
                Ok(Step::Done) => {
                    log::debug!(
                        target: "html_lexer.tokenizer",
                        "done: {} tokens, {} errors, {} warnings",
                        self.counters.tokens_emitted,
                        self.counters.errors,
                        self.counters.warnings
                    );
                    return Ok(());
                }
                Err(err @ TokenizeError::Fatal(_)) => {
                    self.handler.eof();
                    return Err(err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self, src: &mut dyn CharSource) -> Result<Step, TokenizeError> {
        match self.state {
            TokenizerState::Data => return self.step_data(src),
            TokenizerState::TagOpen => self.step_tag_open(src)?,
            TokenizerState::CloseTagOpen => self.step_close_tag_open(src)?,
            TokenizerState::TagName => self.step_tag_name(src)?,
            TokenizerState::BeforeAttributeName => self.step_before_attribute_name(src)?,
            TokenizerState::AttributeName => self.step_attribute_name(src)?,
            TokenizerState::AfterAttributeName => self.step_after_attribute_name(src)?,
            TokenizerState::BeforeAttributeValue => self.step_before_attribute_value(src)?,
            TokenizerState::AttributeValueDoubleQuoted => {
                self.step_attribute_value_quoted(src, states::unit::QUOTE)?
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.step_attribute_value_quoted(src, states::unit::APOS)?
            }
            TokenizerState::AttributeValueUnquoted => self.step_attribute_value_unquoted(src)?,
            TokenizerState::EntityInAttributeValue => self.step_entity_in_attribute_value(src)?,
            TokenizerState::BogusComment => self.step_bogus_comment(src)?,
            TokenizerState::MarkupDeclarationOpen => self.step_markup_declaration_open(src)?,
            TokenizerState::CommentStart => self.step_comment_start(src)?,
            TokenizerState::CommentStartDash => self.step_comment_start_dash(src)?,
            TokenizerState::Comment => self.step_comment(src)?,
            TokenizerState::CommentEndDash => self.step_comment_end_dash(src)?,
            TokenizerState::CommentEnd => self.step_comment_end(src)?,
            TokenizerState::Doctype => self.step_doctype(src)?,
            TokenizerState::BeforeDoctypeName => self.step_before_doctype_name(src)?,
            TokenizerState::DoctypeName => self.step_doctype_name(src)?,
            TokenizerState::AfterDoctypeName => self.step_after_doctype_name(src)?,
            TokenizerState::BeforeDoctypePublicId => self.step_before_doctype_public_id(src)?,
            TokenizerState::DoctypePublicIdDoubleQuoted => {
                self.step_doctype_public_id(src, states::unit::QUOTE)?
            }
            TokenizerState::DoctypePublicIdSingleQuoted => {
                self.step_doctype_public_id(src, states::unit::APOS)?
            }
            TokenizerState::AfterDoctypePublicId => self.step_after_doctype_public_id(src)?,
            TokenizerState::BeforeDoctypeSystemId => self.step_before_doctype_system_id(src)?,
            TokenizerState::DoctypeSystemIdDoubleQuoted => {
                self.step_doctype_system_id(src, states::unit::QUOTE)?
            }
            TokenizerState::DoctypeSystemIdSingleQuoted => {
                self.step_doctype_system_id(src, states::unit::APOS)?
            }
            TokenizerState::AfterDoctypeSystemId => self.step_after_doctype_system_id(src)?,
            TokenizerState::BogusDoctype => self.step_bogus_doctype(src)?,
        }
        Ok(Step::Continue)
    }

    fn step_data(&mut self, src: &mut dyn CharSource) -> Result<Step, TokenizeError> {
        use states::unit::{AMP, GT, HYPHEN, LT};
        let flag = self.content_model.flag;
        let Some(c) = self.read(src)? else {
            self.flush_run();
            self.emit_eof();
            return Ok(Step::Done);
        };
        match c {
            AMP if matches!(flag, ContentModelFlag::Pcdata | ContentModelFlag::Rcdata) => {
                self.flush_run_before_current();
                self.consume_char_ref(src, None)?;
            }
            LT if flag == ContentModelFlag::Pcdata
                || (flag != ContentModelFlag::Plaintext && !self.content_model.escape) =>
            {
                self.flush_run_before_current();
                self.transition_to(TokenizerState::TagOpen);
            }
            HYPHEN
                if matches!(flag, ContentModelFlag::Rcdata | ContentModelFlag::Cdata)
                    && !self.content_model.escape
                    && self.input.history_is(&[LT, states::unit::BANG, HYPHEN, HYPHEN]) =>
            {
                self.content_model.escape = true;
                self.extend_run();
            }
            GT if matches!(flag, ContentModelFlag::Rcdata | ContentModelFlag::Cdata)
                && self.content_model.escape
                && self.input.history_ends_with(&[HYPHEN, HYPHEN, GT]) =>
            {
                self.content_model.escape = false;
                self.extend_run();
            }
            _ => self.extend_run(),
        }
        Ok(Step::Continue)
    }

    fn transition_to(&mut self, next: TokenizerState) {
        if self.state == next {
            return;
        }
        #[cfg(any(test, feature = "debug-stats"))]
        {
            log::trace!(
                target: "html_lexer.tokenizer",
                "state {:?} -> {:?} @{}:{}",
                self.state,
                next,
                self.input.line,
                self.input.col
            );
        }
        self.state = next;
    }

    fn position(&self) -> Position {
        self.ids.at(self.input.line, self.input.col)
    }

    fn err(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Error, message, self.position());
        self.counters.errors += 1;
        self.sink.error(&diagnostic);
    }

    fn warn(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(Severity::Warning, message, self.position());
        self.counters.warnings += 1;
        self.sink.warning(&diagnostic);
    }

    /// Report a fatal diagnostic; the caller returns the error.
    fn fatal(&mut self, message: impl Into<String>) -> TokenizeError {
        let diagnostic = Diagnostic::new(Severity::Fatal, message, self.position());
        self.counters.errors += 1;
        self.sink.fatal(&diagnostic);
        TokenizeError::Fatal(diagnostic)
    }

    /// Apply an XML violation policy. `Ok(true)` means the caller should
    /// alter the infoset.
    fn violation(
        &mut self,
        policy: XmlViolationPolicy,
        message: impl Into<String>,
    ) -> Result<bool, TokenizeError> {
        match policy {
            XmlViolationPolicy::Allow => {
                self.warn(message);
                Ok(false)
            }
            XmlViolationPolicy::AlterInfoset => {
                self.warn(message);
                Ok(true)
            }
            XmlViolationPolicy::Fatal => Err(self.fatal(message)),
        }
    }

    fn warn_private_use(&mut self) {
        if !self.warned_private_use {
            self.warned_private_use = true;
            self.warn(
                "Document uses the Unicode Private Use Area(s), which should not be used in publicly exchanged documents. (Charmod C073)",
            );
        }
    }

    fn push_ident(&mut self, c: u16) -> Result<(), TokenizeError> {
        if self.ident.len() >= self.config.max_identifier_len {
            let limit = self.config.max_identifier_len;
            return Err(self.fatal(format!(
                "Identifier exceeded the maximum length of {limit} code units."
            )));
        }
        self.ident.push(c);
        Ok(())
    }
}

/// Counts encoding diagnostics on their way to the tokenizer's sink.
struct CountingSink<'a, S> {
    sink: &'a mut S,
    counters: &'a mut Counters,
}

impl<S: DiagnosticSink> DiagnosticSink for CountingSink<'_, S> {
    fn fatal(&mut self, diagnostic: &Diagnostic) {
        self.counters.errors += 1;
        self.sink.fatal(diagnostic);
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        self.counters.errors += 1;
        self.sink.error(diagnostic);
    }

    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.counters.warnings += 1;
        self.sink.warning(diagnostic);
    }
}

#[cfg(test)]
mod tests;
