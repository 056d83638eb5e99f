//! The token consumer contract.

use crate::shared::Attributes;

/// Tokenizer mode controlling whether `<` can start markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentModelFlag {
    #[default]
    Pcdata,
    Rcdata,
    Cdata,
    Plaintext,
}

/// Current content model plus the element whose end tag alone may leave it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContentModel {
    pub(crate) flag: ContentModelFlag,
    pub(crate) element: Option<Vec<u16>>,
    /// Inside a `<!--` ... `-->` run in RCDATA or CDATA.
    pub(crate) escape: bool,
}

impl ContentModel {
    /// Plaintext is never left once entered.
    pub(crate) fn set(&mut self, flag: ContentModelFlag, element: &str) {
        if self.flag == ContentModelFlag::Plaintext {
            return;
        }
        self.flag = flag;
        self.escape = false;
        self.element = match flag {
            ContentModelFlag::Rcdata | ContentModelFlag::Cdata => Some(
                element
                    .encode_utf16()
                    .map(|unit| match unit {
                        0x41..=0x5A => unit + 0x20,
                        _ => unit,
                    })
                    .collect(),
            ),
            ContentModelFlag::Pcdata | ContentModelFlag::Plaintext => None,
        };
    }

    pub(crate) fn reset_after_end_tag(&mut self) {
        if self.flag != ContentModelFlag::Plaintext {
            self.flag = ContentModelFlag::Pcdata;
            self.element = None;
            self.escape = false;
        }
    }
}

/// Inbound access to the tokenizer, handed to the consumer during
/// `start` and `start_tag`.
pub struct TokenizerHandle<'t> {
    content_model: &'t mut ContentModel,
}

impl<'t> TokenizerHandle<'t> {
    pub(crate) fn new(content_model: &'t mut ContentModel) -> Self {
        Self { content_model }
    }

    /// Switch content model; `element` names the element whose end tag
    /// returns to PCDATA (ignored for PCDATA and PLAINTEXT).
    pub fn set_content_model_flag(&mut self, flag: ContentModelFlag, element: &str) {
        self.content_model.set(flag, element);
    }

    pub fn content_model_flag(&self) -> ContentModelFlag {
        self.content_model.flag
    }
}

/// Consumer of tokens, typically a tree builder.
///
/// Callbacks run synchronously from inside tokenizer state transitions.
/// Character slices are only valid for the duration of the call.
pub trait TokenHandler {
    fn start(&mut self, _tokenizer: &mut TokenizerHandle<'_>) {}

    /// Returning `false` lets the tokenizer skip buffering comment bodies.
    fn wants_comments(&self) -> bool {
        true
    }

    fn doctype(
        &mut self,
        _name: &str,
        _public_id: Option<&str>,
        _system_id: Option<&str>,
        _correct: bool,
    ) {
    }

    fn start_tag(
        &mut self,
        name: &str,
        attributes: &Attributes,
        self_closing: bool,
        tokenizer: &mut TokenizerHandle<'_>,
    );

    fn end_tag(&mut self, name: &str);

    fn comment(&mut self, _text: &[u16]) {}

    fn characters(&mut self, text: &[u16]);

    fn eof(&mut self) {}
}

/// Opaque sink for decoded character data, such as a normalization
/// checker. Sees exactly what `TokenHandler::characters` sees.
pub trait TextObserver {
    fn observe(&mut self, text: &[u16]);
}
