use super::Tokenizer;
use super::states::unit::HYPHEN;
use crate::handler::{TextObserver, TokenHandler, TokenizerHandle};
use crate::shared::{Counters, DiagnosticSink, TokenizeError};

/// Hand a character run to the handler and the text observer.
pub(super) fn deliver_characters<H: TokenHandler>(
    handler: &mut H,
    observer: &mut Option<Box<dyn TextObserver>>,
    counters: &mut Counters,
    text: &[u16],
) {
    if text.is_empty() {
        return;
    }
    #[cfg(any(test, feature = "debug-stats"))]
    {
        log::trace!(target: "html_lexer.tokenizer", "characters len={}", text.len());
    }
    handler.characters(text);
    if let Some(observer) = observer.as_mut() {
        observer.observe(text);
    }
    counters.tokens_emitted += 1;
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    pub(super) fn emit_characters(&mut self, text: &[u16]) {
        deliver_characters(&mut self.handler, &mut self.observer, &mut self.counters, text);
    }

    /// Emit the finished tag and reset the builder.
    pub(super) fn emit_tag(&mut self) {
        if self.tag.end {
            if !self.tag.attributes.is_empty() {
                self.err("End tag had attributes.");
            }
            #[cfg(any(test, feature = "debug-stats"))]
            {
                log::trace!(target: "html_lexer.tokenizer", "end tag {}", self.tag.name);
            }
            self.handler.end_tag(&self.tag.name);
            self.content_model.reset_after_end_tag();
        } else {
            #[cfg(any(test, feature = "debug-stats"))]
            {
                log::trace!(
                    target: "html_lexer.tokenizer",
                    "start tag {} attrs={}",
                    self.tag.name,
                    self.tag.attributes.len()
                );
            }
            let mut handle = TokenizerHandle::new(&mut self.content_model);
            self.handler.start_tag(
                &self.tag.name,
                &self.tag.attributes,
                self.tag.self_closing,
                &mut handle,
            );
        }
        self.counters.tokens_emitted += 1;
        self.tag.reset(false);
    }

    /// Emit the comment in `long`, applying the trailing-hyphen policy.
    pub(super) fn emit_comment(&mut self) -> Result<(), TokenizeError> {
        if std::mem::take(&mut self.comment_hyphen) {
            let alter = self.violation(
                self.config.comment_policy,
                "The document is not mappable to XML 1.0 due to a trailing hyphen in a comment.",
            )?;
            if alter && self.emit_comments {
                self.long.push(super::states::unit::SPACE);
            }
        }
        if self.emit_comments {
            self.handler.comment(&self.long);
            self.counters.tokens_emitted += 1;
        }
        self.long.clear();
        Ok(())
    }

    /// Append to the comment text, applying the `--` policy.
    pub(super) fn append_comment(&mut self, c: u16) -> Result<(), TokenizeError> {
        if c == HYPHEN && self.comment_hyphen {
            let alter = self.violation(
                self.config.comment_policy,
                "The document is not mappable to XML 1.0 due to two consecutive hyphens in a comment.",
            )?;
            if alter && self.emit_comments {
                self.long.push(super::states::unit::SPACE);
            }
        }
        self.comment_hyphen = c == HYPHEN;
        if self.emit_comments {
            self.long.push(c);
        }
        Ok(())
    }

    pub(super) fn emit_doctype(&mut self) {
        let doctype = std::mem::take(&mut self.doctype);
        self.handler.doctype(
            &doctype.name,
            doctype.public_id.as_deref(),
            doctype.system_id.as_deref(),
            doctype.correct,
        );
        self.counters.tokens_emitted += 1;
        self.doctype.reset();
    }

    pub(super) fn emit_eof(&mut self) {
        self.handler.eof();
        self.counters.tokens_emitted += 1;
    }
}
