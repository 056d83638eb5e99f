//! Markup declarations, comments and bogus comments.

use super::Tokenizer;
use super::states::TokenizerState;
use super::states::unit::{GT, HYPHEN, to_ascii_lower};
use crate::encoding::CharSource;
use crate::handler::TokenHandler;
use crate::shared::{DiagnosticSink, TokenizeError};

const DOCTYPE_TAIL: [u16; 6] = [0x6F, 0x63, 0x74, 0x79, 0x70, 0x65];

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    pub(super) fn begin_comment(&mut self) {
        self.long.clear();
        self.comment_hyphen = false;
    }

    fn bogus_comment(&mut self, consumed: &[u16], next: Option<u16>) -> Result<(), TokenizeError> {
        self.err("Bogus comment.");
        self.begin_comment();
        for &c in consumed {
            self.append_comment(c)?;
        }
        if let Some(c) = next {
            self.unread(c);
        }
        self.transition_to(TokenizerState::BogusComment);
        Ok(())
    }

    /// After `<!`: a comment, a doctype, or a bogus comment.
    pub(super) fn step_markup_declaration_open(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(HYPHEN) => match self.read(src)? {
                Some(HYPHEN) => {
                    self.begin_comment();
                    self.transition_to(TokenizerState::CommentStart);
                }
                next => self.bogus_comment(&[HYPHEN], next)?,
            },
            Some(c) if to_ascii_lower(c) == 0x64 => {
                let mut consumed = vec![c];
                for expected in DOCTYPE_TAIL {
                    match self.read(src)? {
                        Some(c) if to_ascii_lower(c) == expected => consumed.push(c),
                        next => return self.bogus_comment(&consumed, next),
                    }
                }
                self.doctype.reset();
                self.transition_to(TokenizerState::Doctype);
            }
            next => self.bogus_comment(&[], next)?,
        }
        Ok(())
    }

    pub(super) fn step_bogus_comment(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(GT) | None => {
                self.emit_comment()?;
                self.transition_to(TokenizerState::Data);
            }
            Some(c) => self.append_comment(c)?,
        }
        Ok(())
    }

    fn comment_eof(&mut self) -> Result<(), TokenizeError> {
        self.err("End of file inside comment.");
        self.emit_comment()?;
        self.transition_to(TokenizerState::Data);
        Ok(())
    }

    fn premature_comment_end(&mut self) -> Result<(), TokenizeError> {
        self.err("Premature end of comment. Use \u{201C}-->\u{201D} to end a comment properly.");
        self.emit_comment()?;
        self.transition_to(TokenizerState::Data);
        Ok(())
    }

    pub(super) fn step_comment_start(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(HYPHEN) => self.transition_to(TokenizerState::CommentStartDash),
            Some(GT) => self.premature_comment_end()?,
            None => self.comment_eof()?,
            Some(c) => {
                self.append_comment(c)?;
                self.transition_to(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    pub(super) fn step_comment_start_dash(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(HYPHEN) => self.transition_to(TokenizerState::CommentEnd),
            Some(GT) => self.premature_comment_end()?,
            None => self.comment_eof()?,
            Some(c) => {
                self.append_comment(HYPHEN)?;
                self.append_comment(c)?;
                self.transition_to(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    pub(super) fn step_comment(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(HYPHEN) => self.transition_to(TokenizerState::CommentEndDash),
            None => self.comment_eof()?,
            Some(c) => self.append_comment(c)?,
        }
        Ok(())
    }

    pub(super) fn step_comment_end_dash(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(HYPHEN) => self.transition_to(TokenizerState::CommentEnd),
            None => self.comment_eof()?,
            Some(c) => {
                self.append_comment(HYPHEN)?;
                self.append_comment(c)?;
                self.transition_to(TokenizerState::Comment);
            }
        }
        Ok(())
    }

    pub(super) fn step_comment_end(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(GT) => {
                self.emit_comment()?;
                self.transition_to(TokenizerState::Data);
            }
            Some(HYPHEN) => {
                self.err("Consecutive hyphens did not terminate a comment. \u{201C}--\u{201D} is not permitted inside a comment, but e.g. \u{201C}- -\u{201D} is.");
                self.append_comment(HYPHEN)?;
            }
            None => self.comment_eof()?,
            Some(c) => {
                self.err("Consecutive hyphens did not terminate a comment. \u{201C}--\u{201D} is not permitted inside a comment, but e.g. \u{201C}- -\u{201D} is.");
                self.append_comment(HYPHEN)?;
                self.append_comment(HYPHEN)?;
                self.append_comment(c)?;
                self.transition_to(TokenizerState::Comment);
            }
        }
        Ok(())
    }
}
