//! Doctype states.
//!
//! Any deviation from `<!DOCTYPE name [PUBLIC "..." ["..."] | SYSTEM "..."]>`
//! clears `correct`. EOF still emits the doctype read so far.

use super::Tokenizer;
use super::states::TokenizerState;
use super::states::unit::{APOS, GT, QUOTE, is_space, to_ascii_lower};
use crate::encoding::CharSource;
use crate::handler::TokenHandler;
use crate::shared::{DiagnosticSink, TokenizeError};

const PUBLIC_TAIL: [u16; 5] = [0x75, 0x62, 0x6C, 0x69, 0x63];
const SYSTEM_TAIL: [u16; 5] = [0x79, 0x73, 0x74, 0x65, 0x6D];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DoctypeBuilder {
    pub(crate) name: String,
    pub(crate) public_id: Option<String>,
    pub(crate) system_id: Option<String>,
    pub(crate) correct: bool,
}

impl Default for DoctypeBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            public_id: None,
            system_id: None,
            correct: true,
        }
    }
}

impl DoctypeBuilder {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    fn doctype_eof(&mut self) {
        self.err("End of file inside doctype.");
        self.doctype.correct = false;
        self.emit_doctype();
        self.transition_to(TokenizerState::Data);
    }

    fn doctype_done(&mut self) {
        self.emit_doctype();
        self.transition_to(TokenizerState::Data);
    }

    fn bogus_doctype(&mut self) {
        self.err("Bogus doctype.");
        self.doctype.correct = false;
        self.transition_to(TokenizerState::BogusDoctype);
    }

    pub(super) fn step_doctype(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(c) => {
                self.err("Missing space before doctype name.");
                self.unread(c);
            }
            None => {}
        }
        self.transition_to(TokenizerState::BeforeDoctypeName);
        Ok(())
    }

    pub(super) fn step_before_doctype_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(GT) => {
                self.err("Nameless doctype.");
                self.doctype.correct = false;
                self.doctype_done();
            }
            None => self.doctype_eof(),
            Some(c) => {
                self.ident.clear();
                self.push_ident(to_ascii_lower(c))?;
                self.transition_to(TokenizerState::DoctypeName);
            }
        }
        Ok(())
    }

    fn finish_doctype_name(&mut self) {
        self.doctype.name = String::from_utf16_lossy(&self.ident);
        self.ident.clear();
    }

    pub(super) fn step_doctype_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {
                self.finish_doctype_name();
                self.transition_to(TokenizerState::AfterDoctypeName);
            }
            Some(GT) => {
                self.finish_doctype_name();
                self.doctype_done();
            }
            None => {
                self.finish_doctype_name();
                self.doctype_eof();
            }
            Some(c) => self.push_ident(to_ascii_lower(c))?,
        }
        Ok(())
    }

    /// Match the rest of a `PUBLIC`/`SYSTEM` keyword; a mismatching unit is
    /// reprocessed.
    fn match_keyword_tail(
        &mut self,
        src: &mut dyn CharSource,
        tail: &[u16],
    ) -> Result<bool, TokenizeError> {
        for &expected in tail {
            match self.read(src)? {
                Some(c) if to_ascii_lower(c) == expected => {}
                Some(c) => {
                    self.unread(c);
                    return Ok(false);
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    pub(super) fn step_after_doctype_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(GT) => self.doctype_done(),
            None => self.doctype_eof(),
            Some(c) if to_ascii_lower(c) == 0x70 => {
                if self.match_keyword_tail(src, &PUBLIC_TAIL)? {
                    self.transition_to(TokenizerState::BeforeDoctypePublicId);
                } else {
                    self.bogus_doctype();
                }
            }
            Some(c) if to_ascii_lower(c) == 0x73 => {
                if self.match_keyword_tail(src, &SYSTEM_TAIL)? {
                    self.transition_to(TokenizerState::BeforeDoctypeSystemId);
                } else {
                    self.bogus_doctype();
                }
            }
            Some(_) => self.bogus_doctype(),
        }
        Ok(())
    }

    pub(super) fn step_before_doctype_public_id(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(QUOTE) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypePublicIdDoubleQuoted);
            }
            Some(APOS) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypePublicIdSingleQuoted);
            }
            Some(GT) => {
                self.err("Expected a public identifier but the doctype ended.");
                self.doctype.correct = false;
                self.doctype_done();
            }
            None => self.doctype_eof(),
            Some(_) => self.bogus_doctype(),
        }
        Ok(())
    }

    pub(super) fn step_doctype_public_id(
        &mut self,
        src: &mut dyn CharSource,
        quote: u16,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if c == quote => {
                self.doctype.public_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.transition_to(TokenizerState::AfterDoctypePublicId);
            }
            Some(GT) => {
                self.err("\u{201C}>\u{201D} in public identifier.");
                self.doctype.public_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.doctype.correct = false;
                self.doctype_done();
            }
            None => {
                self.doctype.public_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.doctype_eof();
            }
            Some(c) => self.long.push(c),
        }
        Ok(())
    }

    pub(super) fn step_after_doctype_public_id(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(QUOTE) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypeSystemIdDoubleQuoted);
            }
            Some(APOS) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypeSystemIdSingleQuoted);
            }
            Some(GT) => self.doctype_done(),
            None => self.doctype_eof(),
            Some(_) => self.bogus_doctype(),
        }
        Ok(())
    }

    pub(super) fn step_before_doctype_system_id(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(QUOTE) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypeSystemIdDoubleQuoted);
            }
            Some(APOS) => {
                self.long.clear();
                self.transition_to(TokenizerState::DoctypeSystemIdSingleQuoted);
            }
            Some(GT) => {
                self.err("Expected a system identifier but the doctype ended.");
                self.doctype.correct = false;
                self.doctype_done();
            }
            None => self.doctype_eof(),
            Some(_) => self.bogus_doctype(),
        }
        Ok(())
    }

    pub(super) fn step_doctype_system_id(
        &mut self,
        src: &mut dyn CharSource,
        quote: u16,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if c == quote => {
                self.doctype.system_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.transition_to(TokenizerState::AfterDoctypeSystemId);
            }
            Some(GT) => {
                self.err("\u{201C}>\u{201D} in system identifier.");
                self.doctype.system_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.doctype.correct = false;
                self.doctype_done();
            }
            None => {
                self.doctype.system_id = Some(String::from_utf16_lossy(&self.long));
                self.long.clear();
                self.doctype_eof();
            }
            Some(c) => self.long.push(c),
        }
        Ok(())
    }

    pub(super) fn step_after_doctype_system_id(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(GT) => self.doctype_done(),
            None => self.doctype_eof(),
            Some(_) => self.bogus_doctype(),
        }
        Ok(())
    }

    pub(super) fn step_bogus_doctype(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(GT) => self.doctype_done(),
            None => {
                self.doctype.correct = false;
                self.doctype_done();
            }
            Some(_) => {}
        }
        Ok(())
    }
}
