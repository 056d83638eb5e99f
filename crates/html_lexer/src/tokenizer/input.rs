//! Input window and character preprocessing.
//!
//! `read` is the only place code units enter the state machine. It refills
//! the window from the source, folds CR and CRLF into LF, tracks line and
//! column, reports decoder issues at the replacement character they refer
//! to, and applies the XML character policies.

use super::states::unit::{
    self, CR, FF, LF, REPLACEMENT, SPACE, VT, is_high_surrogate, is_low_surrogate,
};
use super::Tokenizer;
use crate::encoding::{CharSource, SourceIssue};
use crate::handler::TokenHandler;
use crate::shared::{DiagnosticSink, TokenizeError, XmlViolationPolicy};

/// Refillable window over the code unit source.
///
/// Invariant: a unit in `pushback` is always the unit at `buf[pos - 1]`, so
/// data-state runs can be tracked by index even across a reprocess.
#[derive(Debug)]
pub(crate) struct InputWindow {
    buf: Vec<u16>,
    len: usize,
    pos: usize,
    /// Start of the pending character run in `buf`.
    run_start: Option<usize>,
    pushback: Option<u16>,
    eof: bool,
    pub(crate) line: u32,
    pub(crate) col: u32,
    prev_cr: bool,
    pending_high: Option<u16>,
    history: [u16; 4],
    issues: Vec<SourceIssue>,
    issue_cursor: usize,
    /// Latched at the first refill after the source crossed the meta
    /// sniffing window.
    pub(crate) meta_boundary_passed: bool,
}

impl InputWindow {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            buf: vec![0; size],
            len: 0,
            pos: 0,
            run_start: None,
            pushback: None,
            eof: false,
            line: 1,
            col: 0,
            prev_cr: false,
            pending_high: None,
            history: [0; 4],
            issues: Vec::new(),
            issue_cursor: 0,
            meta_boundary_passed: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        let size = self.buf.len();
        *self = Self::new(size);
    }

    /// The last four units read, oldest first, equal `pattern`.
    pub(crate) fn history_is(&self, pattern: &[u16; 4]) -> bool {
        &self.history == pattern
    }

    pub(crate) fn history_ends_with(&self, pattern: &[u16]) -> bool {
        self.history.ends_with(pattern)
    }

    /// The unit that the next `read` will return without touching the
    /// source, if any.
    pub(crate) fn peek_pushback(&self) -> Option<u16> {
        self.pushback
    }

    pub(crate) fn take_pushback(&mut self) -> Option<u16> {
        self.pushback.take()
    }

    fn push_history(&mut self, c: u16) {
        self.history.rotate_left(1);
        self.history[3] = c;
    }
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    /// Next preprocessed code unit, or `None` at end of input.
    pub(super) fn read(&mut self, src: &mut dyn CharSource) -> Result<Option<u16>, TokenizeError> {
        if let Some(c) = self.input.pushback.take() {
            return Ok(Some(c));
        }
        loop {
            if self.input.pos == self.input.len && !self.refill(src)? {
                if self.input.pending_high.take().is_some() {
                    self.err("Found a lone high surrogate.");
                }
                return Ok(None);
            }
            let i = self.input.pos;
            self.input.pos += 1;
            let mut c = self.input.buf[i];
            if std::mem::take(&mut self.input.prev_cr) && c == LF {
                self.flush_run_to(i);
                continue;
            }
            if c == CR {
                c = LF;
                self.input.buf[i] = LF;
                self.input.prev_cr = true;
            }
            if c == LF {
                self.input.line += 1;
                self.input.col = 0;
            } else {
                self.input.col += 1;
            }
            self.report_source_issues(i);
            let c = self.preprocess(c, i)?;
            self.input.push_history(c);
            return Ok(Some(c));
        }
    }

    /// Reprocess `c` on the next `read`. Only the unit just read may be
    /// pushed back.
    pub(super) fn unread(&mut self, c: u16) {
        debug_assert!(self.input.pushback.is_none());
        self.input.pushback = Some(c);
    }

    /// Mark the unit just read as part of the current character run.
    pub(super) fn extend_run(&mut self) {
        if self.input.run_start.is_none() {
            self.input.run_start = Some(self.input.pos - 1);
        }
    }

    /// Deliver the pending run, excluding the unit just read.
    pub(super) fn flush_run_before_current(&mut self) {
        self.flush_run_to(self.input.pos - 1);
    }

    pub(super) fn flush_run(&mut self) {
        self.flush_run_to(self.input.pos);
    }

    fn flush_run_to(&mut self, end: usize) {
        if let Some(start) = self.input.run_start.take()
            && start < end
        {
            super::emit::deliver_characters(
                &mut self.handler,
                &mut self.observer,
                &mut self.counters,
                &self.input.buf[start..end],
            );
        }
    }

    fn refill(&mut self, src: &mut dyn CharSource) -> Result<bool, TokenizeError> {
        if self.input.eof {
            return Ok(false);
        }
        self.flush_run_to(self.input.len);
        if !self.input.meta_boundary_passed && src.meta_boundary_crossed() {
            self.input.meta_boundary_passed = true;
        }
        let n = src.read_units(&mut self.input.buf)?;
        self.input.issues.clear();
        self.input.issue_cursor = 0;
        src.drain_issues(&mut self.input.issues);
        self.input.len = n;
        self.input.pos = 0;
        if n == 0 {
            self.input.eof = true;
            return Ok(false);
        }
        Ok(true)
    }

    fn report_source_issues(&mut self, index: usize) {
        while let Some(issue) = self.input.issues.get_mut(self.input.issue_cursor) {
            if issue.offset > index {
                break;
            }
            let message = std::mem::take(&mut issue.message);
            let matches = issue.offset == index;
            self.input.issue_cursor += 1;
            if matches {
                self.err(message);
            }
        }
    }

    fn preprocess(&mut self, c: u16, index: usize) -> Result<u16, TokenizeError> {
        if let Some(high) = self.input.pending_high.take() {
            if is_low_surrogate(c) {
                let code_point =
                    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(c) - 0xDC00);
                if unit::is_astral_noncharacter(code_point) {
                    self.warn(format!(
                        "Astral non-character U+{code_point:X} in the character stream."
                    ));
                }
                if unit::is_private_use(code_point) {
                    self.warn_private_use();
                }
                return Ok(c);
            }
            self.err("Found a lone high surrogate.");
        }
        let content = self.state.is_content();
        let replacement = match c {
            0 => {
                self.err("Found U+0000 in the character stream.");
                REPLACEMENT
            }
            VT | FF if content => match self.config.content_space_policy {
                XmlViolationPolicy::Allow => c,
                policy => {
                    let alter = self.violation(
                        policy,
                        format!(
                            "Found U+{c:04X} in content. This character is not allowed in XML 1.0."
                        ),
                    )?;
                    if alter { SPACE } else { c }
                }
            },
            c if is_high_surrogate(c) => {
                self.input.pending_high = Some(c);
                c
            }
            c if is_low_surrogate(c) => {
                self.err("Found a lone low surrogate.");
                REPLACEMENT
            }
            c if content && unit::is_non_xml_bmp(u32::from(c)) => {
                let alter = self.violation(
                    self.config.content_non_xml_char_policy,
                    format!("Found U+{c:04X} in content. This character is not allowed in XML 1.0."),
                )?;
                if alter { REPLACEMENT } else { c }
            }
            c => {
                if unit::is_private_use(u32::from(c)) {
                    self.warn_private_use();
                }
                c
            }
        };
        if replacement != c {
            self.input.buf[index] = replacement;
        }
        Ok(replacement)
    }
}
