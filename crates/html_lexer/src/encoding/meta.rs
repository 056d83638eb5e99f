//! Byte-level prescan for an in-document `<meta>` charset declaration.
//!
//! Runs over the undecoded sniffing window only. Markup is recognized just
//! well enough to skip comments, declarations, processing instructions and
//! other tags without being fooled by a `charset` inside them.

use super::byte_source::ByteSource;
use super::charset::Charset;
use super::{info, vet_label};
use crate::shared::{Diagnostic, DiagnosticSink, DocumentIds, Severity};
use memchr::memchr;
use std::io;

/// Progress through the letters of `meta` while reading a tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MetaState {
    No,
    M,
    E,
    T,
    A,
}

impl MetaState {
    fn advance(self, byte: u8) -> MetaState {
        match (self, byte.to_ascii_lowercase()) {
            (MetaState::M, b'e') => MetaState::E,
            (MetaState::E, b't') => MetaState::T,
            (MetaState::T, b'a') => MetaState::A,
            _ => MetaState::No,
        }
    }
}

/// Why scanning stopped early.
enum Halt {
    Eof,
    Found,
    Io(io::Error),
}

impl From<io::Error> for Halt {
    fn from(err: io::Error) -> Self {
        Halt::Io(err)
    }
}

/// Scan `source` for a charset declaration.
///
/// Candidates that cannot be used are reported to `sink` and scanning goes
/// on; the first usable one ends the scan.
pub fn sniff_meta<B: ByteSource + ?Sized>(
    source: &mut B,
    sink: &mut dyn DiagnosticSink,
    ids: &DocumentIds,
) -> io::Result<Option<Charset>> {
    let mut sniffer = MetaSniffer {
        source,
        sink,
        ids,
        line: 1,
        column: 0,
        prev_cr: false,
        pushback: None,
        charset: None,
        name: Vec::new(),
        value: Vec::new(),
    };
    match sniffer.run() {
        Err(Halt::Io(err)) => Err(err),
        Ok(()) | Err(Halt::Eof) | Err(Halt::Found) => Ok(sniffer.charset),
    }
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

struct MetaSniffer<'a, B: ?Sized> {
    source: &'a mut B,
    sink: &'a mut dyn DiagnosticSink,
    ids: &'a DocumentIds,
    line: u32,
    column: u32,
    prev_cr: bool,
    pushback: Option<u8>,
    charset: Option<Charset>,
    name: Vec<u8>,
    value: Vec<u8>,
}

impl<B: ByteSource + ?Sized> MetaSniffer<'_, B> {
    fn read(&mut self) -> Result<u8, Halt> {
        if let Some(byte) = self.pushback.take() {
            return Ok(byte);
        }
        let byte = self.source.read_byte()?.ok_or(Halt::Eof)?;
        match byte {
            b'\n' if self.prev_cr => {}
            b'\n' | b'\r' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
        self.prev_cr = byte == b'\r';
        Ok(byte)
    }

    fn unread(&mut self, byte: u8) {
        self.pushback = Some(byte);
    }

    fn report(&mut self, severity: Severity, message: String) {
        let diagnostic = Diagnostic::new(severity, message, self.ids.at(self.line, self.column));
        self.sink.report(&diagnostic);
    }

    fn run(&mut self) -> Result<(), Halt> {
        loop {
            if self.read()? == b'<' {
                self.markup()?;
            }
        }
    }

    /// After `<`.
    fn markup(&mut self) -> Result<(), Halt> {
        let byte = self.read()?;
        match byte {
            b'!' => self.markup_declaration(),
            b'?' => self.skip_to_gt(),
            b'/' => {
                let next = self.read()?;
                if next.is_ascii_alphabetic() {
                    self.tag(next, false)
                } else if next == b'>' {
                    Ok(())
                } else {
                    self.skip_to_gt()
                }
            }
            b'<' => self.markup(),
            _ if byte.is_ascii_alphabetic() => self.tag(byte, true),
            _ => Ok(()),
        }
    }

    /// After `<!`. Comments end at the first `>` preceded by two hyphens.
    fn markup_declaration(&mut self) -> Result<(), Halt> {
        if self.read()? != b'-' {
            return self.skip_to_gt();
        }
        if self.read()? != b'-' {
            return self.skip_to_gt();
        }
        let mut hyphens = 0usize;
        loop {
            match self.read()? {
                b'-' => hyphens += 1,
                b'>' if hyphens >= 2 => return Ok(()),
                _ => hyphens = 0,
            }
        }
    }

    fn skip_to_gt(&mut self) -> Result<(), Halt> {
        while self.read()? != b'>' {}
        Ok(())
    }

    /// Tag name starting with `first`, then its attributes.
    fn tag(&mut self, first: u8, start_tag: bool) -> Result<(), Halt> {
        let mut meta = if first.eq_ignore_ascii_case(&b'm') {
            MetaState::M
        } else {
            MetaState::No
        };
        loop {
            let byte = self.read()?;
            if is_space(byte) || byte == b'/' {
                break;
            }
            if byte == b'>' {
                return Ok(());
            }
            if byte == b'<' {
                self.unread(byte);
                return Ok(());
            }
            meta = meta.advance(byte);
        }
        self.attributes(start_tag && meta == MetaState::A)
    }

    fn attributes(&mut self, check: bool) -> Result<(), Halt> {
        loop {
            let mut byte = self.read()?;
            while is_space(byte) || byte == b'/' {
                byte = self.read()?;
            }
            if byte == b'>' {
                return Ok(());
            }

            self.name.clear();
            self.value.clear();
            loop {
                if is_space(byte) || byte == b'/' || byte == b'>' {
                    break;
                }
                if byte == b'=' && !self.name.is_empty() {
                    break;
                }
                self.name.push(byte.to_ascii_lowercase());
                byte = self.read()?;
            }
            while is_space(byte) {
                byte = self.read()?;
            }
            if byte != b'=' {
                if check {
                    self.check_attribute()?;
                }
                self.unread(byte);
                continue;
            }

            byte = self.read()?;
            while is_space(byte) {
                byte = self.read()?;
            }
            let mut tag_ended = false;
            match byte {
                b'"' | b'\'' => loop {
                    let next = self.read()?;
                    if next == byte {
                        break;
                    }
                    self.value.push(next);
                },
                b'>' => tag_ended = true,
                _ => {
                    self.value.push(byte);
                    loop {
                        let next = self.read()?;
                        if is_space(next) {
                            break;
                        }
                        if next == b'>' {
                            tag_ended = true;
                            break;
                        }
                        self.value.push(next);
                    }
                }
            }
            if check {
                self.check_attribute()?;
            }
            if tag_ended {
                return Ok(());
            }
        }
    }

    fn check_attribute(&mut self) -> Result<(), Halt> {
        let candidate = match self.name.as_slice() {
            b"charset" => Some(self.value.clone()),
            b"content" => extract_charset_from_content(&self.value).map(<[u8]>::to_vec),
            _ => None,
        };
        match candidate {
            Some(label) => self.try_charset(&label),
            None => Ok(()),
        }
    }

    fn try_charset(&mut self, raw: &[u8]) -> Result<(), Halt> {
        // Labels are ASCII; anything else cannot name an encoding.
        let label: String = raw.iter().map(|&b| char::from(b)).collect();
        let label = label
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .to_ascii_lowercase();
        if info::is_utf16_or_utf32_label(&label) {
            self.charset = Some(Charset::utf_8());
            self.report(
                Severity::Error,
                format!(
                    "The internal character encoding declaration specified \u{201C}{label}\u{201D} which is not a rough superset of ASCII. Using \u{201C}UTF-8\u{201D} instead."
                ),
            );
            return Err(Halt::Found);
        }
        let Some(charset) = Charset::for_label(&label) else {
            self.report(
                Severity::Error,
                format!(
                    "Unsupported character encoding name: \u{201C}{label}\u{201D}. Will continue sniffing."
                ),
            );
            return Ok(());
        };
        if !charset.is_ascii_superset() {
            self.report(
                Severity::Error,
                format!(
                    "The encoding \u{201C}{label}\u{201D} is not an ASCII superset and, therefore, cannot be used in an internal encoding declaration. Continuing the sniffing algorithm."
                ),
            );
            return Ok(());
        }
        vet_label(&label, charset, |severity, message| self.report(severity, message));
        log::debug!(
            target: "html_lexer.encoding",
            "meta prescan found {} at {}:{}",
            charset.name(),
            self.line,
            self.column
        );
        self.charset = Some(charset);
        Err(Halt::Found)
    }
}

/// Pull the charset out of a `content` value shaped like
/// `text/html; charset=VALUE`.
pub fn extract_charset_from_content(content: &[u8]) -> Option<&[u8]> {
    let semicolon = memchr(b';', content)?;
    let rest = trim_start(&content[semicolon + 1..]);
    const CHARSET: &[u8] = b"charset";
    if rest.len() < CHARSET.len() || !rest[..CHARSET.len()].eq_ignore_ascii_case(CHARSET) {
        return None;
    }
    let rest = trim_start(&rest[CHARSET.len()..]);
    let rest = trim_start(rest.strip_prefix(b"=")?);
    match *rest.first()? {
        quote @ (b'"' | b'\'') => {
            let body = &rest[1..];
            let end = memchr(quote, body)?;
            Some(&body[..end])
        }
        _ => {
            let end = rest
                .iter()
                .position(|&b| is_space(b) || b == b';')
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}

fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}
