//! Named and numeric character references.

use super::Tokenizer;
use super::states::unit::{
    self, AMP, EQUALS, FF, HASH, LT, REPLACEMENT, SEMICOLON, SPACE, VT, is_ascii_alphanumeric,
    is_space,
};
use crate::encoding::CharSource;
use crate::entities::{Feed, PrefixMatcher};
use crate::handler::TokenHandler;
use crate::shared::{DiagnosticSink, TokenizeError, XmlViolationPolicy};

/// Accumulated values are clamped here, one past the last code point.
const NCR_CLAMP: u32 = 0x11_0000;

/// Windows-1252 interpretation of NCRs in 0x80..=0x9F.
const WINDOWS_1252_C1: [u16; 32] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039,
    0x0152, 0x008D, 0x017D, 0x008F, 0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178,
];

fn single(unit: u16) -> Result<([u16; 2], usize), TokenizeError> {
    Ok(([unit, 0], 1))
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    /// Consume a reference after `&`. `additional` is the unit that ends an
    /// attribute value; `Some` also means the result goes into the value.
    pub(super) fn consume_char_ref(
        &mut self,
        src: &mut dyn CharSource,
        additional: Option<u16>,
    ) -> Result<(), TokenizeError> {
        let in_attribute = additional.is_some();
        match self.read(src)? {
            None => self.char_ref_output(in_attribute, &[AMP]),
            Some(c) if is_space(c) || c == LT || c == AMP || Some(c) == additional => {
                self.char_ref_output(in_attribute, &[AMP]);
                self.unread(c);
            }
            Some(HASH) => self.consume_numeric(src, in_attribute)?,
            Some(c) => self.consume_named(src, c, in_attribute)?,
        }
        Ok(())
    }

    fn char_ref_output(&mut self, in_attribute: bool, units: &[u16]) {
        if in_attribute {
            self.long.extend_from_slice(units);
        } else {
            self.emit_characters(units);
        }
    }

    fn consume_named(
        &mut self,
        src: &mut dyn CharSource,
        first: u16,
        in_attribute: bool,
    ) -> Result<(), TokenizeError> {
        self.ident.clear();
        self.push_ident(AMP)?;
        let mut matcher = PrefixMatcher::new(self.entities);
        let mut best: Option<(usize, usize)> = None;
        let mut next = Some(first);
        while let Some(c) = next {
            match matcher.feed(c) {
                Feed::Dead => {
                    self.unread(c);
                    break;
                }
                Feed::Partial => self.push_ident(c)?,
                Feed::Complete => {
                    self.push_ident(c)?;
                    best = matcher.candidate().map(|index| (index, self.ident.len()));
                }
            }
            next = self.read(src)?;
        }

        let Some((index, matched)) = best else {
            self.err("Text after \u{201C}&\u{201D} did not match an entity name. Probable cause: \u{201C}&\u{201D} should have been escaped as \u{201C}&amp;\u{201D}.");
            let raw = std::mem::take(&mut self.ident);
            self.char_ref_output(in_attribute, &raw);
            self.ident = raw;
            return Ok(());
        };

        let tail = self.ident[matched..].to_vec();
        let mut terminated = self.entities.name(index).ends_with(b";");
        if !terminated
            && tail.is_empty()
            && !self.entities.names_include_semicolon()
            && self.input.peek_pushback() == Some(SEMICOLON)
        {
            self.input.take_pushback();
            terminated = true;
        }
        if !terminated {
            let following = tail.first().copied().or(self.input.peek_pushback());
            if in_attribute
                && following.is_some_and(|c| is_ascii_alphanumeric(c) || c == EQUALS)
            {
                let raw = std::mem::take(&mut self.ident);
                self.char_ref_output(in_attribute, &raw);
                self.ident = raw;
                return Ok(());
            }
            self.err("Named character reference was not terminated by a semicolon. (Or \u{201C}&\u{201D} should have been escaped as \u{201C}&amp;\u{201D}.)");
        }
        let value = self.entities.value(index);
        self.char_ref_output(in_attribute, value);
        self.char_ref_output(in_attribute, &tail);
        Ok(())
    }

    fn consume_numeric(
        &mut self,
        src: &mut dyn CharSource,
        in_attribute: bool,
    ) -> Result<(), TokenizeError> {
        let mut prefix = vec![AMP, HASH];
        let mut c = self.read(src)?;
        let hex = matches!(c, Some(0x78 | 0x58));
        if let Some(x) = c.filter(|_| hex) {
            prefix.push(x);
            c = self.read(src)?;
        }
        let radix = if hex { 16 } else { 10 };
        let mut value: u32 = 0;
        let mut digits = 0usize;
        while let Some(digit) = c.and_then(|c| char::from_u32(u32::from(c))?.to_digit(radix)) {
            value = value.saturating_mul(radix).saturating_add(digit).min(NCR_CLAMP);
            digits += 1;
            c = self.read(src)?;
        }
        if digits == 0 {
            self.err(if hex {
                "No digits after \u{201C}&#x\u{201D}."
            } else {
                "No digits after \u{201C}&#\u{201D}."
            });
            self.char_ref_output(in_attribute, &prefix);
            if let Some(c) = c {
                self.unread(c);
            }
            return Ok(());
        }
        match c {
            Some(SEMICOLON) => {}
            other => {
                self.err("Character reference was not terminated by a semicolon.");
                if let Some(c) = other {
                    self.unread(c);
                }
            }
        }
        let (units, len) = self.ncr_units(value)?;
        self.char_ref_output(in_attribute, &units[..len]);
        Ok(())
    }

    /// Map an NCR value to the code units it stands for.
    fn ncr_units(&mut self, value: u32) -> Result<([u16; 2], usize), TokenizeError> {
        match value {
            0 => {
                self.err("Character reference expands to zero.");
                single(REPLACEMENT)
            }
            0x0D => {
                self.err("A numeric character reference expanded to carriage return.");
                single(unit::LF)
            }
            0x80..=0x9F => {
                self.err("A numeric character reference expanded to the C1 controls range.");
                single(WINDOWS_1252_C1[(value - 0x80) as usize])
            }
            0x0B | 0x0C => {
                let c = if value == 0x0B { VT } else { FF };
                match self.config.content_space_policy {
                    XmlViolationPolicy::Allow => single(c),
                    policy => {
                        let alter = self.violation(
                            policy,
                            format!("Character reference expands to U+{value:04X}. This character is not allowed in XML 1.0."),
                        )?;
                        single(if alter { SPACE } else { c })
                    }
                }
            }
            0xD800..=0xDFFF => {
                self.err("Character reference expands to a surrogate.");
                single(REPLACEMENT)
            }
            0..=0xFFFF => {
                let c = value as u16;
                if unit::is_non_xml_bmp(value) {
                    let alter = self.violation(
                        self.config.content_non_xml_char_policy,
                        format!("Character reference expands to U+{value:04X}. This character is not allowed in XML 1.0."),
                    )?;
                    return single(if alter { REPLACEMENT } else { c });
                }
                if unit::is_private_use(value) {
                    self.warn_private_use();
                }
                single(c)
            }
            0x1_0000..=0x10_FFFF => {
                if unit::is_astral_noncharacter(value) {
                    self.warn(format!(
                        "Character reference expands to an astral non-character (U+{value:X})."
                    ));
                }
                if unit::is_private_use(value) {
                    self.warn_private_use();
                }
                let offset = value - 0x1_0000;
                let high = 0xD800 + (offset >> 10) as u16;
                let low = 0xDC00 + (offset & 0x3FF) as u16;
                Ok(([high, low], 2))
            }
            _ => {
                self.err("Character reference outside the permissible Unicode range.");
                single(REPLACEMENT)
            }
        }
    }
}
