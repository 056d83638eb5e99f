use super::{EntityTable, EntityTableKind};
use memchr::memchr;
use std::borrow::Cow;

/// Decode semicolon-terminated references in already-tokenized text.
///
/// Contract:
/// - Named references decode only via exact lookup of `&name;` in the HTML5
///   table; the tokenizer's prefix matching and legacy semicolon-less forms
///   are not applied here.
/// - Numeric references decode when well-formed, semicolon-terminated and a
///   valid Unicode scalar value.
/// - Anything else is copied unchanged.
pub fn decode_entities(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = memchr(b'&', bytes) else {
        return Cow::Borrowed(s);
    };
    let table = EntityTable::get(EntityTableKind::Html5);
    let mut out = String::with_capacity(s.len());
    let mut copy_start = 0;
    let mut i = first;

    const MAX_NAME_LEN: usize = 32;
    const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
    const MAX_DEC_DIGITS: usize = 7; // 1114111

    // Bounded scan to avoid quadratic behavior on adversarial input.
    fn scan_numeric(bytes: &[u8], start: usize, max_digits: usize, is_hex: bool) -> Option<usize> {
        let mut j = start;
        while j < bytes.len() && j - start <= max_digits {
            let b = bytes[j];
            if b == b';' {
                return (j > start).then_some(j);
            }
            let ok = if is_hex {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            };
            if !ok {
                return None;
            }
            j += 1;
        }
        None
    }

    while i < bytes.len() {
        if bytes[i] != b'&' {
            i += 1;
            continue;
        }

        let rest = &bytes[i + 1..];
        let replaced = if rest.first() == Some(&b'#') {
            let is_hex = matches!(rest.get(1), Some(b'x' | b'X'));
            let digits_start = i + if is_hex { 3 } else { 2 };
            let max = if is_hex { MAX_HEX_DIGITS } else { MAX_DEC_DIGITS };
            scan_numeric(bytes, digits_start, max, is_hex).and_then(|end| {
                let radix = if is_hex { 16 } else { 10 };
                u32::from_str_radix(&s[digits_start..end], radix)
                    .ok()
                    .and_then(char::from_u32)
                    .map(|ch| (ch.to_string(), end + 1))
            })
        } else {
            let window = &rest[..rest.len().min(MAX_NAME_LEN)];
            memchr(b';', window).and_then(|semi| {
                table
                    .lookup(&rest[..=semi])
                    .map(|units| (String::from_utf16_lossy(units), i + 2 + semi))
            })
        };

        match replaced {
            Some((text, next)) => {
                out.push_str(&s[copy_start..i]);
                out.push_str(&text);
                i = next;
                copy_start = i;
            }
            None => i += 1,
        }
    }

    if copy_start == 0 {
        return Cow::Borrowed(s);
    }
    out.push_str(&s[copy_start..]);
    Cow::Owned(out)
}
