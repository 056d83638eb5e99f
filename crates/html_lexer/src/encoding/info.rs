//! Registry facts about encoding names.

use super::charset::Charset;

/// Encodings with broad implementation support, lower-case and sorted.
const NOT_OBSCURE: [&str; 37] = [
    "big5",
    "big5-hkscs",
    "euc-jp",
    "euc-kr",
    "gb18030",
    "gbk",
    "iso-2022-jp",
    "iso-2022-kr",
    "iso-8859-1",
    "iso-8859-13",
    "iso-8859-15",
    "iso-8859-2",
    "iso-8859-3",
    "iso-8859-4",
    "iso-8859-5",
    "iso-8859-6",
    "iso-8859-7",
    "iso-8859-8",
    "iso-8859-9",
    "koi8-r",
    "shift_jis",
    "tis-620",
    "us-ascii",
    "utf-16",
    "utf-16be",
    "utf-16le",
    "utf-8",
    "windows-1250",
    "windows-1251",
    "windows-1252",
    "windows-1253",
    "windows-1254",
    "windows-1255",
    "windows-1256",
    "windows-1257",
    "windows-1258",
    "windows-874",
];

/// Registered names that resolve to a differently named canonical
/// encoding but are still the preferred MIME name for it.
const PREFERRED_ALIASES: [(&str, &str); 7] = [
    ("GB2312", "GBK"),
    ("ISO-8859-1", "windows-1252"),
    ("ISO-8859-11", "windows-874"),
    ("ISO-8859-9", "windows-1254"),
    ("TIS-620", "windows-874"),
    ("US-ASCII", "windows-1252"),
    ("UTF-16", "UTF-16LE"),
];

fn lower_contains(table: &[&str], name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    table.binary_search(&lower.as_str()).is_ok()
}

/// True unless either the declared label or the canonical name is widely
/// supported.
pub fn is_obscure(label: &str, charset: Charset) -> bool {
    !lower_contains(&NOT_OBSCURE, label) && !lower_contains(&NOT_OBSCURE, charset.name())
}

/// Private-use (`x-`) and vendor (`mac…`) names are not IANA-registered.
pub fn is_iana_registered(charset: Charset) -> bool {
    let name = charset.name().as_bytes();
    let has_prefix = |prefix: &[u8]| {
        name.len() >= prefix.len() && name[..prefix.len()].eq_ignore_ascii_case(prefix)
    };
    !has_prefix(b"x-") && !has_prefix(b"mac")
}

/// True if `label` is the preferred name of `charset`.
pub fn is_preferred_name(label: &str, charset: Charset) -> bool {
    let label = label.trim_matches(|c: char| c.is_ascii_whitespace());
    if label.eq_ignore_ascii_case(charset.name()) {
        return true;
    }
    PREFERRED_ALIASES
        .iter()
        .any(|(alias, canonical)| alias.eq_ignore_ascii_case(label) && *canonical == charset.name())
}

/// True if the label names the UTF-16 or UTF-32 family, which an in-document
/// declaration can never correctly name.
pub fn is_utf16_or_utf32_label(label: &str) -> bool {
    const FAMILY: [&str; 6] = ["UTF-16", "UTF-16BE", "UTF-16LE", "UTF-32", "UTF-32BE", "UTF-32LE"];
    let label = label.trim_matches(|c: char| c.is_ascii_whitespace());
    FAMILY.iter().any(|name| name.eq_ignore_ascii_case(label))
}
