//! Tokenizer state machine definitions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenizerState {
    Data,
    TagOpen,
    CloseTagOpen,
    TagName,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    EntityInAttributeValue,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentEndDash,
    CommentEnd,
    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    BeforeDoctypePublicId,
    DoctypePublicIdDoubleQuoted,
    DoctypePublicIdSingleQuoted,
    AfterDoctypePublicId,
    BeforeDoctypeSystemId,
    DoctypeSystemIdDoubleQuoted,
    DoctypeSystemIdSingleQuoted,
    AfterDoctypeSystemId,
    BogusDoctype,
}

impl TokenizerState {
    /// States whose characters end up in text or attribute values, where
    /// the XML character policies apply.
    pub(crate) fn is_content(self) -> bool {
        matches!(
            self,
            TokenizerState::Data
                | TokenizerState::AttributeValueDoubleQuoted
                | TokenizerState::AttributeValueSingleQuoted
                | TokenizerState::AttributeValueUnquoted
                | TokenizerState::EntityInAttributeValue
        )
    }
}

/// Code units the state machine dispatches on.
pub(crate) mod unit {
    pub(crate) const TAB: u16 = 0x09;
    pub(crate) const LF: u16 = 0x0A;
    pub(crate) const VT: u16 = 0x0B;
    pub(crate) const FF: u16 = 0x0C;
    pub(crate) const CR: u16 = 0x0D;
    pub(crate) const SPACE: u16 = 0x20;
    pub(crate) const BANG: u16 = 0x21;
    pub(crate) const QUOTE: u16 = 0x22;
    pub(crate) const HASH: u16 = 0x23;
    pub(crate) const AMP: u16 = 0x26;
    pub(crate) const APOS: u16 = 0x27;
    pub(crate) const HYPHEN: u16 = 0x2D;
    pub(crate) const SOLIDUS: u16 = 0x2F;
    pub(crate) const SEMICOLON: u16 = 0x3B;
    pub(crate) const LT: u16 = 0x3C;
    pub(crate) const EQUALS: u16 = 0x3D;
    pub(crate) const GT: u16 = 0x3E;
    pub(crate) const QUESTION: u16 = 0x3F;
    pub(crate) const GRAVE: u16 = 0x60;
    pub(crate) const REPLACEMENT: u16 = 0xFFFD;

    pub(crate) fn is_space(c: u16) -> bool {
        matches!(c, TAB | LF | FF | SPACE)
    }

    pub(crate) fn is_ascii_upper(c: u16) -> bool {
        (0x41..=0x5A).contains(&c)
    }

    pub(crate) fn is_ascii_letter(c: u16) -> bool {
        is_ascii_upper(c) || (0x61..=0x7A).contains(&c)
    }

    pub(crate) fn is_ascii_alphanumeric(c: u16) -> bool {
        is_ascii_letter(c) || (0x30..=0x39).contains(&c)
    }

    pub(crate) fn to_ascii_lower(c: u16) -> u16 {
        if is_ascii_upper(c) { c + 0x20 } else { c }
    }

    pub(crate) fn is_high_surrogate(c: u16) -> bool {
        (0xD800..=0xDBFF).contains(&c)
    }

    pub(crate) fn is_low_surrogate(c: u16) -> bool {
        (0xDC00..=0xDFFF).contains(&c)
    }

    /// BMP code points XML 1.0 cannot carry (U+0000, U+000B and U+000C are
    /// handled separately by callers).
    pub(crate) fn is_non_xml_bmp(c: u32) -> bool {
        (c < 0x20 && !matches!(c, 0x09 | 0x0A | 0x0D))
            || (0xFDD0..=0xFDEF).contains(&c)
            || (c <= 0xFFFF && (c & 0xFFFE) == 0xFFFE)
    }

    pub(crate) fn is_private_use(c: u32) -> bool {
        (0xE000..=0xF8FF).contains(&c) || (0xF0000..=0x10FFFD).contains(&c)
    }

    pub(crate) fn is_astral_noncharacter(c: u32) -> bool {
        c > 0xFFFF && (c & 0xFFFE) == 0xFFFE
    }

    /// Render one unit for a diagnostic message.
    pub(crate) fn display(c: u16) -> String {
        char::from_u32(u32::from(c))
            .map(String::from)
            .unwrap_or_else(|| format!("U+{c:04X}"))
    }
}
