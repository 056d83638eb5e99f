//! Tag and attribute states.

use super::Tokenizer;
use super::states::TokenizerState;
use super::states::unit::{
    self, APOS, EQUALS, GRAVE, GT, LT, QUOTE, SOLIDUS, is_ascii_letter, is_space, to_ascii_lower,
};
use crate::encoding::CharSource;
use crate::handler::{ContentModelFlag, TokenHandler};
use crate::shared::{Attributes, DiagnosticSink, TokenizeError};

/// Sorted; searched with `binary_search`.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub(crate) fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.binary_search(&name).is_ok()
}

/// The tag being built.
#[derive(Clone, Debug, Default)]
pub(crate) struct TagBuilder {
    pub(crate) name: String,
    pub(crate) end: bool,
    pub(crate) self_closing: bool,
    pub(crate) attributes: Attributes,
}

impl TagBuilder {
    pub(crate) fn reset(&mut self, end: bool) {
        self.name.clear();
        self.end = end;
        self.self_closing = false;
        self.attributes.clear();
    }
}

impl<H: TokenHandler, S: DiagnosticSink> Tokenizer<H, S> {
    pub(super) fn step_tag_open(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        let c = self.read(src)?;
        if self.content_model.flag != ContentModelFlag::Pcdata {
            match c {
                Some(SOLIDUS) => self.transition_to(TokenizerState::CloseTagOpen),
                other => {
                    self.emit_characters(&[LT]);
                    if let Some(c) = other {
                        self.unread(c);
                    }
                    self.transition_to(TokenizerState::Data);
                }
            }
            return Ok(());
        }
        match c {
            Some(unit::BANG) => self.transition_to(TokenizerState::MarkupDeclarationOpen),
            Some(SOLIDUS) => self.transition_to(TokenizerState::CloseTagOpen),
            Some(c) if is_ascii_letter(c) => self.begin_tag(false, c)?,
            Some(GT) => {
                self.err("Saw \u{201C}<>\u{201D}. Probable causes: Unescaped \u{201C}<\u{201D} (escape as \u{201C}&lt;\u{201D}) or mistyped start tag.");
                self.emit_characters(&[LT, GT]);
                self.transition_to(TokenizerState::Data);
            }
            Some(unit::QUESTION) => {
                self.err("Saw \u{201C}<?\u{201D}. Probable cause: Attempt to use an XML processing instruction in HTML. (XML processing instructions are not supported in HTML.)");
                self.begin_comment();
                self.append_comment(unit::QUESTION)?;
                self.transition_to(TokenizerState::BogusComment);
            }
            None => {
                self.err("End of file after \u{201C}<\u{201D}.");
                self.emit_characters(&[LT]);
                self.transition_to(TokenizerState::Data);
            }
            Some(c) => {
                self.err(format!(
                    "Bad character \u{201C}{}\u{201D} after \u{201C}<\u{201D}. Probable cause: Unescaped \u{201C}<\u{201D}. Try escaping it as \u{201C}&lt;\u{201D}.",
                    unit::display(c)
                ));
                self.emit_characters(&[LT]);
                self.unread(c);
                self.transition_to(TokenizerState::Data);
            }
        }
        Ok(())
    }

    pub(super) fn step_close_tag_open(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        if self.content_model.flag != ContentModelFlag::Pcdata {
            return self.close_tag_in_text(src);
        }
        match self.read(src)? {
            Some(c) if is_ascii_letter(c) => self.begin_tag(true, c)?,
            Some(GT) => {
                self.err("Saw \u{201C}</>\u{201D}. Probable causes: Unescaped \u{201C}<\u{201D} (escape as \u{201C}&lt;\u{201D}) or mistyped end tag.");
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("Saw \u{201C}</\u{201D} immediately before end of file.");
                self.emit_characters(&[LT, SOLIDUS]);
                self.transition_to(TokenizerState::Data);
            }
            Some(c) => {
                self.err("Garbage after \u{201C}</\u{201D}. Probable causes: Unescaped \u{201C}<\u{201D} (escape as \u{201C}&lt;\u{201D}) or mistyped end tag.");
                self.begin_comment();
                self.append_comment(c)?;
                self.transition_to(TokenizerState::BogusComment);
            }
        }
        Ok(())
    }

    /// `</` in RCDATA or CDATA: only the end tag of the gating element
    /// leaves the text content model; anything else is text.
    fn close_tag_in_text(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        self.long.clear();
        let expected_len = self
            .content_model
            .element
            .as_ref()
            .map_or(0, |element| element.len());
        let matched_element = self.content_model.element.is_some();
        let mut mismatch = !matched_element;
        let mut next = None;
        if matched_element {
            for i in 0..expected_len {
                let c = self.read(src)?;
                let expected = self
                    .content_model
                    .element
                    .as_ref()
                    .and_then(|element| element.get(i).copied());
                match c {
                    Some(c) if Some(to_ascii_lower(c)) == expected => self.long.push(c),
                    other => {
                        next = other;
                        mismatch = true;
                        break;
                    }
                }
            }
        }
        if !mismatch {
            match self.read(src)? {
                Some(c) if is_space(c) => {
                    self.begin_matched_end_tag();
                    self.transition_to(TokenizerState::BeforeAttributeName);
                    return Ok(());
                }
                None => {
                    self.err("Expected \u{201C}>\u{201D} but saw end of file instead.");
                    self.begin_matched_end_tag();
                    self.emit_tag();
                    self.transition_to(TokenizerState::Data);
                    return Ok(());
                }
                Some(GT) => {
                    self.begin_matched_end_tag();
                    self.emit_tag();
                    self.transition_to(TokenizerState::Data);
                    return Ok(());
                }
                Some(SOLIDUS) => {
                    self.begin_matched_end_tag();
                    self.unread(SOLIDUS);
                    self.transition_to(TokenizerState::BeforeAttributeName);
                    return Ok(());
                }
                other => next = other,
            }
        } else if !matched_element {
            next = self.read(src)?;
        }

        let etago = self.long.first().copied().or(next).is_some_and(is_ascii_letter);
        if etago {
            let element = self
                .content_model
                .element
                .as_deref()
                .map(String::from_utf16_lossy)
                .unwrap_or_default();
            let message = format!(
                "\u{201C}</\u{201D} in the content of \u{201C}{element}\u{201D} did not start its end tag. HTML 4 would have ended the element here."
            );
            if self.config.html4_mode {
                self.err(message);
            } else {
                self.warn(message);
            }
        }
        let mut text = Vec::with_capacity(self.long.len() + 2);
        text.extend_from_slice(&[LT, SOLIDUS]);
        text.extend_from_slice(&self.long);
        self.long.clear();
        self.emit_characters(&text);
        if let Some(c) = next {
            self.unread(c);
        }
        self.transition_to(TokenizerState::Data);
        Ok(())
    }

    fn begin_matched_end_tag(&mut self) {
        self.tag.reset(true);
        self.tag.name = self
            .content_model
            .element
            .as_deref()
            .map(String::from_utf16_lossy)
            .unwrap_or_default();
        self.long.clear();
    }

    fn begin_tag(&mut self, end: bool, first: u16) -> Result<(), TokenizeError> {
        self.tag.reset(end);
        self.ident.clear();
        self.push_ident(to_ascii_lower(first))?;
        self.transition_to(TokenizerState::TagName);
        Ok(())
    }

    fn finish_tag_name(&mut self) {
        self.tag.name = String::from_utf16_lossy(&self.ident);
        self.ident.clear();
    }

    pub(super) fn step_tag_name(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {
                self.finish_tag_name();
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(SOLIDUS) => {
                self.finish_tag_name();
                self.slash_in_tag(src)?;
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(GT) => {
                self.finish_tag_name();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file seen when looking for tag name.");
                self.finish_tag_name();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(LT) => {
                self.warn("\u{201C}<\u{201D} in an element name. Probable cause: \u{201C}>\u{201D} missing immediately before. This does not end the tag.");
                self.push_ident(LT)?;
            }
            Some(c) => self.push_ident(to_ascii_lower(c))?,
        }
        Ok(())
    }

    /// A `/` inside a tag. Only `/>` on a void start tag sets the
    /// self-closing flag; the following unit is reprocessed.
    fn slash_in_tag(&mut self, src: &mut dyn CharSource) -> Result<(), TokenizeError> {
        let next = self.read(src)?;
        if next == Some(GT) {
            if self.tag.end {
                self.err("Stray \u{201C}/\u{201D} at the end of an end tag.");
            } else if is_void_element(&self.tag.name) {
                self.tag.self_closing = true;
            } else {
                self.err("Self-closing syntax (\u{201C}/>\u{201D}) used on a non-void HTML element. Ignoring the slash and treating as a start tag.");
            }
        } else {
            self.err("Stray \u{201C}/\u{201D} in tag.");
        }
        if let Some(c) = next {
            self.unread(c);
        }
        Ok(())
    }

    fn begin_attribute_name(&mut self, first: u16) -> Result<(), TokenizeError> {
        self.ident.clear();
        self.push_ident(to_ascii_lower(first))?;
        self.transition_to(TokenizerState::AttributeName);
        Ok(())
    }

    fn finish_attribute_name(&mut self) {
        self.attr_name = String::from_utf16_lossy(&self.ident);
        self.ident.clear();
        self.long.clear();
        self.add_attribute = !self.tag.attributes.contains(&self.attr_name);
        if !self.add_attribute {
            self.err(format!("Duplicate attribute \u{201C}{}\u{201D}.", self.attr_name));
        }
    }

    /// Store the attribute named by `attr_name` with the value in `long`.
    fn finish_attribute(&mut self) {
        if std::mem::take(&mut self.add_attribute) {
            if self.input.meta_boundary_passed
                && !self.tag.end
                && self.tag.name == "meta"
                && self.attr_name == "charset"
            {
                self.err("A \u{201C}charset\u{201D} attribute on a \u{201C}meta\u{201D} element found after the first 512 bytes.");
            }
            let name = std::mem::take(&mut self.attr_name);
            let value = String::from_utf16_lossy(&self.long);
            self.tag.attributes.push(name, value);
        }
        self.long.clear();
    }

    fn quote_in_attribute_name(&mut self, c: u16) {
        self.err(format!(
            "Quote \u{201C}{}\u{201D} in attribute name. Probable cause: Matching quote missing somewhere earlier.",
            unit::display(c)
        ));
    }

    pub(super) fn step_before_attribute_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(SOLIDUS) => self.slash_in_tag(src)?,
            Some(GT) => {
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file reached when expecting an attribute name.");
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(c @ (QUOTE | APOS)) => {
                self.quote_in_attribute_name(c);
                self.begin_attribute_name(c)?;
            }
            Some(LT) => {
                self.warn("\u{201C}<\u{201D} in attribute name. Probable cause: \u{201C}>\u{201D} missing immediately before. This does not end the tag.");
                self.begin_attribute_name(LT)?;
            }
            Some(EQUALS) => {
                self.err("Saw \u{201C}=\u{201D} when expecting an attribute name. Probable cause: Attribute name missing.");
                self.begin_attribute_name(EQUALS)?;
            }
            Some(c) => self.begin_attribute_name(c)?,
        }
        Ok(())
    }

    pub(super) fn step_attribute_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {
                self.finish_attribute_name();
                self.transition_to(TokenizerState::AfterAttributeName);
            }
            Some(SOLIDUS) => {
                self.finish_attribute_name();
                self.finish_attribute();
                self.slash_in_tag(src)?;
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(EQUALS) => {
                self.finish_attribute_name();
                self.transition_to(TokenizerState::BeforeAttributeValue);
            }
            Some(GT) => {
                self.finish_attribute_name();
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file occurred in an attribute name.");
                self.finish_attribute_name();
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(c @ (QUOTE | APOS)) => {
                self.quote_in_attribute_name(c);
                self.push_ident(c)?;
            }
            Some(LT) => {
                self.warn("\u{201C}<\u{201D} in attribute name. Probable cause: \u{201C}>\u{201D} missing immediately before. This does not end the tag.");
                self.push_ident(LT)?;
            }
            Some(c) => self.push_ident(to_ascii_lower(c))?,
        }
        Ok(())
    }

    pub(super) fn step_after_attribute_name(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(SOLIDUS) => {
                self.finish_attribute();
                self.slash_in_tag(src)?;
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(EQUALS) => self.transition_to(TokenizerState::BeforeAttributeValue),
            Some(GT) => {
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file occurred after an attribute name.");
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(LT) => {
                self.err("Saw \u{201C}<\u{201D} when expecting an attribute name. Probable cause: Missing \u{201C}>\u{201D} immediately before.");
                self.finish_attribute();
                self.emit_tag();
                self.unread(LT);
                self.transition_to(TokenizerState::Data);
            }
            Some(c @ (QUOTE | APOS)) => {
                self.quote_in_attribute_name(c);
                self.finish_attribute();
                self.begin_attribute_name(c)?;
            }
            Some(c) => {
                self.finish_attribute();
                self.begin_attribute_name(c)?;
            }
        }
        Ok(())
    }

    pub(super) fn step_before_attribute_value(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {}
            Some(QUOTE) => self.transition_to(TokenizerState::AttributeValueDoubleQuoted),
            Some(APOS) => self.transition_to(TokenizerState::AttributeValueSingleQuoted),
            Some(unit::AMP) => {
                self.unread(unit::AMP);
                self.transition_to(TokenizerState::AttributeValueUnquoted);
            }
            Some(GT) => {
                self.err("Attribute value missing.");
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file reached when expecting an attribute value.");
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(LT) => {
                self.err("\u{201C}<\u{201D} where an attribute value was expected. Probable cause: Attribute value missing.");
                self.finish_attribute();
                self.emit_tag();
                self.unread(LT);
                self.transition_to(TokenizerState::Data);
            }
            Some(c @ (EQUALS | GRAVE)) => {
                self.err(format!(
                    "\u{201C}{}\u{201D} at the start of an unquoted attribute value. Probable cause: Stray duplicate equals sign.",
                    unit::display(c)
                ));
                self.long.push(c);
                self.transition_to(TokenizerState::AttributeValueUnquoted);
            }
            Some(c) => {
                self.long.push(c);
                self.transition_to(TokenizerState::AttributeValueUnquoted);
            }
        }
        Ok(())
    }

    pub(super) fn step_attribute_value_quoted(
        &mut self,
        src: &mut dyn CharSource,
        quote: u16,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if c == quote => {
                self.finish_attribute();
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(unit::AMP) => self.enter_attribute_entity(),
            None => {
                self.err("End of file reached when inside an attribute value.");
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(c) => self.long.push(c),
        }
        Ok(())
    }

    pub(super) fn step_attribute_value_unquoted(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        match self.read(src)? {
            Some(c) if is_space(c) => {
                self.finish_attribute();
                self.transition_to(TokenizerState::BeforeAttributeName);
            }
            Some(unit::AMP) => self.enter_attribute_entity(),
            Some(GT) => {
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            None => {
                self.err("End of file reached when inside an attribute value.");
                self.finish_attribute();
                self.emit_tag();
                self.transition_to(TokenizerState::Data);
            }
            Some(LT) => {
                self.warn("\u{201C}<\u{201D} in an unquoted attribute value. This does not end the tag. Probable cause: Missing \u{201C}>\u{201D} immediately before.");
                self.long.push(LT);
            }
            Some(c @ (QUOTE | APOS | EQUALS | GRAVE)) => {
                self.err(format!(
                    "\u{201C}{}\u{201D} in an unquoted attribute value. Probable causes: Attributes running together or a URL query string in an unquoted attribute value.",
                    unit::display(c)
                ));
                self.long.push(c);
            }
            Some(c) => self.long.push(c),
        }
        Ok(())
    }

    fn enter_attribute_entity(&mut self) {
        self.value_state = self.state;
        self.transition_to(TokenizerState::EntityInAttributeValue);
    }

    pub(super) fn step_entity_in_attribute_value(
        &mut self,
        src: &mut dyn CharSource,
    ) -> Result<(), TokenizeError> {
        let additional = match self.value_state {
            TokenizerState::AttributeValueDoubleQuoted => QUOTE,
            TokenizerState::AttributeValueSingleQuoted => APOS,
            _ => GT,
        };
        self.consume_char_ref(src, Some(additional))?;
        self.transition_to(self.value_state);
        Ok(())
    }
}
