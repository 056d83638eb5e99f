//! A `TokenHandler` that records owned tokens.

use crate::handler::{ContentModelFlag, TokenHandler, TokenizerHandle};
use crate::shared::{Attributes, Token};

/// Records every token, merging adjacent character runs.
///
/// Optionally applies content-model rules by element name, standing in for
/// the tree builder's switching of `title`, `script` and friends.
#[derive(Debug)]
pub struct TokenCollector {
    tokens: Vec<Token>,
    pending_text: Vec<u16>,
    rules: Vec<(String, ContentModelFlag)>,
    wants_comments: bool,
}

impl Default for TokenCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCollector {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            pending_text: Vec::new(),
            rules: Vec::new(),
            wants_comments: true,
        }
    }

    /// Content-model switching for the usual HTML elements.
    pub fn with_html_content_models() -> Self {
        let mut collector = Self::new();
        for name in ["textarea", "title"] {
            collector = collector.with_content_model(name, ContentModelFlag::Rcdata);
        }
        for name in ["iframe", "noembed", "noframes", "script", "style", "xmp"] {
            collector = collector.with_content_model(name, ContentModelFlag::Cdata);
        }
        collector.with_content_model("plaintext", ContentModelFlag::Plaintext)
    }

    pub fn with_content_model(mut self, element: &str, flag: ContentModelFlag) -> Self {
        self.rules.push((element.to_string(), flag));
        self
    }

    pub fn without_comments(mut self) -> Self {
        self.wants_comments = false;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Concatenated text of all character tokens.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Characters { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let text = String::from_utf16_lossy(&self.pending_text);
        self.pending_text.clear();
        self.tokens.push(Token::Characters { text });
    }
}

impl TokenHandler for TokenCollector {
    fn wants_comments(&self) -> bool {
        self.wants_comments
    }

    fn doctype(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
        correct: bool,
    ) {
        self.flush_text();
        self.tokens.push(Token::Doctype {
            name: name.to_string(),
            public_id: public_id.map(str::to_string),
            system_id: system_id.map(str::to_string),
            correct,
        });
    }

    fn start_tag(
        &mut self,
        name: &str,
        attributes: &Attributes,
        self_closing: bool,
        tokenizer: &mut TokenizerHandle<'_>,
    ) {
        self.flush_text();
        self.tokens.push(Token::StartTag {
            name: name.to_string(),
            attributes: attributes.clone(),
            self_closing,
        });
        if let Some((_, flag)) = self.rules.iter().find(|(element, _)| element == name) {
            tokenizer.set_content_model_flag(*flag, name);
        }
    }

    fn end_tag(&mut self, name: &str) {
        self.flush_text();
        self.tokens.push(Token::EndTag {
            name: name.to_string(),
        });
    }

    fn comment(&mut self, text: &[u16]) {
        self.flush_text();
        self.tokens.push(Token::Comment {
            text: String::from_utf16_lossy(text),
        });
    }

    fn characters(&mut self, text: &[u16]) {
        self.pending_text.extend_from_slice(text);
    }

    fn eof(&mut self) {
        self.flush_text();
        self.tokens.push(Token::Eof);
    }
}
