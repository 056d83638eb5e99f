use super::{InputSource, TokenFmt, Tokenizer, TokenizerConfig, format_tokens};
use crate::collect::TokenCollector;
use crate::encoding::{CharSource, SourceIssue, TextSource};
use crate::entities::EntityTableKind;
use crate::handler::{ContentModelFlag, TextObserver, TokenHandler, TokenizerHandle};
use crate::shared::{
    Attributes, CollectingSink, Severity, Token, TokenizeError, XmlViolationPolicy,
};
use std::cell::RefCell;
use std::rc::Rc;

fn run_with(
    input: InputSource<'_>,
    collector: TokenCollector,
    config: TokenizerConfig,
) -> (Vec<String>, CollectingSink, Result<(), TokenizeError>) {
    let mut tokenizer = Tokenizer::with_sink(collector, CollectingSink::new(), config);
    let result = tokenizer.tokenize(input);
    let (collector, sink) = tokenizer.into_parts();
    (format_tokens(collector.tokens()), sink, result)
}

fn run_config(input: &str, config: TokenizerConfig) -> (Vec<String>, CollectingSink) {
    let (tokens, sink, result) = run_with(
        InputSource::from_text(input),
        TokenCollector::with_html_content_models(),
        config,
    );
    result.expect("tokenizing text must not fail");
    (tokens, sink)
}

fn run(input: &str) -> (Vec<String>, CollectingSink) {
    run_config(input, TokenizerConfig::default())
}

fn chars(text: &str) -> String {
    Token::Characters {
        text: text.to_string(),
    }
    .to_test_string()
}

fn messages(sink: &CollectingSink) -> Vec<String> {
    sink.diagnostics()
        .iter()
        .map(|d| format!("{} {}:{} {}", d.severity.as_str(), d.position.line, d.position.column, d.message))
        .collect()
}

#[test]
fn basic_tags_and_text() {
    let (tokens, sink) = run("<p class=a>hi</p>");
    assert_eq!(
        tokens,
        vec![
            "START name=p attrs=[class=\"a\"] self_closing=false",
            "CHAR text=\"hi\"",
            "END name=p",
            "EOF",
        ]
    );
    assert!(sink.diagnostics().is_empty(), "{:?}", messages(&sink));
}

#[test]
fn names_are_lowercased_and_values_kept() {
    let (tokens, _) = run("<A HREF='X' Data-Y=\"Z\">");
    assert_eq!(
        tokens[0],
        "START name=a attrs=[href=\"X\" data-y=\"Z\"] self_closing=false"
    );
}

#[test]
fn void_self_closing_is_allowed() {
    let (tokens, sink) = run("<br><br/>");
    assert_eq!(
        tokens,
        vec![
            "START name=br attrs=[] self_closing=false",
            "START name=br attrs=[] self_closing=true",
            "EOF",
        ]
    );
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn non_void_self_closing_is_an_error_and_ignored() {
    let (tokens, sink) = run("<div/>");
    assert_eq!(
        tokens,
        vec!["START name=div attrs=[] self_closing=false", "EOF"]
    );
    assert_eq!(sink.error_count(), 1);
    assert!(sink.mentions("Self-closing syntax"));
}

#[test]
fn duplicate_attribute_keeps_first() {
    let (tokens, sink) = run("<a b c=d b=e>");
    assert_eq!(
        tokens[0],
        "START name=a attrs=[b=\"\" c=\"d\"] self_closing=false"
    );
    assert!(sink.mentions("Duplicate attribute \u{201C}b\u{201D}."));
}

#[test]
fn end_tag_with_attributes_is_an_error() {
    let (tokens, sink) = run("</p class=x>");
    assert_eq!(tokens, vec!["END name=p", "EOF"]);
    assert!(sink.mentions("End tag had attributes."));
}

#[test]
fn eof_inside_tag_still_emits_it() {
    let (tokens, sink) = run("<div class");
    assert_eq!(
        tokens,
        vec!["START name=div attrs=[class=\"\"] self_closing=false", "EOF"]
    );
    assert_eq!(sink.error_count(), 1);
}

#[test]
fn stray_lt_recovery() {
    let (tokens, sink) = run("<>");
    assert_eq!(tokens, vec![chars("<>"), "EOF".to_string()]);
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("a < b");
    assert_eq!(tokens, vec![chars("a < b"), "EOF".to_string()]);
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("x<");
    assert_eq!(tokens, vec![chars("x<"), "EOF".to_string()]);
    assert!(sink.mentions("End of file after"));
}

#[test]
fn close_tag_open_recovery() {
    let (tokens, sink) = run("</>");
    assert_eq!(tokens, vec!["EOF"]);
    assert!(sink.mentions("Saw \u{201C}</>\u{201D}."));

    let (tokens, sink) = run("x</");
    assert_eq!(tokens, vec![chars("x</"), "EOF".to_string()]);
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("</ x>");
    assert_eq!(tokens, vec!["COMMENT text=\" x\"", "EOF"]);
    assert!(sink.mentions("Garbage after"));
}

#[test]
fn lt_before_attribute_value_emits_tag() {
    let (tokens, sink) = run("<a href=<b>");
    assert_eq!(
        tokens,
        vec![
            "START name=a attrs=[href=\"\"] self_closing=false",
            "START name=b attrs=[] self_closing=false",
            "EOF",
        ]
    );
    assert_eq!(sink.error_count(), 1);
}

#[test]
fn lt_inside_names_warns_and_is_kept() {
    let (tokens, sink) = run("<a<b c<d=e>");
    assert_eq!(
        tokens[0],
        "START name=a<b attrs=[c<d=\"e\"] self_closing=false"
    );
    assert_eq!(sink.warnings().count(), 2);
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn doctype_variants() {
    let (tokens, sink) = run("<!DOCTYPE html>");
    assert_eq!(
        tokens[0],
        "DOCTYPE name=html public_id=null system_id=null correct=true"
    );
    assert!(sink.diagnostics().is_empty());

    let (tokens, sink) = run("<!DOCTYPE>");
    assert_eq!(
        tokens[0],
        "DOCTYPE name= public_id=null system_id=null correct=false"
    );
    assert!(sink.mentions("Nameless doctype."));

    let (tokens, _) = run(
        "<!doctype HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" 'http://www.w3.org/TR/html4/strict.dtd'>",
    );
    assert_eq!(
        tokens[0],
        "DOCTYPE name=html public_id=\"-//W3C//DTD HTML 4.01//EN\" system_id=\"http://www.w3.org/TR/html4/strict.dtd\" correct=true"
    );

    let (tokens, sink) = run("<!DOCTYPE html SYSTEM \"about:legacy-compat\">");
    assert_eq!(
        tokens[0],
        "DOCTYPE name=html public_id=null system_id=\"about:legacy-compat\" correct=true"
    );
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn recovered_doctypes_are_incorrect() {
    let (tokens, sink) = run("<!DOCTYPE html bogus>x");
    assert_eq!(
        tokens,
        vec![
            "DOCTYPE name=html public_id=null system_id=null correct=false".to_string(),
            chars("x"),
            "EOF".to_string(),
        ]
    );
    assert!(sink.mentions("Bogus doctype."));

    let (tokens, sink) = run("<!DOCTYPE html");
    assert_eq!(
        tokens,
        vec![
            "DOCTYPE name=html public_id=null system_id=null correct=false",
            "EOF",
        ]
    );
    assert!(sink.mentions("End of file inside doctype."));

    let (tokens, _) = run("<!DOCTYPE html PUBLIC \"abc>");
    assert_eq!(
        tokens[0],
        "DOCTYPE name=html public_id=\"abc\" system_id=null correct=false"
    );
}

#[test]
fn comments() {
    let (tokens, sink) = run("<!-- hi --><!----><!-- a-b -->");
    assert_eq!(
        tokens,
        vec![
            "COMMENT text=\" hi \"",
            "COMMENT text=\"\"",
            "COMMENT text=\" a-b \"",
            "EOF",
        ]
    );
    assert!(sink.diagnostics().is_empty(), "{:?}", messages(&sink));

    let (tokens, sink) = run("<!-->");
    assert_eq!(tokens, vec!["COMMENT text=\"\"", "EOF"]);
    assert!(sink.mentions("Premature end of comment."));

    let (tokens, sink) = run("<!-- abc");
    assert_eq!(tokens, vec!["COMMENT text=\" abc\"", "EOF"]);
    assert!(sink.mentions("End of file inside comment."));
}

#[test]
fn bogus_comments() {
    let (tokens, sink) = run("<?xml version?>");
    assert_eq!(tokens, vec!["COMMENT text=\"?xml version?\"", "EOF"]);
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("<!x>");
    assert_eq!(tokens, vec!["COMMENT text=\"x\"", "EOF"]);
    assert!(sink.mentions("Bogus comment."));

    let (tokens, _) = run("<!DOCTYP>");
    assert_eq!(tokens, vec!["COMMENT text=\"DOCTYP\"", "EOF"]);
}

#[test]
fn double_hyphen_follows_comment_policy() {
    let input = "<!--a--b-->";

    let (tokens, sink) = run(input);
    assert_eq!(tokens[0], "COMMENT text=\"a- -b\"");
    assert_eq!(sink.error_count(), 1);
    assert_eq!(sink.warnings().count(), 1);

    let config = TokenizerConfig {
        comment_policy: XmlViolationPolicy::Allow,
        ..TokenizerConfig::default()
    };
    let (tokens, sink) = run_config(input, config);
    assert_eq!(tokens[0], "COMMENT text=\"a--b\"");
    assert_eq!(sink.warnings().count(), 1);

    let config = TokenizerConfig {
        comment_policy: XmlViolationPolicy::Fatal,
        ..TokenizerConfig::default()
    };
    let (tokens, sink, result) = run_with(
        InputSource::from_text(input),
        TokenCollector::new(),
        config,
    );
    let err = result.expect_err("fatal policy must abort");
    assert!(err.as_fatal().is_some());
    assert_eq!(tokens, vec!["EOF"]);
    assert_eq!(sink.with_severity(Severity::Fatal).count(), 1);
}

#[test]
fn trailing_hyphen_follows_comment_policy() {
    let (tokens, sink) = run("<!--a--->");
    assert_eq!(tokens[0], "COMMENT text=\"a- \"");
    assert!(sink.mentions("trailing hyphen"));
}

#[test]
fn comments_are_skipped_when_not_wanted() {
    let (tokens, _, result) = run_with(
        InputSource::from_text("<!-- hi -->x<?pi?>"),
        TokenCollector::new().without_comments(),
        TokenizerConfig::default(),
    );
    result.expect("tokenize");
    assert_eq!(tokens, vec![chars("x"), "EOF".to_string()]);
}

#[test]
fn named_references_in_text() {
    let (tokens, sink) = run("&amp;");
    assert_eq!(tokens[0], chars("&"));
    assert_eq!(sink.error_count(), 0);

    let (tokens, sink) = run("&amp");
    assert_eq!(tokens[0], chars("&"));
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("&notit;");
    assert_eq!(tokens[0], chars("\u{AC}it;"));
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("&NotEqualTilde;");
    assert_eq!(tokens[0], chars("\u{2242}\u{338}"));
    assert_eq!(sink.error_count(), 0);

    let (tokens, sink) = run("&bogus;");
    assert_eq!(tokens[0], chars("&bogus;"));
    assert!(sink.mentions("did not match an entity name"));
}

#[test]
fn ampersand_before_terminators_is_literal() {
    let (tokens, sink) = run("a & b &<x>&");
    assert_eq!(
        tokens,
        vec![
            chars("a & b &"),
            "START name=x attrs=[] self_closing=false".to_string(),
            chars("&"),
            "EOF".to_string(),
        ]
    );
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn numeric_references() {
    let cases: &[(&str, &str, usize)] = &[
        ("&#65;", "A", 0),
        ("&#x41;", "A", 0),
        ("&#X6a;", "j", 0),
        ("&#65", "A", 1),
        ("&#0;", "\u{FFFD}", 1),
        ("&#xD800;", "\u{FFFD}", 1),
        ("&#128;", "\u{20AC}", 1),
        ("&#x9F;", "\u{178}", 1),
        ("&#13;", "\n", 1),
        ("&#x110000;", "\u{FFFD}", 1),
        ("&#99999999999999999999;", "\u{FFFD}", 1),
        ("&#x1F600;", "\u{1F600}", 0),
        ("&#;", "&#;", 1),
        ("&#xg", "&#xg", 1),
    ];
    for (input, expected, errors) in cases {
        let (tokens, sink) = run(input);
        assert_eq!(tokens[0], chars(expected), "input {input}");
        assert_eq!(sink.error_count(), *errors, "input {input}: {:?}", messages(&sink));
    }
}

#[test]
fn references_in_attribute_values() {
    let (tokens, sink) = run("<a href=\"?a=1&copy=2\" t='&amp;x' u=&lt>");
    assert_eq!(
        tokens[0],
        "START name=a attrs=[href=\"?a=1&copy=2\" t=\"&x\" u=\"<\"] self_closing=false"
    );
    assert_eq!(sink.error_count(), 1, "{:?}", messages(&sink));

    let (tokens, sink) = run("<a t=\"&notit\">");
    assert_eq!(tokens[0], "START name=a attrs=[t=\"&notit\"] self_closing=false");
    assert_eq!(sink.error_count(), 0);

    let (tokens, sink) = run("<a t='&not x'>");
    assert_eq!(tokens[0], "START name=a attrs=[t=\"\u{AC} x\"] self_closing=false");
    assert_eq!(sink.error_count(), 1);

    let (tokens, sink) = run("<a t=\"&\">");
    assert_eq!(tokens[0], "START name=a attrs=[t=\"&\"] self_closing=false");
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn legacy_entity_table() {
    let config = TokenizerConfig {
        entity_table: EntityTableKind::Legacy,
        ..TokenizerConfig::default()
    };
    let (tokens, sink) = run_config("&amp;&eacute", config.clone());
    assert_eq!(tokens[0], chars("&\u{E9}"));
    assert_eq!(sink.error_count(), 1);

    let (tokens, _) = run_config("&NotEqualTilde;", config);
    assert_eq!(tokens[0], chars("&NotEqualTilde;"));
}

#[test]
fn rcdata_keeps_markup_as_text() {
    let (tokens, sink) = run("<title>a<b>&amp;</title>c");
    assert_eq!(
        tokens,
        vec![
            "START name=title attrs=[] self_closing=false".to_string(),
            chars("a<b>&"),
            "END name=title".to_string(),
            chars("c"),
            "EOF".to_string(),
        ]
    );
    assert!(sink.diagnostics().is_empty(), "{:?}", messages(&sink));
}

#[test]
fn rcdata_end_tag_cut_off_by_eof_is_an_error() {
    let (tokens, sink) = run("<title>x</title");
    assert_eq!(
        tokens,
        vec![
            "START name=title attrs=[] self_closing=false".to_string(),
            chars("x"),
            "END name=title".to_string(),
            "EOF".to_string(),
        ]
    );
    assert_eq!(sink.error_count(), 1, "{:?}", messages(&sink));
    assert!(sink.mentions("but saw end of file instead"));
}

#[test]
fn cdata_close_tag_must_match_element() {
    let (tokens, sink) = run("<script>if (a</b) x &amp;</SCRIPT >");
    assert_eq!(
        tokens,
        vec![
            "START name=script attrs=[] self_closing=false".to_string(),
            chars("if (a</b) x &amp;"),
            "END name=script".to_string(),
            "EOF".to_string(),
        ]
    );
    assert_eq!(sink.warnings().count(), 1);
    assert_eq!(sink.error_count(), 0);

    let config = TokenizerConfig {
        html4_mode: true,
        ..TokenizerConfig::default()
    };
    let (_, sink) = run_config("<style>a</b></style>", config);
    assert_eq!(sink.error_count(), 1);
    assert_eq!(sink.warnings().count(), 0);
}

#[test]
fn partial_close_tag_is_text() {
    let (tokens, _) = run("<xmp></xm</xmpl></xmp>");
    assert_eq!(
        tokens,
        vec![
            "START name=xmp attrs=[] self_closing=false".to_string(),
            chars("</xm</xmpl>"),
            "END name=xmp".to_string(),
            "EOF".to_string(),
        ]
    );
}

#[test]
fn escape_flag_hides_end_tags() {
    let (tokens, _) = run("<script><!--</script>--></script>");
    assert_eq!(
        tokens,
        vec![
            "START name=script attrs=[] self_closing=false".to_string(),
            chars("<!--</script>-->"),
            "END name=script".to_string(),
            "EOF".to_string(),
        ]
    );
}

#[test]
fn plaintext_is_never_left() {
    let (tokens, _) = run("<plaintext><b>&amp;</plaintext>");
    assert_eq!(
        tokens,
        vec![
            "START name=plaintext attrs=[] self_closing=false".to_string(),
            chars("<b>&amp;</plaintext>"),
            "EOF".to_string(),
        ]
    );
}

#[test]
fn initial_content_model_from_config() {
    let config = TokenizerConfig {
        initial_content_model: ContentModelFlag::Rcdata,
        initial_content_model_element: Some("textarea".to_string()),
        ..TokenizerConfig::default()
    };
    let (tokens, _) = run_config("a<b></TEXTAREA>c", config);
    assert_eq!(
        tokens,
        vec![
            chars("a<b>"),
            "END name=textarea".to_string(),
            chars("c"),
            "EOF".to_string(),
        ]
    );
}

struct PlaintextFromStart {
    text: Vec<u16>,
    eof: bool,
}

impl TokenHandler for PlaintextFromStart {
    fn start(&mut self, tokenizer: &mut TokenizerHandle<'_>) {
        tokenizer.set_content_model_flag(ContentModelFlag::Plaintext, "");
        assert_eq!(tokenizer.content_model_flag(), ContentModelFlag::Plaintext);
    }

    fn start_tag(
        &mut self,
        name: &str,
        _attributes: &Attributes,
        _self_closing: bool,
        _tokenizer: &mut TokenizerHandle<'_>,
    ) {
        panic!("unexpected start tag {name}");
    }

    fn end_tag(&mut self, name: &str) {
        panic!("unexpected end tag {name}");
    }

    fn characters(&mut self, text: &[u16]) {
        self.text.extend_from_slice(text);
    }

    fn eof(&mut self) {
        self.eof = true;
    }
}

#[test]
fn handler_can_switch_content_model_at_start() {
    let handler = PlaintextFromStart {
        text: Vec::new(),
        eof: false,
    };
    let mut tokenizer = Tokenizer::new(handler, TokenizerConfig::default());
    tokenizer
        .tokenize(InputSource::from_text("<p>x</p>"))
        .expect("tokenize");
    assert!(tokenizer.handler().eof);
    assert_eq!(String::from_utf16_lossy(&tokenizer.handler().text), "<p>x</p>");
}

#[test]
fn newlines_are_normalized() {
    let (tokens, _) = run("a\r\nb\rc\n\rd");
    assert_eq!(tokens[0], chars("a\nb\nc\n\nd"));
}

#[test]
fn nul_is_replaced_with_an_error_at_its_position() {
    let (tokens, sink) = run("a\n\0");
    assert_eq!(tokens[0], chars("a\n\u{FFFD}"));
    assert_eq!(
        messages(&sink),
        vec!["error 2:1 Found U+0000 in the character stream."]
    );
}

#[test]
fn positions_carry_document_ids() {
    let (_, sink, _) = run_with(
        InputSource::from_text("\0").with_system_id("doc.html").with_public_id("-//X"),
        TokenCollector::new(),
        TokenizerConfig::default(),
    );
    let position = &sink.diagnostics()[0].position;
    assert_eq!(position.system_id.as_deref(), Some("doc.html"));
    assert_eq!(position.public_id.as_deref(), Some("-//X"));
    assert_eq!((position.line, position.column), (1, 1));
}

#[test]
fn content_space_policy() {
    let (tokens, sink) = run("a\u{B}b");
    assert_eq!(tokens[0], chars("a b"));
    assert_eq!(sink.warnings().count(), 1);

    let allow = TokenizerConfig {
        content_space_policy: XmlViolationPolicy::Allow,
        ..TokenizerConfig::default()
    };
    let (tokens, sink) = run_config("a\u{C}b", allow);
    assert_eq!(tokens[0], chars("a\u{C}b"));
    assert!(sink.diagnostics().is_empty());

    let fatal = TokenizerConfig {
        content_space_policy: XmlViolationPolicy::Fatal,
        ..TokenizerConfig::default()
    };
    let (_, _, result) = run_with(
        InputSource::from_text("a\u{C}b"),
        TokenCollector::new(),
        fatal,
    );
    assert!(matches!(result, Err(TokenizeError::Fatal(_))));
}

#[test]
fn form_feed_in_tag_is_whitespace() {
    let (tokens, sink) = run("<a\u{C}b=c>");
    assert_eq!(tokens[0], "START name=a attrs=[b=\"c\"] self_closing=false");
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn non_xml_character_policy() {
    let (tokens, sink) = run("a\u{1}b\u{FFFF}");
    assert_eq!(tokens[0], chars("a\u{FFFD}b\u{FFFD}"));
    assert_eq!(sink.warnings().count(), 2);

    let allow = TokenizerConfig {
        content_non_xml_char_policy: XmlViolationPolicy::Allow,
        ..TokenizerConfig::default()
    };
    let (tokens, sink) = run_config("a\u{1}b", allow);
    assert_eq!(tokens[0], chars("a\u{1}b"));
    assert_eq!(sink.warnings().count(), 1);
}

#[test]
fn surrogates() {
    let (tokens, sink, _) = run_with(
        InputSource::from_utf16(vec![0x61, 0xDC00, 0x62]),
        TokenCollector::new(),
        TokenizerConfig::default(),
    );
    assert_eq!(tokens[0], chars("a\u{FFFD}b"));
    assert!(sink.mentions("lone low surrogate"));

    let (_, sink, _) = run_with(
        InputSource::from_utf16(vec![0x61, 0xD800, 0x62, 0xD800]),
        TokenCollector::new(),
        TokenizerConfig::default(),
    );
    assert_eq!(sink.errors().filter(|d| d.message.contains("lone high")).count(), 2);

    let (tokens, sink) = run("\u{1F600}");
    assert_eq!(tokens[0], chars("\u{1F600}"));
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn private_use_is_warned_once() {
    let (_, sink) = run("\u{E000}\u{E001}&#xE002;\u{F0000}");
    assert_eq!(sink.warnings().count(), 1);
    assert!(sink.mentions("Private Use"));
}

#[test]
fn astral_noncharacter_warns() {
    let (_, sink) = run("&#x1FFFF;");
    assert!(sink.mentions("astral non-character"));
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn identifier_overflow_is_fatal() {
    let config = TokenizerConfig {
        max_identifier_len: 4,
        ..TokenizerConfig::default()
    };
    let (tokens, sink, result) = run_with(
        InputSource::from_text("<abcd><abcdef>"),
        TokenCollector::new(),
        config,
    );
    let err = result.expect_err("overflow must be fatal");
    assert!(err.to_string().contains("Identifier exceeded"));
    assert_eq!(
        tokens,
        vec!["START name=abcd attrs=[] self_closing=false", "EOF"]
    );
    assert_eq!(sink.with_severity(Severity::Fatal).count(), 1);
}

#[test]
fn buffer_size_does_not_change_tokens() {
    let inputs = [
        "<!DOCTYPE html><html lang=en><head><title>T &amp; t</title></head>",
        "<p class=\"a b\" id=x>Hello&nbsp;world &notit; &#x1F600; &#128;</p>",
        "a\r\nb\r\n\r\nc\rd",
        "<script>var a = '</scr' + 'ipt>'; <!-- </script> --></script>",
        "<!-- a -- b --><!---->x<?pi?></ y>",
        "<a href='&copy=1&amp' b=\"&#65\">&</a>",
        "\u{1F600}\u{E000}\0\u{B}",
    ];
    for input in inputs {
        let (expected, expected_sink) = run(input);
        for buffer_size in [2, 3, 7] {
            let config = TokenizerConfig {
                buffer_size,
                ..TokenizerConfig::default()
            };
            let (tokens, sink) = run_config(input, config);
            assert_eq!(tokens, expected, "buffer {buffer_size} input {input:?}");
            assert_eq!(
                messages(&sink),
                messages(&expected_sink),
                "buffer {buffer_size} input {input:?}"
            );
        }
    }
}

#[test]
fn buffer_smaller_than_two_units_is_rejected() {
    let config = TokenizerConfig {
        buffer_size: 1,
        ..TokenizerConfig::default()
    };
    let (tokens, _, result) = run_with(
        InputSource::from_text("abc"),
        TokenCollector::new(),
        config,
    );
    assert!(matches!(result, Err(TokenizeError::InvalidBuffer { len: 1 })));
    assert!(tokens.is_empty());
}

#[test]
fn markup_free_text_round_trips() {
    let input = "plain text, with punctuation; and\ttabs\nand lines\u{E9}\u{1F600}";
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::new(),
        CollectingSink::new(),
        TokenizerConfig {
            buffer_size: 5,
            ..TokenizerConfig::default()
        },
    );
    tokenizer
        .tokenize(InputSource::from_text(input))
        .expect("tokenize");
    assert_eq!(tokenizer.handler().text(), input);
}

#[test]
fn counters_are_reset_per_parse() {
    let mut tokenizer =
        Tokenizer::with_sink(TokenCollector::new(), CollectingSink::new(), TokenizerConfig::default());
    for _ in 0..2 {
        tokenizer
            .tokenize(InputSource::from_text("<p>&amp</p>"))
            .expect("tokenize");
        let counters = tokenizer.counters();
        assert_eq!(counters.tokens_emitted, 4);
        assert_eq!(counters.errors, 1);
        assert_eq!(counters.warnings, 0);
    }
}

#[test]
fn state_does_not_leak_between_parses() {
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::with_html_content_models(),
        CollectingSink::new(),
        TokenizerConfig::default(),
    );
    tokenizer
        .tokenize(InputSource::from_text("<title>unterminated"))
        .expect("tokenize");
    tokenizer
        .tokenize(InputSource::from_text("<b>x</b>"))
        .expect("tokenize");
    let lines = format_tokens(tokenizer.handler().tokens());
    assert_eq!(
        &lines[3..],
        &[
            "START name=b attrs=[] self_closing=false".to_string(),
            chars("x"),
            "END name=b".to_string(),
            "EOF".to_string(),
        ]
    );
}

struct SharedText(Rc<RefCell<Vec<u16>>>);

impl TextObserver for SharedText {
    fn observe(&mut self, text: &[u16]) {
        self.0.borrow_mut().extend_from_slice(text);
    }
}

#[test]
fn text_observer_sees_all_characters() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::new(),
        CollectingSink::new(),
        TokenizerConfig {
            buffer_size: 3,
            ..TokenizerConfig::default()
        },
    );
    tokenizer.set_text_observer(Box::new(SharedText(Rc::clone(&seen))));
    tokenizer
        .tokenize(InputSource::from_text("ab<i>c&amp;d</i>"))
        .expect("tokenize");
    assert_eq!(String::from_utf16_lossy(&seen.borrow()), "abc&d");
    assert_eq!(tokenizer.handler().text(), "abc&d");
}

/// Text source that reports the meta sniffing window as already consumed.
struct PastMetaWindow(TextSource);

impl CharSource for PastMetaWindow {
    fn read_units(&mut self, dst: &mut [u16]) -> Result<usize, TokenizeError> {
        self.0.read_units(dst)
    }

    fn drain_issues(&mut self, _out: &mut Vec<SourceIssue>) {}

    fn meta_boundary_crossed(&self) -> bool {
        true
    }
}

#[test]
fn late_meta_charset_is_reported() {
    let mut tokenizer =
        Tokenizer::with_sink(TokenCollector::new(), CollectingSink::new(), TokenizerConfig::default());
    let mut source = PastMetaWindow(TextSource::from_text(
        "<meta content=x charset=utf-8><div charset=x>",
    ));
    tokenizer.tokenize_source(&mut source).expect("tokenize");
    assert_eq!(tokenizer.sink().error_count(), 1);
    assert!(tokenizer.sink().mentions("after the first 512 bytes"));

    let mut source = TextSource::from_text("<meta charset=utf-8>");
    tokenizer.tokenize_source(&mut source).expect("tokenize");
    assert_eq!(tokenizer.sink().error_count(), 1);
}

#[test]
fn sink_can_be_cleared_between_documents() {
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::with_html_content_models(),
        CollectingSink::new(),
        TokenizerConfig::default(),
    );
    tokenizer
        .tokenize(InputSource::from_text("<p"))
        .expect("tokenizing text must not fail");
    assert_eq!(tokenizer.sink().error_count(), 1);
    assert!(tokenizer.sink().mentions("but saw end of file instead"));

    tokenizer.sink_mut().clear();
    tokenizer
        .tokenize(InputSource::from_text("<p>ok</p>"))
        .expect("tokenizing text must not fail");
    let (_, sink) = tokenizer.into_parts();
    assert!(sink.into_diagnostics().is_empty());
}
