use html_lexer::encoding::{Charset, Confidence};
use html_lexer::{
    CollectingSink, InputSource, Severity, Token, TokenCollector, TokenizeError, Tokenizer,
    TokenizerConfig, format_tokens,
};
use std::io::{self, Read};

struct Run {
    tokens: Vec<String>,
    sink: CollectingSink,
    charset: Option<Charset>,
    confidence: Option<Confidence>,
    result: Result<(), TokenizeError>,
}

fn tokenize(input: InputSource<'_>) -> Run {
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::new(),
        CollectingSink::new(),
        TokenizerConfig::default(),
    );
    let result = tokenizer.tokenize(input);
    let resolved = tokenizer.resolved_encoding();
    let (collector, sink) = tokenizer.into_parts();
    Run {
        tokens: format_tokens(collector.tokens()),
        sink,
        charset: resolved.map(|r| r.charset),
        confidence: resolved.map(|r| r.confidence),
        result,
    }
}

fn chars(text: &str) -> String {
    format_tokens(&[Token::Characters {
        text: text.to_string(),
    }])
    .remove(0)
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[test]
fn utf8_bom_is_swallowed() {
    let run = tokenize(InputSource::from_bytes(b"\xEF\xBB\xBF<p>caf\xC3\xA9"));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Bom));
    assert_eq!(run.charset, Some(Charset::utf_8()));
    assert_eq!(
        run.tokens,
        vec![
            "START name=p attrs=[] self_closing=false".to_string(),
            chars("caf\u{e9}"),
            "EOF".to_string(),
        ]
    );
    assert!(run.sink.diagnostics().is_empty());
}

#[test]
fn bom_does_not_shift_columns() {
    let run = tokenize(InputSource::from_bytes(b"\xEF\xBB\xBF\x00").with_encoding("utf-8"));
    run.result.expect("tokenize");
    let nul = run
        .sink
        .errors()
        .find(|d| d.message == "Found U+0000 in the character stream.")
        .expect("NUL reported");
    assert_eq!((nul.position.line, nul.position.column), (1, 1));
}

#[test]
fn meta_charset_within_window_selects_decoder() {
    let run = tokenize(InputSource::from_bytes(
        b"<meta charset=\"shift_jis\"><p>\x82\xA0</p>",
    ));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::MetaSniffed));
    assert_eq!(run.charset.map(Charset::name), Some("Shift_JIS"));
    assert_eq!(
        run.tokens,
        vec![
            "START name=meta attrs=[charset=\"shift_jis\"] self_closing=false".to_string(),
            "START name=p attrs=[] self_closing=false".to_string(),
            chars("\u{3042}"),
            "END name=p".to_string(),
            "EOF".to_string(),
        ]
    );
    assert!(run.sink.diagnostics().is_empty(), "{:?}", run.sink.diagnostics());
}

#[test]
fn meta_charset_after_window_is_late() {
    let mut bytes = b"<!--".to_vec();
    bytes.extend(std::iter::repeat_n(b'x', 600));
    bytes.extend_from_slice(b"--><meta charset=\"shift_jis\">\xE9");
    let run = tokenize(InputSource::from_bytes(&bytes));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Default));
    assert_eq!(run.charset, Some(Charset::windows_1252()));
    assert_eq!(run.tokens[run.tokens.len() - 2], chars("\u{e9}"));
    let late: Vec<_> = run
        .sink
        .errors()
        .filter(|d| d.message.contains("found after the first 512 bytes"))
        .collect();
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].severity, Severity::Error);
}

#[test]
fn meta_charset_inside_window_is_not_late() {
    let mut bytes = b"<meta charset=utf-8>".to_vec();
    bytes.extend(std::iter::repeat_n(b'a', 2000));
    let run = tokenize(InputSource::from_bytes(&bytes));
    run.result.expect("tokenize");
    assert!(!run.sink.mentions("found after the first 512 bytes"));
}

#[test]
fn malformed_bytes_are_reported_at_their_position() {
    let run = tokenize(InputSource::from_bytes(b"<p>a\n b\xFFc</p>").with_encoding("utf-8"));
    run.result.expect("tokenize");
    assert_eq!(run.tokens[1], chars("a\n b\u{FFFD}c"));
    let errors: Vec<_> = run.sink.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Malformed byte sequence: \u{201C}ff\u{201D}."
    );
    assert_eq!((errors[0].position.line, errors[0].position.column), (2, 3));
}

#[test]
fn truncated_tail_is_replaced() {
    let run = tokenize(InputSource::from_bytes(b"ok\xE2\x82").with_encoding("utf-8"));
    run.result.expect("tokenize");
    assert_eq!(run.tokens, vec![chars("ok\u{FFFD}"), "EOF".to_string()]);
    assert_eq!(run.sink.error_count(), 1);
}

#[test]
fn declared_encoding_beats_meta() {
    let run = tokenize(
        InputSource::from_bytes(b"<meta charset=utf-8>\xC0").with_encoding("windows-1251"),
    );
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Declared));
    assert_eq!(run.tokens[1], chars("\u{0410}"));
}

#[test]
fn declared_iso_8859_1_is_windows_1252() {
    let run = tokenize(InputSource::from_bytes(b"\x80").with_encoding("ISO-8859-1"));
    run.result.expect("tokenize");
    assert_eq!(run.charset, Some(Charset::windows_1252()));
    assert_eq!(run.tokens[0], chars("\u{20AC}"));
    assert!(run.sink.diagnostics().is_empty());
}

#[test]
fn unknown_declared_encoding_falls_back_to_sniffing() {
    let run = tokenize(InputSource::from_bytes(b"\xEF\xBB\xBFx").with_encoding("klingon"));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Bom));
    assert!(run.sink.mentions(
        "Unsupported character encoding name: \u{201C}klingon\u{201D}. Will sniff."
    ));
}

#[test]
fn declared_label_is_reported_in_lower_case() {
    let run = tokenize(InputSource::from_bytes(b"x").with_encoding(" Klingon "));
    run.result.expect("tokenize");
    assert!(run.sink.mentions("\u{201C}klingon\u{201D}. Will sniff."));
}

#[test]
fn utf16_boms() {
    let mut le = vec![0xFF, 0xFE];
    le.extend(utf16le("<b>\u{1F600}</b>"));
    let run = tokenize(InputSource::from_bytes(&le));
    run.result.expect("tokenize");
    assert_eq!(run.charset, Some(Charset::utf_16le()));
    assert_eq!(run.tokens[1], chars("\u{1F600}"));

    let mut be = vec![0xFE, 0xFF];
    be.extend("<i>".encode_utf16().flat_map(u16::to_be_bytes));
    let run = tokenize(InputSource::from_bytes(&be));
    run.result.expect("tokenize");
    assert_eq!(run.charset, Some(Charset::utf_16be()));
    assert_eq!(run.tokens[0], "START name=i attrs=[] self_closing=false");
}

#[test]
fn declared_utf16_honours_a_byte_order_mark() {
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend("x".encode_utf16().flat_map(u16::to_be_bytes));
    let run = tokenize(InputSource::from_bytes(&bytes).with_encoding("utf-16"));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Declared));
    assert_eq!(run.tokens, vec![chars("x"), "EOF".to_string()]);
}

#[test]
fn utf32_bom() {
    let mut bytes = vec![0x00, 0x00, 0xFE, 0xFF];
    for ch in "<a>\u{10400}".chars() {
        bytes.extend_from_slice(&u32::from(ch).to_be_bytes());
    }
    let run = tokenize(InputSource::from_bytes(&bytes));
    run.result.expect("tokenize");
    assert_eq!(run.charset, Some(Charset::Utf32Be));
    assert_eq!(
        run.tokens,
        vec![
            "START name=a attrs=[] self_closing=false".to_string(),
            chars("\u{10400}"),
            "EOF".to_string(),
        ]
    );
}

#[test]
fn default_encoding_warns_once() {
    let run = tokenize(InputSource::from_bytes(b"plain \x93quoted\x94"));
    run.result.expect("tokenize");
    assert_eq!(run.confidence, Some(Confidence::Default));
    assert_eq!(run.tokens[0], chars("plain \u{201C}quoted\u{201D}"));
    let warnings: Vec<_> = run.sink.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Could not determine the character encoding of the document. Using \u{201C}windows-1252\u{201D}."
    );
    assert_eq!((warnings[0].position.line, warnings[0].position.column), (1, 0));
}

#[test]
fn sniffing_diagnostics_are_counted() {
    let mut tokenizer = Tokenizer::with_sink(
        TokenCollector::new(),
        CollectingSink::new(),
        TokenizerConfig::default(),
    );
    tokenizer
        .tokenize(InputSource::from_bytes(b"<p>"))
        .expect("tokenize");
    let counters = tokenizer.counters();
    assert_eq!(counters.warnings, 1);
    assert_eq!(counters.errors, 0);
    assert_eq!(counters.tokens_emitted, 2);
}

#[test]
fn document_ids_reach_sniffing_diagnostics() {
    let run = tokenize(
        InputSource::from_bytes(b"x")
            .with_system_id("page.html")
            .with_public_id("-//Example//EN"),
    );
    run.result.expect("tokenize");
    let warning = &run.sink.diagnostics()[0];
    assert_eq!(warning.position.system_id.as_deref(), Some("page.html"));
    assert_eq!(warning.position.public_id.as_deref(), Some("-//Example//EN"));
    assert_eq!(
        warning.to_string(),
        "warning at page.html:1:0 (-//Example//EN): Could not determine the character encoding of the document. Using \u{201C}windows-1252\u{201D}."
    );
}

/// Serves `data`, then fails every later read.
struct FailingReader {
    data: Vec<u8>,
    pos: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::other("connection reset"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn reader_failure_aborts_without_eof() {
    let mut data = b"<p>".to_vec();
    data.extend(std::iter::repeat_n(b'a', 1000));
    let reader = FailingReader { data, pos: 0 };
    let run = tokenize(InputSource::from_reader(reader).with_encoding("utf-8"));
    match run.result {
        Err(TokenizeError::Io(err)) => assert_eq!(err.to_string(), "connection reset"),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(run.tokens[0], "START name=p attrs=[] self_closing=false");
    assert!(!run.tokens.iter().any(|t| t == "EOF"));
}

#[test]
fn reader_failure_during_sniffing() {
    let reader = FailingReader {
        data: b"<p>".to_vec(),
        pos: 0,
    };
    let run = tokenize(InputSource::from_reader(reader));
    assert!(matches!(run.result, Err(TokenizeError::Io(_))));
    assert!(run.tokens.is_empty());
}
