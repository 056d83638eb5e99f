use html_lexer::entities::{EntityTable, EntityTableKind, decode_entities};
use html_lexer::{CollectingSink, InputSource, TokenCollector, Tokenizer, TokenizerConfig};

fn text_of(input: &str, config: TokenizerConfig) -> (String, CollectingSink) {
    let mut tokenizer = Tokenizer::with_sink(TokenCollector::new(), CollectingSink::new(), config);
    tokenizer
        .tokenize(InputSource::from_text(input))
        .expect("tokenizing text must not fail");
    let (collector, sink) = tokenizer.into_parts();
    (collector.text(), sink)
}

fn table_config(kind: EntityTableKind) -> TokenizerConfig {
    TokenizerConfig {
        entity_table: kind,
        ..TokenizerConfig::default()
    }
}

fn windowed(buffer_size: usize) -> TokenizerConfig {
    TokenizerConfig {
        buffer_size,
        ..TokenizerConfig::default()
    }
}

#[test]
fn every_terminated_html5_name_decodes_cleanly() {
    let table = EntityTable::get(EntityTableKind::Html5);
    let mut checked = 0;
    for index in 0..table.len() {
        let name = table.name(index);
        if !name.ends_with(b";") {
            continue;
        }
        let name = std::str::from_utf8(name).expect("entity names are ASCII");
        let expected = String::from_utf16(table.value(index)).expect("entity values are valid");
        let (text, sink) = text_of(&format!("&{name}"), TokenizerConfig::default());
        assert_eq!(text, expected, "&{name}");
        assert_eq!(sink.error_count(), 0, "&{name}: {:?}", sink.diagnostics());
        checked += 1;
    }
    assert!(checked > 2000);
}

#[test]
fn every_legacy_name_decodes_with_a_semicolon() {
    let table = EntityTable::get(EntityTableKind::Legacy);
    for index in 0..table.len() {
        let name = std::str::from_utf8(table.name(index)).expect("entity names are ASCII");
        let expected = String::from_utf16(table.value(index)).expect("entity values are valid");
        let (text, sink) = text_of(&format!("&{name};."), table_config(EntityTableKind::Legacy));
        assert_eq!(text, format!("{expected}."), "&{name};");
        assert_eq!(sink.error_count(), 0, "&{name};: {:?}", sink.diagnostics());
    }
}

#[test]
fn unterminated_historical_names_still_decode() {
    for kind in [EntityTableKind::Legacy, EntityTableKind::Html5] {
        let (text, sink) = text_of("&copy 2024 &lt", table_config(kind));
        assert_eq!(text, "\u{A9} 2024 <", "{kind:?}");
        assert_eq!(sink.error_count(), 2, "{kind:?}");
        assert!(sink.mentions("was not terminated by a semicolon"));
    }
}

#[test]
fn html5_only_names_are_unknown_to_the_legacy_table() {
    let (text, sink) = text_of("&hellip; &bernou;", table_config(EntityTableKind::Legacy));
    assert_eq!(text, "\u{2026} &bernou;");
    assert_eq!(sink.error_count(), 1);

    let (text, sink) = text_of("&hellip; &bernou;", TokenizerConfig::default());
    assert_eq!(text, "\u{2026} \u{212C}");
    assert_eq!(sink.error_count(), 0);
}

#[test]
fn references_split_across_refills() {
    let input = "x&amp;y&notit;&#x1F600;&#128;<a t='&lt;&copy=1'>&CounterClockwiseContourIntegral;";
    let (whole, whole_sink) = text_of(input, TokenizerConfig::default());
    for size in [2, 3, 4, 5, 11] {
        let (text, sink) = text_of(input, windowed(size));
        assert_eq!(text, whole, "buffer {size}");
        assert_eq!(sink.error_count(), whole_sink.error_count(), "buffer {size}");
    }
    assert_eq!(whole, "x&y\u{AC}it;\u{1F600}\u{20AC}\u{2233}");
}

#[test]
fn decode_entities_agrees_with_the_tokenizer_on_plain_text() {
    let inputs = [
        "fish &amp; chips",
        "&lt;b&gt; is bold",
        "&#65;&#x42;&#X43;",
        "caf&eacute; &hellip; &#x1F600;",
        "no references at all",
        "&nesim; &NotEqualTilde;",
    ];
    for input in inputs {
        let (text, sink) = text_of(input, TokenizerConfig::default());
        assert_eq!(sink.error_count(), 0, "{input}");
        assert_eq!(decode_entities(input), text, "{input}");
    }
}

#[test]
fn decoding_is_idempotent_once_ampersands_are_gone() {
    let input = "caf\u{E9} \u{2026} \u{1F600} plain";
    let (first, _) = text_of(input, TokenizerConfig::default());
    let (second, sink) = text_of(&first, TokenizerConfig::default());
    assert_eq!(first, input);
    assert_eq!(second, first);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn private_use_references_warn_once_per_document() {
    let (text, sink) = text_of("&#xE000;&#xE001;<b>&#xF0000;</b>", windowed(3));
    assert_eq!(text, "\u{E000}\u{E001}\u{F0000}");
    assert_eq!(sink.warnings().count(), 1);
    assert_eq!(sink.error_count(), 0);
}
