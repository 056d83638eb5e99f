#![no_main]

use html_lexer::{
    ContentModelFlag, InputSource, NullSink, Token, TokenCollector, Tokenizer, TokenizerConfig,
};
use libfuzzer_sys::fuzz_target;

const MODELS: [ContentModelFlag; 4] = [
    ContentModelFlag::Pcdata,
    ContentModelFlag::Rcdata,
    ContentModelFlag::Cdata,
    ContentModelFlag::Plaintext,
];

fn collect(units: &[u16], model: ContentModelFlag, buffer_size: usize) -> Vec<Token> {
    let config = TokenizerConfig {
        buffer_size,
        initial_content_model: model,
        initial_content_model_element: Some("xmp".to_string()),
        ..TokenizerConfig::default()
    };
    let mut tokenizer = Tokenizer::with_sink(TokenCollector::new(), NullSink, config);
    if tokenizer.tokenize(InputSource::from_utf16(units.to_vec())).is_err() {
        return Vec::new();
    }
    tokenizer.into_parts().0.into_tokens()
}

fn markup_free(data: &[u8]) -> String {
    data.iter()
        .map(|&b| match b % 28 {
            26 => ' ',
            27 => '\n',
            n => char::from(b'a' + n),
        })
        .collect()
}

// Output must not depend on how the input is windowed, and markup-free
// text must come back unchanged.
fuzz_target!(|data: &[u8]| {
    let plain = markup_free(data);
    let mut tokenizer =
        Tokenizer::with_sink(TokenCollector::new(), NullSink, TokenizerConfig::default());
    tokenizer
        .tokenize(InputSource::from_text(&plain))
        .expect("plain text must tokenize");
    assert_eq!(tokenizer.handler().text(), plain);

    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let units: Vec<u16> = rest
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let model = MODELS[usize::from(selector) % MODELS.len()];
    let whole = collect(&units, model, units.len().max(2));
    let windowed = collect(&units, model, usize::from(selector >> 2).max(2));
    assert_eq!(whole, windowed);
});
