#![no_main]

use html_lexer::{
    CollectingSink, InputSource, Severity, TokenCollector, Tokenizer, TokenizerConfig,
};
use libfuzzer_sys::fuzz_target;

// First byte picks the window size so refills land everywhere.
fuzz_target!(|data: &[u8]| {
    let Some((&window, bytes)) = data.split_first() else {
        return;
    };
    let config = TokenizerConfig {
        buffer_size: usize::from(window).max(2),
        ..TokenizerConfig::default()
    };
    let mut tokenizer = Tokenizer::with_sink(TokenCollector::new(), CollectingSink::new(), config);
    let result = tokenizer.tokenize(InputSource::from_bytes(bytes));
    let counters = tokenizer.counters();
    let (_, sink) = tokenizer.into_parts();
    let errors =
        sink.with_severity(Severity::Error).count() + sink.with_severity(Severity::Fatal).count();
    assert_eq!(counters.errors, errors as u64);
    if result.is_ok() {
        assert!(sink.with_severity(Severity::Fatal).next().is_none());
    }
});
