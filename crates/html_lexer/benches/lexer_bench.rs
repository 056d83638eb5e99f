use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html_lexer::{
    Attributes, InputSource, NullSink, TokenCollector, TokenHandler, Tokenizer, TokenizerConfig,
    TokenizerHandle,
};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

/// Counts tokens without keeping them.
#[derive(Default)]
struct CountingHandler {
    tags: usize,
    text_units: usize,
}

impl TokenHandler for CountingHandler {
    fn wants_comments(&self) -> bool {
        false
    }

    fn start_tag(
        &mut self,
        _name: &str,
        _attributes: &Attributes,
        _self_closing: bool,
        _tokenizer: &mut TokenizerHandle<'_>,
    ) {
        self.tags += 1;
    }

    fn end_tag(&mut self, _name: &str) {
        self.tags += 1;
    }

    fn characters(&mut self, text: &[u16]) {
        self.text_units += text.len();
    }
}

fn make_blocks(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 96 + 64);
    out.push_str("<!DOCTYPE html><html><head><title>bench</title></head><body>");
    for i in 0..blocks {
        out.push_str("<div class=box id=b");
        out.push_str(&i.to_string());
        out.push_str("><span>caf\u{e9} &amp; cr\u{e8}me</span><!-- c --><img src=x alt='&copy;'></div>\n");
    }
    out.push_str("</body></html>");
    out
}

fn make_reference_heavy(bytes: usize) -> String {
    let mut body = String::with_capacity(bytes + 32);
    while body.len() < bytes {
        body.push_str("&amp;&lt;&notit;&#x1F600;&#128;&CounterClockwiseContourIntegral;");
    }
    body
}

fn count(input: InputSource<'_>) -> usize {
    let mut tokenizer =
        Tokenizer::with_sink(CountingHandler::default(), NullSink, TokenizerConfig::default());
    tokenizer
        .tokenize(input)
        .expect("benchmark input must tokenize");
    let handler = tokenizer.handler();
    handler.tags + handler.text_units
}

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| black_box(count(InputSource::from_text(black_box(&input)))));
    });
}

fn bench_tokenize_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_tokenize_large", |b| {
        b.iter(|| black_box(count(InputSource::from_text(black_box(&input)))));
    });
}

fn bench_collect_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_collect_large", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::with_sink(
                TokenCollector::with_html_content_models(),
                NullSink,
                TokenizerConfig::default(),
            );
            tokenizer
                .tokenize(InputSource::from_text(black_box(&input)))
                .expect("benchmark input must tokenize");
            black_box(tokenizer.handler().tokens().len());
        });
    });
}

fn bench_decode_windows_1252_large(c: &mut Criterion) {
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&make_blocks(LARGE_BLOCKS));
    let bytes = bytes.into_owned();
    c.bench_function("bench_decode_windows_1252_large", |b| {
        b.iter(|| black_box(count(InputSource::from_bytes(black_box(&bytes)))));
    });
}

fn bench_utf8_declared_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_utf8_declared_large", |b| {
        b.iter(|| {
            let source = InputSource::from_bytes(black_box(input.as_bytes())).with_encoding("utf-8");
            black_box(count(source))
        });
    });
}

fn bench_small_windows(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS * 16);
    c.bench_function("bench_small_windows", |b| {
        b.iter(|| {
            let config = TokenizerConfig {
                buffer_size: 7,
                ..TokenizerConfig::default()
            };
            let mut tokenizer = Tokenizer::with_sink(CountingHandler::default(), NullSink, config);
            tokenizer
                .tokenize(InputSource::from_text(black_box(&input)))
                .expect("benchmark input must tokenize");
            black_box(tokenizer.handler().tags);
        });
    });
}

fn bench_references_adversarial(c: &mut Criterion) {
    let input = make_reference_heavy(512 * 1024);
    c.bench_function("bench_references_adversarial", |b| {
        b.iter(|| black_box(count(InputSource::from_text(black_box(&input)))));
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_tokenize_large,
    bench_collect_large,
    bench_decode_windows_1252_large,
    bench_utf8_declared_large,
    bench_small_windows,
    bench_references_adversarial
);
criterion_main!(benches);
