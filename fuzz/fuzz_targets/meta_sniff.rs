#![no_main]

use html_lexer::encoding::{ByteStream, SNIFFING_LIMIT, sniff_meta};
use html_lexer::{CollectingSink, DocumentIds};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut stream = ByteStream::new(data);
    let mut sink = CollectingSink::new();
    let Ok(found) = sniff_meta(&mut stream, &mut sink, &DocumentIds::default()) else {
        return;
    };
    assert!(stream.buffered().len() <= SNIFFING_LIMIT);
    if let Some(charset) = found {
        assert!(charset.is_ascii_superset());
    }
});
