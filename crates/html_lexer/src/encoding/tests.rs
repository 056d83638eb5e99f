use super::reader::malformed_message;
use super::{
    ByteSource, ByteStream, CharSource, Charset, Confidence, SNIFFING_LIMIT, SourceIssue,
    extract_charset_from_content, is_iana_registered, is_obscure, is_preferred_name,
    resolve_encoding, sniff_bom, sniff_meta,
};
use crate::shared::{CollectingSink, DocumentIds, Severity};

fn stream(bytes: &[u8]) -> ByteStream<&[u8]> {
    ByteStream::new(bytes)
}

fn meta(bytes: &[u8]) -> (Option<Charset>, CollectingSink) {
    let mut sink = CollectingSink::new();
    let found = sniff_meta(&mut stream(bytes), &mut sink, &DocumentIds::default())
        .expect("in-memory reads cannot fail");
    (found, sink)
}

/// Decode `bytes` completely with `buffer`-sized reads, collecting issues
/// with offsets relative to the whole output.
fn decode_all(
    bytes: &[u8],
    declared: Option<&str>,
    buffer: usize,
) -> (String, Vec<SourceIssue>, Confidence, CollectingSink) {
    let mut sink = CollectingSink::new();
    let mut bytes = stream(bytes);
    let resolved = resolve_encoding(&mut bytes, declared, &mut sink, &DocumentIds::default())
        .expect("in-memory reads cannot fail");
    let mut reader = resolved.into_code_unit_stream(bytes);
    let mut units = Vec::new();
    let mut issues = Vec::new();
    let mut chunk = vec![0u16; buffer];
    loop {
        let n = reader.read_units(&mut chunk).expect("decode");
        let mut fresh = Vec::new();
        reader.drain_issues(&mut fresh);
        for mut issue in fresh {
            issue.offset += units.len();
            issues.push(issue);
        }
        if n == 0 {
            break;
        }
        units.extend_from_slice(&chunk[..n]);
    }
    (
        String::from_utf16_lossy(&units),
        issues,
        resolved.confidence,
        sink,
    )
}

#[test]
fn bom_detection() {
    let cases: [(&[u8], Option<(Charset, usize)>); 8] = [
        (b"\xEF\xBB\xBFabc", Some((Charset::utf_8(), 3))),
        (b"\xFF\xFEa\x00", Some((Charset::utf_16le(), 2))),
        (b"\xFE\xFF\x00a", Some((Charset::utf_16be(), 2))),
        (b"\xFF\xFE\x00\x00", Some((Charset::Utf32Le, 4))),
        (b"\x00\x00\xFE\xFF", Some((Charset::Utf32Be, 4))),
        (b"\xEF\xBBa", None),
        (b"<html>", None),
        (b"", None),
    ];
    for (bytes, expected) in cases {
        let found = sniff_bom(&mut stream(bytes)).expect("read");
        assert_eq!(
            found.map(|bom| (bom.charset, bom.len)),
            expected,
            "input {bytes:?}"
        );
    }
}

#[test]
fn meta_charset_attribute() {
    let (found, sink) = meta(b"<html><head><meta charset=\"shift_jis\"><title>x</title>");
    assert_eq!(found.map(Charset::name), Some("Shift_JIS"));
    assert!(sink.diagnostics().is_empty(), "{:?}", sink.diagnostics());
}

#[test]
fn meta_content_attribute() {
    let (found, _) = meta(
        b"<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=iso-8859-2\">",
    );
    assert_eq!(found.map(Charset::name), Some("ISO-8859-2"));
}

#[test]
fn meta_in_comments_and_other_tags_is_ignored() {
    let (found, _) = meta(
        b"<!-- <meta charset=koi8-r> --><div charset=big5></meta charset=gbk><meta charset=windows-1251>",
    );
    assert_eq!(found.map(Charset::name), Some("windows-1251"));
}

#[test]
fn meta_comment_needs_two_hyphens_before_gt() {
    let (found, _) = meta(b"<!-- -> <meta charset=koi8-r> --><meta charset=euc-kr>");
    assert_eq!(found.map(Charset::name), Some("EUC-KR"));
}

#[test]
fn meta_utf16_declaration_means_utf8() {
    let (found, sink) = meta(b"<meta charset=utf-16>");
    assert_eq!(found, Some(Charset::utf_8()));
    let errors: Vec<_> = sink.errors().map(|d| d.message.as_str()).collect();
    assert_eq!(
        errors,
        vec![
            "The internal character encoding declaration specified \u{201C}utf-16\u{201D} which is not a rough superset of ASCII. Using \u{201C}UTF-8\u{201D} instead."
        ]
    );
}

#[test]
fn meta_unknown_label_keeps_sniffing() {
    let (found, sink) = meta(b"<meta charset=klingon><meta charset=utf-8>");
    assert_eq!(found, Some(Charset::utf_8()));
    assert!(sink.mentions(
        "Unsupported character encoding name: \u{201C}klingon\u{201D}. Will continue sniffing."
    ));
}

#[test]
fn meta_labels_are_reported_in_lower_case() {
    let (found, sink) = meta(b"<meta charset=\"UNICODE\"><meta charset=KLINGON><meta charset=UTF-8>");
    assert_eq!(found, Some(Charset::utf_8()));
    assert!(sink.mentions("The encoding \u{201C}unicode\u{201D} is not an ASCII superset"));
    assert!(sink.mentions("\u{201C}klingon\u{201D}. Will continue sniffing."));
    assert!(!sink.mentions("UNICODE"));
}

#[test]
fn meta_outside_window_is_not_seen() {
    let mut bytes = vec![b' '; SNIFFING_LIMIT];
    bytes.extend_from_slice(b"<meta charset=utf-8>");
    let (found, sink) = meta(&bytes);
    assert_eq!(found, None);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn meta_non_preferred_label_is_reported() {
    let (found, sink) = meta(b"<meta charset=latin1>");
    assert_eq!(found, Some(Charset::windows_1252()));
    assert_eq!(sink.error_count(), 0);
    assert_eq!(sink.warnings().count(), 1);
    assert!(sink.mentions("(Charmod C024)"));
}

#[test]
fn meta_private_label_is_reported() {
    let (found, sink) = meta(b"<meta charset=x-mac-cyrillic>");
    assert_eq!(found.map(Charset::name), Some("x-mac-cyrillic"));
    assert!(sink.mentions("is not an IANA-registered encoding. (Charmod C022)"));
    assert_eq!(sink.warnings().count(), 1);
}

#[test]
fn content_value_extraction() {
    let cases: [(&[u8], Option<&[u8]>); 7] = [
        (b"text/html; charset=utf-8", Some(&b"utf-8"[..])),
        (b"text/html;CHARSET = 'koi8-r'", Some(&b"koi8-r"[..])),
        (b"text/html; charset=\"big5\" ", Some(&b"big5"[..])),
        (b"text/html; charset=utf-8; q=1", Some(&b"utf-8"[..])),
        (b"text/html", None),
        (b"text/html; charset=\"open", None),
        (b"text/html; charset=", None),
    ];
    for (content, expected) in cases {
        assert_eq!(extract_charset_from_content(content), expected, "{content:?}");
    }
}

#[test]
fn registry_helpers() {
    let latin1 = Charset::windows_1252();
    assert!(is_preferred_name("ISO-8859-1", latin1));
    assert!(is_preferred_name("windows-1252", latin1));
    assert!(!is_preferred_name("latin1", latin1));
    assert!(is_iana_registered(latin1));
    let mac = Charset::for_label("x-mac-cyrillic").expect("known label");
    assert!(!is_iana_registered(mac));
    assert!(is_obscure("x-mac-cyrillic", mac));
    assert!(!is_obscure("latin1", latin1));
}

#[test]
fn label_resolution() {
    assert_eq!(Charset::for_label(" UTF-8 "), Some(Charset::utf_8()));
    assert_eq!(Charset::for_label("us-ascii"), Some(Charset::windows_1252()));
    assert_eq!(Charset::for_label("utf-32le"), Some(Charset::Utf32Le));
    assert_eq!(Charset::for_label("UTF-32"), Some(Charset::Utf32Be));
    assert_eq!(Charset::for_label("klingon"), None);
    assert!(!Charset::utf_16le().is_ascii_superset());
    assert!(Charset::Utf32Be.is_utf16_or_utf32());
}

#[test]
fn declared_label_wins_and_strips_matching_bom() {
    let (text, issues, confidence, sink) =
        decode_all(b"\xEF\xBB\xBF<meta charset=koi8-r>\xC3\xA9", Some("utf-8"), 64);
    assert_eq!(confidence, Confidence::Declared);
    assert_eq!(text, "<meta charset=koi8-r>\u{e9}");
    assert!(issues.is_empty());
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn unknown_declared_label_falls_back_to_sniffing() {
    let (text, _, confidence, sink) = decode_all(b"<meta charset=utf-8>\xC3\xA9", Some("klingon"), 64);
    assert_eq!(confidence, Confidence::MetaSniffed);
    assert_eq!(text, "<meta charset=utf-8>\u{e9}");
    assert!(sink.mentions("Unsupported character encoding name: \u{201C}klingon\u{201D}. Will sniff."));
}

#[test]
fn bom_beats_meta() {
    let (text, _, confidence, _) = decode_all(b"\xEF\xBB\xBF<meta charset=koi8-r>\xC3\xA9", None, 64);
    assert_eq!(confidence, Confidence::Bom);
    assert_eq!(text, "<meta charset=koi8-r>\u{e9}");
}

#[test]
fn utf16_boms_decode() {
    let (text, _, confidence, _) = decode_all(b"\xFF\xFE<\x00p\x00>\x00", None, 64);
    assert_eq!(confidence, Confidence::Bom);
    assert_eq!(text, "<p>");
    let (text, _, _, _) = decode_all(b"\xFE\xFF\x00<\x00p\x00>", None, 64);
    assert_eq!(text, "<p>");
}

#[test]
fn utf32_decodes_astral_characters() {
    let mut bytes = vec![0xFF, 0xFE, 0x00, 0x00];
    for ch in ['a', '\u{1F600}', 'b'] {
        bytes.extend_from_slice(&(ch as u32).to_le_bytes());
    }
    let (text, issues, confidence, _) = decode_all(&bytes, None, 2);
    assert_eq!(confidence, Confidence::Bom);
    assert_eq!(text, "a\u{1F600}b");
    assert!(issues.is_empty());
}

#[test]
fn utf32_rejects_out_of_range_values() {
    let mut bytes = b"\x00\x00\xFE\xFF".to_vec();
    bytes.extend_from_slice(&0x0011_0000u32.to_be_bytes());
    bytes.extend_from_slice(&u32::from('z').to_be_bytes());
    let (text, issues, _, _) = decode_all(&bytes, None, 8);
    assert_eq!(text, "\u{FFFD}z");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].offset, 0);
    assert_eq!(
        issues[0].message,
        "Malformed byte sequence: \u{201C}00\u{201D}, \u{201C}11\u{201D}, \u{201C}00\u{201D}, \u{201C}00\u{201D}."
    );
}

#[test]
fn meta_sniffed_encoding_decodes() {
    let mut bytes = b"<meta charset=windows-1251>".to_vec();
    bytes.push(0xC0);
    let (text, _, confidence, sink) = decode_all(&bytes, None, 64);
    assert_eq!(confidence, Confidence::MetaSniffed);
    assert!(text.ends_with('\u{0410}'));
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn default_is_windows_1252_with_warning() {
    let (text, _, confidence, sink) = decode_all(b"caf\xE9 \x80", None, 64);
    assert_eq!(confidence, Confidence::Default);
    assert_eq!(text, "caf\u{e9} \u{20AC}");
    let warnings: Vec<_> = sink.warnings().map(|d| d.message.clone()).collect();
    assert_eq!(
        warnings,
        vec![
            "Could not determine the character encoding of the document. Using \u{201C}windows-1252\u{201D}."
        ]
    );
    assert_eq!(sink.diagnostics()[0].severity, Severity::Warning);
}

#[test]
fn malformed_utf8_is_replaced_and_reported() {
    let (text, issues, _, _) = decode_all(b"a\xFFb", Some("utf-8"), 64);
    assert_eq!(text, "a\u{FFFD}b");
    assert_eq!(
        issues,
        vec![SourceIssue {
            offset: 1,
            message: "Malformed byte sequence: \u{201C}ff\u{201D}.".to_string(),
        }]
    );
}

#[test]
fn malformed_output_is_independent_of_buffer_size() {
    let input = b"x\xFFy\xFEz\xC3\xA9\xFF";
    let (whole, whole_issues, _, _) = decode_all(input, Some("utf-8"), 64);
    for size in [2, 3, 5] {
        let (text, issues, _, _) = decode_all(input, Some("utf-8"), size);
        assert_eq!(text, whole, "buffer {size}");
        assert_eq!(issues, whole_issues, "buffer {size}");
    }
    assert_eq!(whole_issues.len(), 3);
    assert_eq!(whole_issues[2].offset, 6);
}

#[test]
fn truncated_sequence_at_end_names_its_bytes() {
    let (text, issues, _, _) = decode_all(b"a\xE2\x82", Some("utf-8"), 64);
    assert_eq!(text, "a\u{FFFD}");
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Malformed byte sequence: \u{201C}e2\u{201D}, \u{201C}82\u{201D}."
    );
}

#[test]
fn malformed_message_format() {
    assert_eq!(malformed_message(&[]), "Malformed byte sequence: \u{201C}\u{201D}.");
    assert_eq!(
        malformed_message(&[0xE9, 0x80]),
        "Malformed byte sequence: \u{201C}e9\u{201D}, \u{201C}80\u{201D}."
    );
}

#[test]
fn meta_boundary_is_reported_after_window() {
    let mut bytes = vec![b'a'; SNIFFING_LIMIT + 10];
    bytes[0] = b'<';
    let mut sink = CollectingSink::new();
    let mut input = stream(&bytes);
    let resolved = resolve_encoding(&mut input, Some("utf-8"), &mut sink, &DocumentIds::default())
        .expect("resolve");
    let mut reader = resolved.into_code_unit_stream(input);
    let mut chunk = vec![0u16; 4096];
    let first = reader.read_units(&mut chunk).expect("decode");
    assert_eq!(first, SNIFFING_LIMIT);
    assert!(reader.meta_boundary_crossed());
    assert_eq!(reader.bytes_consumed(), SNIFFING_LIMIT);
    assert_eq!(reader.charset(), Charset::utf_8());
}

#[test]
fn byte_stream_replays_buffered_prefix_after_rewind() {
    let mut bytes = stream(b"<meta>");
    assert_eq!(bytes.read_byte().unwrap(), Some(b'<'));
    assert_eq!(bytes.read_byte().unwrap(), Some(b'm'));
    assert_eq!(bytes.buffered(), b"<meta>");

    bytes.rewind();
    let mut replayed = Vec::new();
    while let Some(byte) = bytes.read_byte().unwrap() {
        replayed.push(byte);
    }
    assert_eq!(replayed, b"<meta>");
    assert_eq!(bytes.buffered(), b"<meta>");
}
