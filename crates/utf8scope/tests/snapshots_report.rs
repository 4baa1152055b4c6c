#![expect(missing_docs)]

use utf8scope::{Analysis, AnalysisOptions, CodecOptions};

fn render(bytes: &[u8], options: &AnalysisOptions) -> String {
    Analysis::run(bytes, options).to_string()
}

#[test]
fn snapshot_ascii_report() {
    insta::assert_snapshot!(render(b"Hello", &AnalysisOptions::default()), @r#"
    Valid ASCII: true
    Uppercased ASCII: "HELLO"
    Length in bytes: 5
    Number of code points: 5
    Bytes per code point: 1 1 1 1 1
    Substring of the first 6 code points: "Hello"
    Code points as decimal numbers: 72 101 108 108 111
    Watched code points: none
    Next character of code point at index 3: m
    "#);
}

#[test]
fn snapshot_mixed_width_report() {
    insta::assert_snapshot!(render("中A🐩é".as_bytes(), &AnalysisOptions::default()), @r#"
    Valid ASCII: false
    Uppercased ASCII: "中A🐩é"
    Length in bytes: 10
    Number of code points: 4
    Bytes per code point: 3 1 4 2
    Substring of the first 6 code points: "中A🐩é"
    Code points as decimal numbers: 20013 65 128041 233
    Watched code points: 🐩
    Next character of code point at index 3: ê
    "#);
}

#[test]
fn snapshot_malformed_report() {
    insta::assert_snapshot!(render(&[b'a', 0x80, b'b'], &AnalysisOptions::default()), @r#"
    Valid ASCII: false
    Uppercased ASCII: "A�B"
    Length in bytes: 3
    Number of code points: malformed
    Bytes per code point:
    Substring of the first 6 code points: ""
    Code points as decimal numbers:
    Watched code points: none
    Next character of code point at index 3: none
    "#);
}

#[test]
fn snapshot_custom_options_report() {
    let options = AnalysisOptions {
        codec: CodecOptions::strict(),
        prefix_len: 2,
        next_char_index: 0,
        watch_list: [u32::from('€')].into_iter().collect(),
    };
    insta::assert_snapshot!(render("a€bc".as_bytes(), &options), @r#"
    Valid ASCII: false
    Uppercased ASCII: "A€BC"
    Length in bytes: 6
    Number of code points: 4
    Bytes per code point: 1 3 1 1
    Substring of the first 2 code points: "a€"
    Code points as decimal numbers: 97 8364 98 99
    Watched code points: €
    Next character of code point at index 0: b
    "#);
}

#[test]
fn strict_report_rejects_garbage_that_lenient_decodes() {
    let bytes = [0xE4, b'A', b'B'];
    let lenient = Analysis::run(&bytes, &AnalysisOptions::default());
    assert_eq!(lenient.codepoint_count, Some(1));
    assert_eq!(lenient.scalars, [0x4042]);

    let strict = Analysis::run(
        &bytes,
        &AnalysisOptions {
            codec: CodecOptions::strict(),
            ..Default::default()
        },
    );
    assert_eq!(strict.codepoint_count, None);
    assert!(strict.scalars.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_byte_strings_as_text() {
    let analysis = Analysis::run("ok🐈".as_bytes(), &AnalysisOptions::default());
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "is_ascii": false,
            "uppercased": "OK🐈",
            "uppercased_count": 2,
            "byte_len": 6,
            "codepoint_count": 3,
            "widths": [1, 1, 4],
            "prefix_len": 6,
            "prefix": "ok🐈",
            "scalars": [111, 107, 128008],
            "watch_hit": 128008,
            "next_char_index": 3,
            "next_char": null,
        })
    );
}
