#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8scope::{Analysis, AnalysisOptions, Codec, CodecError, encode};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    bytes: &'a [u8],
    index: u8,
    end: u8,
    scalar: u32,
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        bytes,
        index,
        end,
        scalar,
    } = input;
    let (index, end) = (usize::from(index), usize::from(end));

    // Strict mode agrees with the standard library.
    let strict = Codec::strict();
    match core::str::from_utf8(bytes) {
        Ok(text) => {
            assert_eq!(strict.codepoint_count(bytes), Ok(text.chars().count()));
            if let Some(ch) = text.chars().nth(index) {
                assert_eq!(strict.decode_at(bytes, index), Ok(u32::from(ch)));
            }
        }
        Err(_) => assert!(matches!(
            strict.codepoint_count(bytes),
            Err(CodecError::MalformedEncoding { .. })
        )),
    }

    // Lenient mode never panics, whatever the input.
    let lenient = Codec::default();
    let _ = lenient.decode_at(bytes, index);
    let _ = lenient.next_char(bytes, index);
    let _ = lenient.substring(bytes, index, end);
    let _ = Analysis::run(bytes, &AnalysisOptions::default());

    // Encoding round-trips through the lenient decoder.
    if let Ok(encoded) = encode(scalar) {
        assert_eq!(lenient.decode_at(&encoded, 0), Ok(scalar));
    }
});
