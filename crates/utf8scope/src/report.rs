//! A fixed sequence of analyses over one buffer, collected into a single
//! displayable value.

use alloc::vec::Vec;
use core::fmt;

use bstr::BString;

use crate::{AnalysisOptions, Codec, Encoded, Width, is_ascii, to_uppercase_ascii};

/// Everything the codec can tell about one buffer.
///
/// Per-codepoint steps are best effort: an index that fails to resolve or
/// decode is skipped, and if the buffer cannot be counted at all the
/// per-codepoint lists stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    /// Whether every byte is ASCII.
    pub is_ascii: bool,
    /// The buffer with `a`-`z` uppercased.
    #[cfg_attr(feature = "serde", serde(serialize_with = "lossy"))]
    pub uppercased: BString,
    /// Number of bytes changed by uppercasing.
    pub uppercased_count: usize,
    /// Buffer length in bytes.
    pub byte_len: usize,
    /// Number of codepoints, or `None` if the walk failed.
    pub codepoint_count: Option<usize>,
    /// Width of each codepoint.
    pub widths: Vec<Width>,
    /// Requested length of `prefix`, in codepoints.
    pub prefix_len: usize,
    /// The first `prefix_len` codepoints (fewer if the buffer is shorter).
    #[cfg_attr(feature = "serde", serde(serialize_with = "lossy"))]
    pub prefix: BString,
    /// Scalar value of each codepoint.
    pub scalars: Vec<u32>,
    /// First codepoint found in the watch list.
    pub watch_hit: Option<u32>,
    /// Index whose successor was computed.
    pub next_char_index: usize,
    /// Successor of the codepoint at `next_char_index`.
    pub next_char: Option<Encoded>,
}

impl Analysis {
    /// Runs every analysis over `bytes`.
    ///
    /// ```rust
    /// use utf8scope::{Analysis, AnalysisOptions};
    ///
    /// let analysis = Analysis::run(b"Hello", &AnalysisOptions::default());
    /// assert_eq!(analysis.codepoint_count, Some(5));
    /// assert_eq!(analysis.scalars, [72, 101, 108, 108, 111]);
    /// assert_eq!(analysis.next_char.unwrap().as_bytes(), b"m");
    /// ```
    #[must_use]
    pub fn run(bytes: &[u8], options: &AnalysisOptions) -> Analysis {
        let codec = Codec::new(options.codec);
        let (uppercased, uppercased_count) = to_uppercase_ascii(bytes);

        let codepoint_count = codec.codepoint_count(bytes).ok();
        let count = codepoint_count.unwrap_or(0);

        let widths = (0..count)
            .filter_map(|index| codec.width_at(bytes, index).ok())
            .collect();

        let prefix = codec
            .substring(bytes, 0, options.prefix_len.min(count))
            .map(BString::from)
            .unwrap_or_default();

        let scalars = (0..count)
            .filter_map(|index| codec.decode_at(bytes, index).ok())
            .collect();

        let watch_hit = (0..count)
            .find(|&index| {
                codec
                    .has_codepoint(bytes, index, &options.watch_list)
                    .unwrap_or(false)
            })
            .and_then(|index| codec.decode_at(bytes, index).ok());

        let next_char = codec.next_char(bytes, options.next_char_index).ok();

        Analysis {
            is_ascii: is_ascii(bytes),
            uppercased,
            uppercased_count,
            byte_len: bytes.len(),
            codepoint_count,
            widths,
            prefix_len: options.prefix_len,
            prefix,
            scalars,
            watch_hit,
            next_char_index: options.next_char_index,
            next_char,
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Valid ASCII: {}", self.is_ascii)?;
        writeln!(f, "Uppercased ASCII: \"{}\"", self.uppercased)?;
        writeln!(f, "Length in bytes: {}", self.byte_len)?;
        match self.codepoint_count {
            Some(count) => writeln!(f, "Number of code points: {count}")?,
            None => writeln!(f, "Number of code points: malformed")?,
        }

        f.write_str("Bytes per code point:")?;
        for width in &self.widths {
            write!(f, " {width}")?;
        }
        f.write_str("\n")?;

        writeln!(
            f,
            "Substring of the first {} code points: \"{}\"",
            self.prefix_len, self.prefix
        )?;

        f.write_str("Code points as decimal numbers:")?;
        for scalar in &self.scalars {
            write!(f, " {scalar}")?;
        }
        f.write_str("\n")?;

        f.write_str("Watched code points: ")?;
        match self.watch_hit.map(|scalar| (scalar, char::from_u32(scalar))) {
            Some((_, Some(ch))) => writeln!(f, "{ch}")?,
            Some((scalar, None)) => writeln!(f, "U+{scalar:04X}")?,
            None => writeln!(f, "none")?,
        }

        write!(
            f,
            "Next character of code point at index {}: ",
            self.next_char_index
        )?;
        match &self.next_char {
            Some(next) => writeln!(f, "{next}"),
            None => writeln!(f, "none"),
        }
    }
}

#[cfg(feature = "serde")]
fn lossy<S: serde::Serializer>(bytes: &BString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(bytes)
}
