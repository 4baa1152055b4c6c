use alloc::collections::BTreeSet;

/// How much of each sequence the codec checks before trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Only start bytes are classified; continuation bytes are masked and
    /// accumulated without checking their `10xxxxxx` tag.
    ///
    /// Garbage in, garbage out: a malformed continuation byte yields a wrong
    /// scalar rather than an error. Overlong forms, surrogates and values up
    /// to 0x1F_FFFF decode without complaint.
    #[default]
    Lenient,
    /// Every sequence is fully validated while walking the buffer.
    ///
    /// Accepts exactly the byte strings that [`core::str::from_utf8`]
    /// accepts.
    Strict,
}

/// Configuration for a [`Codec`](crate::Codec).
///
/// # Default
///
/// [`Validation::Lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Validation mode used by every walk.
    pub validation: Validation,
}

impl CodecOptions {
    /// Options with [`Validation::Strict`].
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }
}

/// Codepoint inspected by the successor-character step of a report.
pub const DEFAULT_NEXT_CHAR_INDEX: usize = 3;

/// Number of leading codepoints copied into a report's prefix.
pub const DEFAULT_PREFIX_LEN: usize = 6;

/// Scalars flagged by a report unless configured otherwise: U+1F429 (poodle)
/// and U+1F408 (cat).
pub const DEFAULT_WATCH_LIST: [u32; 2] = [0x1_F429, 0x1_F408];

/// Configuration for [`Analysis::run`](crate::Analysis::run).
///
/// # Examples
///
/// ```rust
/// use utf8scope::{AnalysisOptions, CodecOptions};
///
/// let options = AnalysisOptions {
///     codec: CodecOptions::strict(),
///     watch_list: [u32::from('€')].into_iter().collect(),
///     ..Default::default()
/// };
/// assert_eq!(options.prefix_len, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Codec configuration used for every step.
    pub codec: CodecOptions,

    /// How many leading codepoints go into the prefix substring.
    ///
    /// # Default
    ///
    /// `6`
    pub prefix_len: usize,

    /// Codepoint index whose successor character is reported.
    ///
    /// # Default
    ///
    /// `3`
    pub next_char_index: usize,

    /// Scalars to look for anywhere in the buffer.
    ///
    /// # Default
    ///
    /// U+1F429 and U+1F408.
    pub watch_list: BTreeSet<u32>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            codec: CodecOptions::default(),
            prefix_len: DEFAULT_PREFIX_LEN,
            next_char_index: DEFAULT_NEXT_CHAR_INDEX,
            watch_list: DEFAULT_WATCH_LIST.into_iter().collect(),
        }
    }
}
