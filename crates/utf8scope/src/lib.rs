//! Codepoint-level access to raw UTF-8 byte buffers.
//!
//! The crate walks a byte buffer one encoding unit at a time, classifying
//! each start byte by its high bits. On top of that walk it maps codepoint
//! indices to byte offsets, decodes and re-encodes scalar values, and runs
//! a handful of analyses (ASCII checks, substrings by codepoint range,
//! watch-list lookups, successor characters).
//!
//! By default the codec is lenient: it trusts the bytes that follow a valid
//! start byte, so malformed continuation bytes produce a wrong scalar rather
//! than an error. [`Validation::Strict`] rejects anything
//! [`core::str::from_utf8`] would reject.
//!
//! ```rust
//! use utf8scope::Codec;
//!
//! let codec = Codec::default();
//! let text = "中A".as_bytes();
//! assert_eq!(codec.codepoint_count(text), Ok(2));
//! assert_eq!(codec.decode_at(text, 0), Ok(0x4E2D));
//! assert_eq!(codec.byte_offset_of(text, 1), Ok(3));
//! assert_eq!(codec.next_char(text, 1).unwrap().as_bytes(), b"B");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod analysis;
mod codec;
mod error;
mod index;
mod options;
mod report;
mod width;

#[cfg(test)]
mod tests;

pub use analysis::{is_ascii, to_uppercase_ascii, uppercase_ascii};
pub use codec::{Codec, Encoded, encode};
pub use error::{CodecError, Malformation};
pub use index::{Codepoints, Span};
pub use options::{
    AnalysisOptions, CodecOptions, DEFAULT_NEXT_CHAR_INDEX, DEFAULT_PREFIX_LEN, DEFAULT_WATCH_LIST,
    Validation,
};
pub use report::Analysis;
pub use width::{Width, width_from_start_byte};

/// Largest Unicode scalar value accepted by [`encode`].
pub const MAX_SCALAR: u32 = 0x10_FFFF;
