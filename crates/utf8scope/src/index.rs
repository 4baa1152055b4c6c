use core::{iter::FusedIterator, ops::Range};

use crate::{
    Codec, CodecError, Malformation, Validation, Width, codec::decode_sequence,
};

/// Position and width of one codepoint inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the start byte.
    pub offset: usize,
    /// Width announced by the start byte.
    pub width: Width,
}

impl Span {
    /// Byte range covered by the codepoint.
    ///
    /// In lenient mode the last span of a truncated buffer may extend past
    /// the end of the buffer.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width.len()
    }
}

/// Iterator over the codepoints of a buffer, in order.
///
/// Yields one [`Span`] per start byte. The first error ends the iteration:
/// after an `Err` the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    offset: usize,
    validation: Validation,
    failed: bool,
}

impl<'a> Codepoints<'a> {
    fn new(bytes: &'a [u8], validation: Validation) -> Self {
        Self {
            bytes,
            offset: 0,
            validation,
            failed: false,
        }
    }

    /// Byte offset of the next start byte to be classified.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, err: CodecError) -> Option<Result<Span, CodecError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<Span, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }

        let offset = self.offset;
        let byte = self.bytes[offset];
        let Some(width) = Width::from_start_byte(byte) else {
            return self.fail(CodecError::malformed(
                offset,
                Malformation::InvalidStartByte(byte),
            ));
        };

        if self.validation == Validation::Strict {
            if let Err(err) = decode_sequence(self.bytes, offset, width, Validation::Strict) {
                return self.fail(err);
            }
        }

        self.offset += width.len();
        Some(Ok(Span { offset, width }))
    }
}

impl FusedIterator for Codepoints<'_> {}

impl Codec {
    /// Walks `bytes` codepoint by codepoint.
    ///
    /// ```rust
    /// use utf8scope::{Codec, Width};
    ///
    /// let widths: Vec<Width> = Codec::default()
    ///     .codepoints("aé中".as_bytes())
    ///     .map(|span| span.unwrap().width)
    ///     .collect();
    /// assert_eq!(widths, [Width::One, Width::Two, Width::Three]);
    /// ```
    #[must_use]
    pub fn codepoints<'a>(&self, bytes: &'a [u8]) -> Codepoints<'a> {
        Codepoints::new(bytes, self.validation())
    }

    /// Counts the codepoints in `bytes`.
    ///
    /// # Errors
    ///
    /// [`CodecError::MalformedEncoding`] if any start byte is invalid (or, in
    /// strict mode, any sequence is malformed). No partial count is returned.
    pub fn codepoint_count(&self, bytes: &[u8]) -> Result<usize, CodecError> {
        let mut count = 0;
        for span in self.codepoints(bytes) {
            span?;
            count += 1;
        }
        Ok(count)
    }

    /// Span of the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// [`CodecError::IndexOutOfRange`] if the walk ends before `index`;
    /// [`CodecError::MalformedEncoding`] if it fails on the way there.
    pub fn span_at(&self, bytes: &[u8], index: usize) -> Result<Span, CodecError> {
        for (current, span) in self.codepoints(bytes).enumerate() {
            let span = span?;
            if current == index {
                return Ok(span);
            }
        }
        Err(CodecError::IndexOutOfRange { index })
    }

    /// Byte offset of the start byte of the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Codec::span_at`].
    pub fn byte_offset_of(&self, bytes: &[u8], index: usize) -> Result<usize, CodecError> {
        self.span_at(bytes, index).map(|span| span.offset)
    }

    /// Encoding width of the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Codec::span_at`].
    pub fn width_at(&self, bytes: &[u8], index: usize) -> Result<Width, CodecError> {
        self.span_at(bytes, index).map(|span| span.width)
    }
}
