use core::fmt;

/// Number of bytes in one UTF-8 encoding unit, as announced by its start byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "u8"))]
#[repr(u8)]
pub enum Width {
    /// `0xxxxxxx`
    One = 1,
    /// `110xxxxx`
    Two = 2,
    /// `1110xxxx`
    Three = 3,
    /// `11110xxx`
    Four = 4,
}

impl Width {
    /// Classifies a start byte by its high-order bits.
    ///
    /// Only the byte itself is inspected; nothing is said about whether the
    /// bytes after it are continuation bytes.
    ///
    /// ```rust
    /// use utf8scope::Width;
    ///
    /// assert_eq!(Width::from_start_byte(b'A'), Some(Width::One));
    /// assert_eq!(Width::from_start_byte(0xE4), Some(Width::Three));
    /// assert_eq!(Width::from_start_byte(0x80), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_start_byte(byte: u8) -> Option<Width> {
        if byte <= 0x7F {
            Some(Width::One)
        } else if byte & 0xE0 == 0xC0 {
            Some(Width::Two)
        } else if byte & 0xF0 == 0xE0 {
            Some(Width::Three)
        } else if byte & 0xF8 == 0xF0 {
            Some(Width::Four)
        } else {
            None
        }
    }

    /// Width of the shortest encoding of `scalar`, or `None` past U+10FFFF.
    #[must_use]
    pub const fn for_scalar(scalar: u32) -> Option<Width> {
        match scalar {
            0..=0x7F => Some(Width::One),
            0x80..=0x7FF => Some(Width::Two),
            0x800..=0xFFFF => Some(Width::Three),
            0x1_0000..=0x10_FFFF => Some(Width::Four),
            _ => None,
        }
    }

    /// The width as a byte count.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self as usize
    }

    /// Mask selecting the payload bits of a start byte of this width.
    #[inline]
    pub(crate) const fn payload_mask(self) -> u8 {
        match self {
            Width::One => 0x7F,
            Width::Two => 0x1F,
            Width::Three => 0x0F,
            Width::Four => 0x07,
        }
    }

    /// Bits OR'd into a start byte of this width.
    #[inline]
    pub(crate) const fn tag(self) -> u8 {
        match self {
            Width::One => 0x00,
            Width::Two => 0xC0,
            Width::Three => 0xE0,
            Width::Four => 0xF0,
        }
    }

    /// Smallest scalar that needs this many bytes.
    #[inline]
    pub(crate) const fn min_scalar(self) -> u32 {
        match self {
            Width::One => 0,
            Width::Two => 0x80,
            Width::Three => 0x800,
            Width::Four => 0x1_0000,
        }
    }
}

impl From<Width> for u8 {
    fn from(width: Width) -> u8 {
        width as u8
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.len().fmt(f)
    }
}

/// Free-function form of [`Width::from_start_byte`].
#[inline]
#[must_use]
pub const fn width_from_start_byte(byte: u8) -> Option<Width> {
    Width::from_start_byte(byte)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, Some(Width::One))]
    #[case(b'z', Some(Width::One))]
    #[case(0x7F, Some(Width::One))]
    #[case(0x80, None)]
    #[case(0xBF, None)]
    #[case(0xC0, Some(Width::Two))]
    #[case(0xDF, Some(Width::Two))]
    #[case(0xE0, Some(Width::Three))]
    #[case(0xEF, Some(Width::Three))]
    #[case(0xF0, Some(Width::Four))]
    #[case(0xF7, Some(Width::Four))]
    #[case(0xF8, None)]
    #[case(0xFF, None)]
    fn classifies_by_high_bits(#[case] byte: u8, #[case] expected: Option<Width>) {
        assert_eq!(width_from_start_byte(byte), expected);
    }

    #[test]
    fn agrees_with_char_len_for_shortest_forms() {
        for ch in ['\0', 'a', '\u{7F}', 'é', '\u{7FF}', '中', '\u{FFFF}', '🐩'] {
            let mut buf = [0u8; 4];
            let encoded = ch.encode_utf8(&mut buf);
            let width = Width::from_start_byte(encoded.as_bytes()[0]).unwrap();
            assert_eq!(width.len(), ch.len_utf8());
            assert_eq!(Width::for_scalar(ch as u32), Some(width));
        }
        assert_eq!(Width::for_scalar(0x11_0000), None);
    }
}
