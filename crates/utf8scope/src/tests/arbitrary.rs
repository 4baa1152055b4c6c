use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Any value in `0..=0x10FFFF`, surrogates included.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Scalar(pub u32);

impl Arbitrary for Scalar {
    fn arbitrary(g: &mut Gen) -> Self {
        // Spread evenly over the four widths so short forms aren't drowned out.
        let value = match u8::arbitrary(g) % 4 {
            0 => u32::arbitrary(g) % 0x80,
            1 => 0x80 + u32::arbitrary(g) % (0x800 - 0x80),
            2 => 0x800 + u32::arbitrary(g) % (0x1_0000 - 0x800),
            _ => 0x1_0000 + u32::arbitrary(g) % (0x11_0000 - 0x1_0000),
        };
        Scalar(value)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Scalar))
    }
}

/// A byte buffer biased towards bytes that matter to UTF-8: ASCII, tags of
/// every width, continuation bytes, and the invalid `0xF8..` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bytes(pub Vec<u8>);

impl Arbitrary for Bytes {
    fn arbitrary(g: &mut Gen) -> Self {
        const INTERESTING: &[u8] = &[
            0x00, b'a', 0x7F, 0x80, 0xBF, 0xC0, 0xC1, 0xC2, 0xDF, 0xE0, 0xED, 0xEF, 0xF0, 0xF4,
            0xF5, 0xF7, 0xF8, 0xFF,
        ];
        let len = usize::arbitrary(g) % 24;
        let bytes = (0..len)
            .map(|_| {
                if bool::arbitrary(g) {
                    *g.choose(INTERESTING).unwrap_or(&0)
                } else {
                    u8::arbitrary(g)
                }
            })
            .collect();
        Bytes(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Bytes))
    }
}

/// Text made of characters of mixed widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Text(pub String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 16;
        let text = (0..len)
            .filter_map(|_| char::from_u32(Scalar::arbitrary(g).0))
            .collect();
        Text(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Text))
    }
}
