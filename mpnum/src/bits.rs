//! Bit-indexed view over an integer's two's-complement pattern.

use std::iter::FusedIterator;
use std::ops::Range;

use rug::Integer;

/// Random-access sequence of bits, index 0 least significant.
///
/// Yielded by [`SignedBig::bits`](crate::SignedBig::bits) and
/// [`UnsignedBig::bits`](crate::UnsignedBig::bits). Its length is the
/// value's `bit_width`.
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    value: &'a Integer,
    range: Range<u32>,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(value: &'a Integer, width: u32) -> Self {
        Self {
            value,
            range: 0..width,
        }
    }

    /// Bit at `index` relative to the remaining range, or `None` past the end.
    pub fn get(&self, index: u32) -> Option<bool> {
        let at = self.range.start.checked_add(index)?;
        (at < self.range.end).then(|| self.value.get_bit(at))
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.range.next().map(|i| self.value.get_bit(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.range.nth(n).map(|i| self.value.get_bit(i))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    fn next_back(&mut self) -> Option<bool> {
        self.range.next_back().map(|i| self.value.get_bit(i))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}
