use std::fmt;

use crate::bit_vec::BitVec;

/// One symbol's root-to-leaf path. `false` is a left turn, `true` a right turn.
///
/// Only ever grows at the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixCode {
    code: BitVec,
}

impl PrefixCode {
    pub fn new() -> Self {
        PrefixCode {
            code: BitVec::new(),
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        PrefixCode {
            code: BitVec::with_capacity(bits),
        }
    }

    pub fn append(&mut self, bit: bool) {
        self.code.append(bit);
    }

    /// Returns a copy of this code extended by one bit.
    pub fn child(&self, bit: bool) -> Self {
        let mut next = self.clone();
        next.append(bit);
        next
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Bit at `pos`, or `None` past the end of the code.
    pub fn bit(&self, pos: usize) -> Option<bool> {
        (pos < self.len()).then(|| self.code.test(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.code.iter()
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &PrefixCode) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    pub fn bits(&self) -> &BitVec {
        &self.code
    }
}

impl fmt::Display for PrefixCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code.fmt(f)
    }
}
