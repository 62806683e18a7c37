use std::fmt;

use log::trace;

/// Growable bit-addressable storage packed MSB-first into bytes.
///
/// `len` counts appended bits; the backing buffer may be larger and is grown
/// on demand by `set`/`clear`. Reads past the buffer are simply `false`.
#[derive(Default, Debug, Clone)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    /// Allocates room for at least `bits` bits up front.
    pub fn with_capacity(bits: usize) -> Self {
        BitVec {
            bits: vec![0; bits.div_ceil(8)],
            bit_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Number of bits the backing buffer can address without growing.
    pub fn capacity_bits(&self) -> usize {
        self.bits.len() * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn set(&mut self, index: usize) {
        self.grow_to(index);
        self.bits[index / 8] |= Self::mask(index);
    }

    pub fn clear(&mut self, index: usize) {
        self.grow_to(index);
        self.bits[index / 8] &= !Self::mask(index);
    }

    pub fn test(&self, index: usize) -> bool {
        match self.bits.get(index / 8) {
            Some(byte) => byte & Self::mask(index) != 0,
            None => false,
        }
    }

    pub fn append(&mut self, bit: bool) {
        let pos = self.bit_count;
        if bit {
            self.set(pos);
        } else {
            self.clear(pos);
        }
        self.bit_count += 1;
    }

    /// Appends every logical bit of `other` after the current tail.
    pub fn extend_from(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.append(bit);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.test(i))
    }

    fn mask(index: usize) -> u8 {
        // which bit position is target? MSB first
        0x80 >> (index % 8)
    }

    fn grow_to(&mut self, index: usize) {
        if index < self.capacity_bits() {
            return;
        }
        // doubling keeps repeated appends amortised O(1)
        let new_len = (index / 8 + 1) * 2;
        trace!("bit_vec grow {} -> {} bytes", self.bits.len(), new_len);
        self.bits.resize(new_len, 0);
    }
}

impl PartialEq for BitVec {
    fn eq(&self, other: &Self) -> bool {
        self.bit_count == other.bit_count && self.iter().eq(other.iter())
    }
}

impl Eq for BitVec {}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<(usize, Vec<u8>)> for BitVec {
    fn from((bit_count, bits): (usize, Vec<u8>)) -> Self {
        let bit_count = bit_count.min(bits.len() * 8);
        BitVec { bits, bit_count }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_vec = BitVec::new();
        for bit in iter {
            bit_vec.append(bit);
        }
        bit_vec
    }
}
