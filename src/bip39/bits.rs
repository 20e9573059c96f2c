/*
    Growable bit buffer used to carry entropy and checksum
    bits while they are regrouped between 8 bit bytes and
    11 bit word indexes.

    Bits are stored most significant bit first, packed into bytes.
    Unused bits of the last byte are always zero.
*/

use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, PartialEq, Eq, Default, Zeroize, ZeroizeOnDrop)]
pub struct BitBuf {
    bytes: Vec<u8>,
    len: usize
}

impl BitBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Creates an empty buffer with room for `bits` bits.
    */
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0
        }
    }

    /**
        Creates a buffer holding every bit of the given bytes, MSB first.
    */
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /**
        Appends the lowest `width` bits of `value`, most significant first.
        Width is at most 32.
    */
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for shift in (0..width).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /**
        Appends every bit held in `other`.
    */
    pub fn extend(&mut self, other: &BitBuf) {
        for i in 0..other.len {
            self.push_bit(other.bit(i));
        }
    }

    /**
        Returns the bit at `index`. Panics if the index is out of range,
        like slice indexing.
    */
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range for {} bits", index, self.len);
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /**
        Reads `width` bits starting at `start` as an unsigned integer.
    */
    pub fn read(&self, start: usize, width: usize) -> u32 {
        debug_assert!(width <= 32);
        (start..start + width).fold(0u32, |acc, i| (acc << 1) | self.bit(i) as u32)
    }

    /**
        Copies the bits in `start..end` into a new buffer.
    */
    pub fn slice(&self, start: usize, end: usize) -> BitBuf {
        let mut out = BitBuf::with_capacity(end.saturating_sub(start));
        for i in start..end {
            out.push_bit(self.bit(i));
        }
        out
    }

    /**
        Iterates over consecutive `width` bit groups, left to right.
        A trailing group shorter than `width` is not yielded.
    */
    pub fn chunks(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        (0..self.len / width).map(move |i| self.read(i * width, width))
    }

    /**
        The packed bytes. When the length is not a multiple of 8 the
        final byte is zero padded on the right.
    */
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for BitBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitBuf({} bits)", self.len)
    }
}
