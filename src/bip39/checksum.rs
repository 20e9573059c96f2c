/*
    Mnemonic checksum.

    The checksum of ENT bits of entropy is the first ENT/32 bits
    of the SHA-256 digest of the entropy bytes.
*/

use crate::hash;
use super::bits::BitBuf;

/// Bits in a SHA-256 digest; the longest checksum that can be taken.
const DIGEST_BITS: usize = 256;

/**
    Number of checksum bits carried for `entropy_bits` bits of entropy.
*/
pub fn checksum_len(entropy_bits: usize) -> usize {
    (entropy_bits / 32).min(DIGEST_BITS)
}

/**
    Computes the checksum bits for the given entropy bytes.

    Always recomputed from the entropy, nothing is cached between calls.
*/
pub fn checksum_bits(entropy: &[u8]) -> BitBuf {
    let digest = hash::sha256(entropy);
    BitBuf::from_bytes(&digest).slice(0, checksum_len(entropy.len() * 8))
}
