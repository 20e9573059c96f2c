/*
    Mnemonic to entropy decoding.
*/

use log::{debug, trace};

use crate::entropy::Entropy;
use super::{
    MnemonicErr,
    bits::BitBuf,
    checksum,
    encoder::BITS_PER_WORD,
    wordlist::Wordlist
};

/**
    Decodes a mnemonic phrase back into its entropy.

    Every word is looked up in the wordlist and its 11 bit index appended
    to a bit buffer. The first (bits / 33) * 32 bits are the entropy and
    the rest is the checksum, which must match the checksum recomputed
    from that entropy.

    Word counts are not checked on their own. A phrase of a non standard
    length goes through the same split and is accepted or rejected by the
    checksum comparison alone. That includes the empty phrase: zero bits
    split into zero entropy bits and a zero bit checksum, which match.
*/
pub fn decode<S>(phrase: &[S], wordlist: &Wordlist) -> Result<Entropy, MnemonicErr>
where S: AsRef<str>
{
    let mut bits = BitBuf::with_capacity(phrase.len() * BITS_PER_WORD);
    for word in phrase {
        let word = word.as_ref();
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| MnemonicErr::UnknownWord(word.to_string()))?;
        bits.push_bits(index as u32, BITS_PER_WORD);
    }

    let divider = bits.len() / 33 * 32;
    trace!("{} phrase bits split at {}", bits.len(), divider);

    //divider is a multiple of 32 so the entropy bits fill whole bytes
    let entropy = Entropy::from(bits.slice(0, divider).as_bytes());
    let expected = checksum::checksum_bits(entropy.as_bytes());
    if bits.slice(divider, bits.len()) != expected {
        debug!("checksum mismatch for {} word phrase", phrase.len());
        return Err(MnemonicErr::InvalidChecksum);
    }

    debug!("decoded {} words into {} bits of entropy", phrase.len(), entropy.bit_len());
    Ok(entropy)
}
