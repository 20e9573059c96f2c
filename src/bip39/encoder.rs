/*
    Entropy to mnemonic encoding.
*/

use log::debug;

use super::{
    MnemonicErr,
    PhraseLength,
    bits::BitBuf,
    checksum,
    wordlist::Wordlist
};

/// Bits per word index.
pub const BITS_PER_WORD: usize = 11;

/**
    Encodes entropy into a mnemonic phrase.

    The entropy bits are followed by ENT/32 checksum bits and the
    result is split into 11 bit groups, each indexing the wordlist.
    Entropy must be 128, 160, 192, 224 or 256 bits long.
*/
pub fn encode<'w>(entropy: &[u8], wordlist: &'w Wordlist) -> Result<Vec<&'w str>, MnemonicErr> {
    let entropy_bits = entropy.len() * 8;
    let length = PhraseLength::from_entropy_bits(entropy_bits)
        .ok_or(MnemonicErr::InvalidEntropyLength(entropy_bits))?;

    let mut bits = BitBuf::with_capacity(entropy_bits + length.checksum_bits());
    bits.extend(&BitBuf::from_bytes(entropy));
    bits.extend(&checksum::checksum_bits(entropy));

    //ENT + CS is always a multiple of 11 for the permitted lengths and
    //every 11 bit group is below 2048, so a miss means a broken wordlist.
    let phrase: Vec<&str> = bits
        .chunks(BITS_PER_WORD)
        .map(|index| wordlist.word_at(index as u16))
        .collect::<Option<Vec<&str>>>()
        .ok_or_else(|| MnemonicErr::MalformedWordlist("word index out of range".to_string()))?;
    debug_assert_eq!(phrase.len(), length.word_count());

    debug!("encoded {} bits of entropy into {} words", entropy_bits, phrase.len());
    Ok(phrase)
}
