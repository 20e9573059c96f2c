use std::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::{
    self,
    Entropy
};
use super::{
    MnemonicErr,
    decoder,
    encoder,
    wordlist::Wordlist
};

/**
    A checked mnemonic phrase together with the entropy it encodes.
*/
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: Vec<String>,  //The mnemonic phrase, one entry per word
    entropy: Entropy      //The entropy the phrase encodes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseLength {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour
}

impl PhraseLength {
    pub const ALL: [PhraseLength; 5] = [
        PhraseLength::Twelve,
        PhraseLength::Fifteen,
        PhraseLength::Eighteen,
        PhraseLength::TwentyOne,
        PhraseLength::TwentyFour
    ];

    pub fn word_count(&self) -> usize {
        match self {
            PhraseLength::Twelve => 12,
            PhraseLength::Fifteen => 15,
            PhraseLength::Eighteen => 18,
            PhraseLength::TwentyOne => 21,
            PhraseLength::TwentyFour => 24
        }
    }

    pub fn entropy_bytes(&self) -> usize {
        match self {
            PhraseLength::Twelve => 16,      //128 bits
            PhraseLength::Fifteen => 20,     //160 bits
            PhraseLength::Eighteen => 24,    //192 bits
            PhraseLength::TwentyOne => 28,   //224 bits
            PhraseLength::TwentyFour => 32   //256 bits
        }
    }

    pub fn entropy_bits(&self) -> usize {
        self.entropy_bytes() * 8
    }

    /// ENT / 32
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn from_word_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.word_count() == count)
    }

    pub fn from_entropy_bits(bits: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.entropy_bits() == bits)
    }
}

impl Mnemonic {
    /**
        Creates a new mnemonic from fresh OS entropy.
    */
    pub fn new(length: PhraseLength, wordlist: &Wordlist) -> Result<Self, MnemonicErr> {
        let entropy = entropy::random_entropy(length)?;
        debug!("generated {} bits of entropy for a {} word phrase", entropy.bit_len(), length.word_count());
        Self::from_entropy(entropy, wordlist)
    }

    /**
        Creates a mnemonic encoding the given entropy.
        Fails with InvalidEntropyLength unless it is 16, 20, 24, 28 or 32 bytes.
    */
    pub fn from_entropy<E>(entropy: E, wordlist: &Wordlist) -> Result<Self, MnemonicErr>
    where E: Into<Entropy>
    {
        let entropy: Entropy = entropy.into();
        let phrase = encoder::encode(entropy.as_bytes(), wordlist)?
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(Self { phrase, entropy })
    }

    /**
        Parses a phrase of whitespace separated words, checking every
        word against the wordlist and verifying the checksum.
    */
    pub fn from_phrase(phrase: &str, wordlist: &Wordlist) -> Result<Self, MnemonicErr> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let entropy = decoder::decode(&words, wordlist)?;

        Ok(Self {
            phrase: words.into_iter().map(str::to_string).collect(),
            entropy
        })
    }

    pub fn phrase(&self) -> &[String] {
        &self.phrase
    }

    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    pub fn word_count(&self) -> usize {
        self.phrase.len()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase.join(" "))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
         .field("words", &self.phrase.len())
         .field("entropy", &self.entropy)
         .finish()
    }
}
