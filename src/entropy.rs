/*
    Entropy handling.

    Holds the raw secret material a mnemonic encodes and
    provides the OS backed random source used to create it.
*/

use std::fmt;

use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    OsRng,
    bip39::{
        MnemonicErr,
        PhraseLength
    }
};

/**
    Raw entropy bytes.

    The bytes are wiped when the value is dropped and are never
    printed by the Debug impl. Any byte length can be held here,
    the encoder is what enforces the 128..=256 bit length classes.
*/
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /**
        Parses entropy from a hex string such as "00ff7f..".
    */
    pub fn from_hex(hex_str: &str) -> Result<Self, MnemonicErr> {
        Ok(Self(hex::decode(hex_str.trim())?))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bits (ENT).
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /**
        Returns the phrase length this entropy encodes to, or None if the
        entropy is not one of the permitted sizes.
    */
    pub fn phrase_length(&self) -> Option<PhraseLength> {
        PhraseLength::from_entropy_bits(self.bit_len())
    }
}

impl From<Vec<u8>> for Entropy {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Entropy {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy({} bits)", self.bit_len())
    }
}

/**
    Generates fresh entropy sized for the given phrase length using OsRng
*/
pub fn random_entropy(length: PhraseLength) -> Result<Entropy, MnemonicErr> {
    random_bytes(length.entropy_bytes()).map(Entropy)
}

/**
    Generates random bytes using OsRng
*/
pub fn random_bytes(size: usize) -> Result<Vec<u8>, MnemonicErr> {
    let mut bytes: Vec<u8> = vec![0; size];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| MnemonicErr::EntropySource(e.to_string()))?;
    Ok(bytes)
}
