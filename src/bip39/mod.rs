/*
    This module implements the BIP-0039 standard
    for mnemonic phrases.

    Entropy is encoded into words by appending a SHA-256 derived
    checksum and splitting the bits into 11 bit wordlist indexes.
    Decoding reverses this and rejects phrases whose checksum
    does not match.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki
*/

pub mod bits;
pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod lang;
pub mod mnemonic;
pub mod validator;
pub mod wordlist;

pub use mnemonic::Mnemonic as Mnemonic;
pub use mnemonic::PhraseLength as PhraseLength;
pub use lang::Language as Language;
pub use wordlist::Wordlist as Wordlist;
pub use encoder::encode;
pub use decoder::decode;
pub use validator::validate;

/**
    Errors produced while encoding, decoding or loading wordlists.
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MnemonicErr {
    #[error("invalid entropy length: {0} bits, expected 128, 160, 192, 224 or 256")]
    InvalidEntropyLength(usize),

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("bad checksum")]
    InvalidChecksum,

    #[error("malformed wordlist: {0}")]
    MalformedWordlist(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("entropy source failure: {0}")]
    EntropySource(String),
}

impl From<hex::FromHexError> for MnemonicErr {
    fn from(e: hex::FromHexError) -> Self {
        MnemonicErr::InvalidHex(e.to_string())
    }
}
