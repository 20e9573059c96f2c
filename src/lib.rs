/*
    Library implementing the BIP-0039 mnemonic codec:
    deterministic conversion between raw entropy and
    word phrases, with checksum validation of phrases
    supplied by users.

    Seed stretching, key derivation and addresses are left
    to the crates consuming the entropy produced here.

    References:
        - BIP-0039 (https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki)
            the standard itself, wordlist included

        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            chapter 5 for the general concepts

        - Trezor reference vectors (https://github.com/trezor/python-mnemonic/blob/master/vectors.json)
            for the English test vectors
*/

//Outward facing modules
pub mod bip39;
pub mod entropy;
pub mod prelude;
#[cfg(feature = "cli")]
pub mod cli;

//Modules for internal use
mod hash;

//Dependencies
use rand::rngs::OsRng;
use sha2::{Sha256, Digest};
