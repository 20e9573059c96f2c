/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_mnemonic::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    bip39::{
        MnemonicErr,
        Language,
        Mnemonic,
        PhraseLength,
        Wordlist,
        encode,
        decode,
        validate
    },

    entropy::Entropy

};
