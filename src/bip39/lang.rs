/*
    Bundled wordlists.

    Each list is a versioned constant: changing it changes every
    index to word mapping, so lists are only ever added, never edited.
*/

use std::fmt;
use std::str::FromStr;

use super::{
    MnemonicErr,
    wordlist::Wordlist
};

/// Canonical BIP-0039 English list, one word per line.
const ENGLISH: &str = include_str!("lang/english.txt");

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English
}

impl Language {
    pub const ALL: [Language; 1] = [Language::English];

    /**
        Raw text of the bundled list for this language.
    */
    pub fn word_list(&self) -> &'static str {
        match self {
            Language::English => ENGLISH
        }
    }

    /**
        Builds the wordlist for this language.
        Do this once and pass the list to every encode and decode call.
    */
    pub fn wordlist(&self) -> Result<Wordlist, MnemonicErr> {
        Wordlist::from_text(self.word_list())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Language::English => write!(f, "english")
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            _ => Err(format!("Unsupported language: {}. Valid options: english", s))
        }
    }
}
