/*
    Wordlist used to map 11 bit indexes to words and back.
*/

use std::collections::HashMap;
use std::fmt;

use super::MnemonicErr;

/// Number of words in every BIP-0039 wordlist (2^11).
pub const WORDLIST_LEN: usize = 2048;

/**
    An immutable list of exactly 2048 unique words.

    Build one at startup (see `Language::wordlist`) and pass it by
    reference to the encoder and decoder.
*/
#[derive(Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>
}

impl Wordlist {
    /**
        Creates a wordlist from words in index order.
        Fails if there are not exactly 2048 words, if a word is empty
        or if a word appears more than once.
    */
    pub fn new<I, S>(words: I) -> Result<Self, MnemonicErr>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicErr::MalformedWordlist(format!(
                "expected {} words, found {}", WORDLIST_LEN, words.len()
            )));
        }

        let mut index: HashMap<String, u16> = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(MnemonicErr::MalformedWordlist(format!("empty entry at index {}", i)));
            }
            if let Some(first) = index.insert(word.clone(), i as u16) {
                return Err(MnemonicErr::MalformedWordlist(format!(
                    "duplicate word \"{}\" at indexes {} and {}", word, first, i
                )));
            }
        }

        Ok(Self { words, index })
    }

    /**
        Parses a wordlist resource holding one word per line.
        Surrounding whitespace (including a trailing \r) is stripped.
    */
    pub fn from_text(text: &str) -> Result<Self, MnemonicErr> {
        Self::new(text.lines().map(str::trim))
    }

    /**
        Returns the word at `index`, or None if the index is 2048 or above.
    */
    pub fn word_at(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /**
        Returns the index of `word`, or None if it is not in the list.
    */
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Words in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
         .field("first", &self.words.first())
         .field("last", &self.words.last())
         .finish()
    }
}
