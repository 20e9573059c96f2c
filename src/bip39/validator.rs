/*
    Phrase validation for callers that only need a yes or no answer.
*/

use log::debug;

use super::{
    MnemonicErr,
    decoder,
    wordlist::Wordlist
};

/**
    Returns true if every word is in the wordlist and the checksum matches.

    Never fails: any decode error is reported as false. Use `decode`
    directly to learn why a phrase was rejected.
*/
pub fn validate<S>(phrase: &[S], wordlist: &Wordlist) -> bool
where S: AsRef<str>
{
    match decoder::decode(phrase, wordlist) {
        Ok(_) => true,
        Err(e) => {
            //The error may carry a user typed word, keep it out of the log
            debug!("phrase rejected: {}", match e {
                MnemonicErr::UnknownWord(_) => "unknown word",
                MnemonicErr::InvalidChecksum => "checksum mismatch",
                _ => "decode failure"
            });
            false
        }
    }
}
