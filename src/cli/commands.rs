use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};

use crate::bip39::{self, Language, Mnemonic, PhraseLength, Wordlist};
use crate::entropy::Entropy;

#[derive(Debug, Parser)]
#[command(name = "bip39", about = "Convert between entropy and BIP-39 mnemonic phrases")]
pub struct Opt {
    #[arg(long, global = true, default_value = "english", help = "Language of the bundled wordlist")]
    pub language: Language,

    #[arg(
        long,
        global = true,
        env = "BIP39_WORDLIST",
        help = "Load the wordlist from a file with one word per line instead"
    )]
    pub wordlist: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "generate", about = "Generate a new mnemonic from OS randomness")]
    Generate {
        #[arg(long, default_value_t = 24, help = "Number of words: 12, 15, 18, 21 or 24")]
        words: usize,
    },
    #[command(name = "encode", about = "Encode hex entropy into a mnemonic")]
    Encode {
        #[arg(help = "Entropy as hex, 16, 20, 24, 28 or 32 bytes")]
        entropy: String,
    },
    #[command(name = "decode", about = "Decode a mnemonic back into hex entropy")]
    Decode {
        #[arg(required = true, num_args = 1.., help = "The phrase, as separate words or one quoted argument")]
        phrase: Vec<String>,
    },
    #[command(name = "validate", about = "Check a mnemonic's words and checksum")]
    Validate {
        #[arg(required = true, num_args = 1.., help = "The phrase, as separate words or one quoted argument")]
        phrase: Vec<String>,
    },
}

impl Opt {
    /// Log level selected by the number of -v flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Loads the wordlist file if one was given, otherwise the bundled language list.
    pub fn load_wordlist(&self) -> Result<Wordlist, Box<dyn Error>> {
        match &self.wordlist {
            Some(path) => {
                info!("Loading wordlist from {}", path.display());
                let text = fs::read_to_string(path)?;
                Ok(Wordlist::from_text(&text)?)
            }
            None => {
                info!("Using bundled {} wordlist", self.language);
                Ok(self.language.wordlist()?)
            }
        }
    }
}

// Arguments may hold one word each or a whole quoted phrase
fn split_phrase(args: &[String]) -> Vec<&str> {
    args.iter().flat_map(|arg| arg.split_whitespace()).collect()
}

/// Runs a command, writing its output to `out`.
///
/// Returns Ok(false) when the command ran but its answer is negative
/// (an invalid phrase given to `validate`), so the caller can exit non-zero.
pub fn run_command<W: Write>(
    command: &Command,
    wordlist: &Wordlist,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    match command {
        Command::Generate { words } => {
            let length = PhraseLength::from_word_count(*words)
                .ok_or_else(|| format!("Invalid word count: {words}. Valid options: 12, 15, 18, 21, 24"))?;
            let mnemonic = Mnemonic::new(length, wordlist)?;
            writeln!(out, "{mnemonic}")?;
        }
        Command::Encode { entropy } => {
            let entropy = Entropy::from_hex(entropy)?;
            let mnemonic = Mnemonic::from_entropy(entropy, wordlist)?;
            writeln!(out, "{mnemonic}")?;
        }
        Command::Decode { phrase } => {
            let entropy = bip39::decode(&split_phrase(phrase), wordlist)?;
            writeln!(out, "{}", entropy.to_hex())?;
        }
        Command::Validate { phrase } => {
            let valid = bip39::validate(&split_phrase(phrase), wordlist);
            writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
            return Ok(valid);
        }
    }
    Ok(true)
}
