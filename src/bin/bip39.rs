use std::io;
use std::process;

use btc_mnemonic::cli::{run_command, Opt};
use clap::Parser;
use log::error;

fn main() {
    let opt = Opt::parse();

    // -v flags pick the level, RUST_LOG still wins when set
    env_logger::builder()
        .filter_level(opt.log_level())
        .parse_default_env()
        .init();

    let result = opt
        .load_wordlist()
        .and_then(|wordlist| run_command(&opt.command, &wordlist, &mut io::stdout().lock()));

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Error: {e}");
            process::exit(1);
        }
    }
}
