//! Speller CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use speller::cli::args::*;
use speller::cli::commands::*;

/// Environment variable whose filter overrides the `-v`/`-q` level.
const LOG_ENV: &str = "SPELLER_LOG";

/// Map CLI verbosity to a log level.
fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(args: &SpellerArgs) {
    Builder::new()
        .filter_level(level_filter(args.verbosity()))
        .parse_env(Env::new().filter(LOG_ENV))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let args = SpellerArgs::parse();
    init_logging(&args);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(0), LevelFilter::Error);
        assert_eq!(level_filter(1), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Info);
        assert_eq!(level_filter(3), LevelFilter::Debug);
        assert_eq!(level_filter(7), LevelFilter::Debug);
    }
}
