//! Command-line entry point
//!
//! Resolves the order, generates the square, writes it out. Every failure
//! surfaces as a single stderr line and exit status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use magic_square::{Error, order, persistence, siamese};

/// Generate an odd-order magic square with the Siamese method and write it
/// to a file.
#[derive(Parser, Debug)]
#[command(name = "magic-square", version, about, long_about = None)]
struct Cli {
    /// Destination file (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Square order; prompted for on stdin when omitted
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    order: Option<i64>,
}

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors exit 1 like every other failure, not clap's default 2.
    // Help and version requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let order = order::resolve(cli.order)?;
    log::info!("generating order-{} square", order.get());

    let square = siamese::generate(order)?;
    log::debug!("completed square:\n{square}");

    persistence::save(&square, &cli.output)?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}
