use anyhow::Context;
use clap::Parser;

use braille_curves::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Plot output goes to stdout; logs stay on stderr.
    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    cli::run(cli).context("braille-curves failed")
}
