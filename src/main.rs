#![warn(clippy::all, rust_2018_idioms)]

use std::io::{self, BufWriter};

use anyhow::{Context as _, Result};
use dupcheck::{Config, build_command, setup_logging};

fn main() -> Result<()> {
    // a missing .env is fine, flags and the real environment still apply
    let env_file = dotenvy::dotenv();

    let config = Config::from_matches(&build_command().get_matches())?;
    setup_logging(config.log_level);

    match env_file {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::trace!("no .env file"),
        Err(e) => log::warn!("failed to load .env file: {e}"),
    }
    log::info!("using {} strategy", config.strategy);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    dupcheck_core::run(stdin, stdout, config.strategy).context("failed to check input")?;

    Ok(())
}
