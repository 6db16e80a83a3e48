#![doc = include_str!("../README.md")]
use ::termux::{cli, setup_tracing, Args, Termux};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

#[paw::main]
fn main(args: Args) -> Result<()> {
    // Merge config Default → Config File → command line args
    let config = args.load_config()?;
    setup_tracing(&config)?;
    debug!("Merge config and parameters : {:#?}", config);

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let capability = args
        .command
        .as_ref()
        .context("No capability given, see --help")?;
    let termux = Termux::with_runner(Box::new(config.runner()));
    let output = cli::run(&termux, capability)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Writing result")?;
    Ok(())
}
