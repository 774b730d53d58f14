// src/bin/cli.rs
use color_eyre::eyre::eyre;
use pcda_presenter::{ cli, config::options::AppOptions, log };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = AppOptions::default();
    if let Err(e) = log::init(&opts.log) {
        eprintln!("Logging disabled: {e}");
    }

    cli::run().map_err(|e| eyre!("{e}"))
}
