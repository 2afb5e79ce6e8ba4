use anyhow::Result;
use change_version::{arguments::Arguments, prompt, targets, version};
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let new_version = match args.new_version {
        Some(v) => v,
        None => prompt::read_version(io::stdin().lock(), io::stdout())?,
    };

    version::check(&new_version, args.strict)?;

    let path: &Path = args.path.as_ref();
    targets::update_all(path, &new_version)?;

    Ok(())
}
