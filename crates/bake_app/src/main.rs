use std::path::PathBuf;

use anyhow::Context as _;
use bake_app::{logging, BakeConfig, Baker};

const USAGE: &str = "usage: bake <root> [out_dir]";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let root = PathBuf::from(args.next().context(USAGE)?);
    let mut config = BakeConfig::load(&root)?;
    if let Some(out_dir) = args.next() {
        config = config.with_out_dir(out_dir);
    }
    if args.next().is_some() {
        anyhow::bail!(USAGE);
    }

    logging::init(&config.log_level)?;
    Baker::new(root).with_config(config).run()?;
    Ok(())
}
