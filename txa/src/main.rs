// src/main.rs
use anyhow::Result;
use txa::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse_env();
    args.logging.configure_logging()?;
    run(args)
}
