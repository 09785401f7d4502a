use anyhow::Result;
use clap::Parser;

use readmate::cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
