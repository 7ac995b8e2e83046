//! CLI entry point for the autostereogram generator

use autostereogram::io::cli::{Cli, JobProcessor};
use clap::Parser;

fn main() -> autostereogram::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = JobProcessor::new(cli);
    processor.process()?;
    Ok(())
}
