use anyhow::Result;
use clap::Parser;
use std::io::Write;

use jetjs_cli::args::CliArgs;
use jetjs_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // JETJS_LOG_FORMAT=tree|json|text, see tracing_config.rs
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
