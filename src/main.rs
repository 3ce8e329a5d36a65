use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod ui;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::init_logging(args.log_file.as_deref())?;
    app::run(&args)
}
