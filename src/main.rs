use anyhow::Result;
use clap::Parser;
use minibanco::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
