use anyhow::Result;
use clap::Parser;
use hookshim::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let code = cli.run()?;
    std::process::exit(code)
}
