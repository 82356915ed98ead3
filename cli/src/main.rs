//! `drsa` binary entry point.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = drsa_cli::Cli::parse();
    drsa_cli::logging::init(cli.verbose)?;
    drsa_cli::run(cli)
}
