//! nerfuse command-line entry point

use clap::Parser;
use nerfuse_cli::commands::Commands;
use nerfuse_cli::CliResult;

/// Fuse multi-word named-entity spans in NER tagger output into single labeled tokens
#[derive(Debug, Parser)]
#[command(name = "nerfuse", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
