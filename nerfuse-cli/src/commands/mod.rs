//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;
use nerfuse_core::{HeuristicSplitters, InputFormat};
use std::path::PathBuf;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fuse entity spans in tagged text (reads stdin by default)
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a settings file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check that a settings file loads
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported input and output formats
    Formats,

    /// List the heuristic splitter set
    Splitters {
        /// Known verbs file to include
        #[arg(long, value_name = "FILE")]
        known_verbs: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Formats => {
                println!("Input formats:");
                for format in InputFormat::ALL {
                    println!("  {}", format);
                }
                println!("Output formats:");
                for format in <process::OutputFormat as clap::ValueEnum>::value_variants() {
                    println!("  {}", format.as_str());
                }
                Ok(())
            }
            ListCommands::Splitters { known_verbs } => {
                let splitters = match known_verbs {
                    Some(path) => HeuristicSplitters::from_file(path)?,
                    None => HeuristicSplitters::default(),
                };
                for splitter in splitters.iter() {
                    println!("{splitter}");
                }
                Ok(())
            }
        }
    }
}
