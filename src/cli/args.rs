//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: scan PHP sources and generate the POT catalog template
//! - `translate`: fill the template from the built-in dictionary and compile
//! - `init`: initialize a tonepot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the extract and translate commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Languages output directory (overrides config file)
    #[arg(long)]
    pub languages_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Template catalog path (defaults to <languagesDir>/<textDomain>.pot)
    #[arg(long)]
    pub template: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan PHP sources for translatable strings and write the POT template
    Extract(ExtractCommand),
    /// Apply the built-in French dictionary to the template and compile the MO catalog
    Translate(TranslateCommand),
    /// Initialize a new .tonepotrc.json configuration file
    Init,
}
