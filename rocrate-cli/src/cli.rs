use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rocrate-promote",
    about = "Promote provenance records in RO-Crate metadata",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Promote SRA-derived computations into experiments (1:1 rename)
    Sra {
        /// Input crate metadata file
        input: PathBuf,

        /// Output file (written atomically)
        output: PathBuf,

        /// Naming authority number for minted identifiers
        #[arg(long, default_value = "59852")]
        naan: String,

        /// Substring that marks a computation for promotion
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Group imaging datasets into experiments (N:1 aggregation)
    Imaging {
        /// Input crate metadata file
        input: PathBuf,

        /// Output file (written atomically)
        output: PathBuf,

        /// Naming authority number for minted identifiers
        #[arg(long, default_value = "59852")]
        naan: String,

        /// Media-type marker added to grouped datasets
        #[arg(long)]
        format: Option<String>,
    },
}
