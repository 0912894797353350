use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sorty", about = concat!("sorty v", env!("CARGO_PKG_VERSION"), " - sort selected lines and task lists"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different settings file
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the selected lines of a document
    Sort(SortArgs),
    /// List sort commands and whether they are enabled
    Commands,
    /// Enable a sort command
    Enable(ToggleArgs),
    /// Disable a sort command
    Disable(ToggleArgs),
}

#[derive(Args)]
pub struct SortArgs {
    /// Sort command: full ID (sorty-sort-tasks) or short ID (tasks)
    pub command: String,
    /// Document to sort ("-" or omitted reads stdin and writes stdout)
    pub file: Option<PathBuf>,
    /// Selection as ANCHOR[:HEAD], 1-based lines (repeatable; default: whole document)
    #[arg(short = 's', long = "select", value_name = "ANCHOR[:HEAD]")]
    pub select: Vec<String>,
    /// Print the result instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Command ID (full or short)
    pub id: String,
}
