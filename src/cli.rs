use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "diff-lint")]
#[command(author, version, about = "Mix style and correctness checker output into a git diff")]
#[command(long_about = "Prints the colored git diff of one file with checker findings \
    interleaved beside the lines they refer to.\n\n\
    Exit codes:\n  \
    0 - Diff printed\n  \
    1 - Malformed checker output or diff\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Filename to process
    pub file: PathBuf,

    /// Git ref to compare against [default: HEAD]
    #[arg(short = 'r', long = "ref", value_name = "REF")]
    pub reference: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
