use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cssnorm")]
#[command(about = "Print a stylesheet in canonical normalized form")]
pub struct Cli {
    /// Stylesheet to format
    pub filename: PathBuf,

    /// Drop @charset from the output
    #[arg(long)]
    pub ignore_charset: bool,

    /// Drop comments from the output
    #[arg(long)]
    pub ignore_comments: bool,

    /// Drop rules with no declarations
    #[arg(long)]
    pub ignore_empty_rules: bool,
}
