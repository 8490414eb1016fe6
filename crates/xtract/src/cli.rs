use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "xtract",
    about = "Extract typed values from strings using {{ key: specifier }} templates",
    version
)]
pub struct Cli {
    /// Template, e.g. "{{ day: 2d }}-{{ month: 2d }}-{{ year: 4d }}"
    pub template: String,

    /// Strings to extract from; stdin (or --file) is read when none are given
    pub inputs: Vec<String>,

    /// Read input from a file instead of stdin
    #[arg(short, long, conflicts_with = "inputs")]
    pub file: Option<PathBuf>,

    /// Treat every line of stdin or the file as a separate input
    #[arg(short, long)]
    pub lines: bool,

    /// Extract inputs in parallel (output order is preserved)
    #[arg(short, long)]
    pub parallel: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show the compiled pattern and per-tag captures, then exit
    #[arg(long)]
    pub explain: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
