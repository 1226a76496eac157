use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkmap-audit")]
#[command(
    author,
    version,
    about = "Attribute binary size to modules and object files from a link map"
)]
#[command(
    long_about = "linkmap-audit parses a linker-generated link map and reports how many bytes \
of the final binary each build module and each object file contributes.\n\n\
Example:\n  linkmap-audit App-arm64-LinkMap.txt --csv report.csv"
)]
pub struct Cli {
    /// Path to the link map file
    #[arg(value_name = "LINK_MAP")]
    pub input: PathBuf,

    /// Where to write the report; an existing file is overwritten. Omit to
    /// print to stdout.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Report module totals only, without per-file lines
    #[arg(short, long)]
    pub module_only: bool,

    /// Print progress and skipped-line warnings while parsing
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit the report as CSV rows for spreadsheet import
    #[arg(long, conflicts_with = "json")]
    pub csv: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}
