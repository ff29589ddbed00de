use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "xml-compare")]
#[command(about = "Compare XML documents independent of sibling element order")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Increase log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare two XML files and show differing unique paths.
    Diff(DiffArgs),
    /// Show the unique path map of a single XML file.
    Paths(PathsArgs),
}

/// Settings controlling how unique paths are derived.
#[derive(Args, Debug)]
pub struct HeuristicArgs {
    /// Attribute used for uniqueness; repeat or comma-separate to give several,
    /// earlier names take precedence. Replaces the configured list. To use no
    /// attributes at all, pass --config with a file setting `attributes = []`.
    #[arg(short, long = "attribute", value_name = "NAME", value_delimiter = ',')]
    pub attributes: Vec<String>,
    /// Maximum amount of text used for uniqueness.
    #[arg(short, long, value_name = "N")]
    pub max_text_len: Option<usize>,
    /// TOML file with `attributes` and/or `max_text_len`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    #[command(flatten)]
    pub heuristics: HeuristicArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print only per-kind counts.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct PathsArgs {
    pub file: PathBuf,
    #[command(flatten)]
    pub heuristics: HeuristicArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Only list paths shared by more than one element.
    #[arg(long)]
    pub non_unique: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
