use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "nestdiff",
    about = "Compare two nested documents field by field",
    version
)]
pub struct Cli {
    /// First document (JSON or TOML, `-` for JSON on stdin)
    pub first: PathBuf,

    /// Second document; when omitted only the first is shown
    pub second: Option<PathBuf>,

    /// Compare scalars by kind and value instead of loosely
    #[arg(long)]
    pub strict: bool,

    /// Treat values missing from the second document as matching
    #[arg(long)]
    pub no_second: bool,

    /// Label of the first document
    #[arg(long)]
    pub title1: Option<String>,

    /// Label of the second document
    #[arg(long)]
    pub title2: Option<String>,

    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// TOML file with default options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}
