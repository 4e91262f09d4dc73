use crate::config::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rustdoc-graph")]
#[command(about = "Decode, validate and query rustdoc JSON documents", long_about = None)]
pub struct Cli {
    /// TOML file with default settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides `log_format` from the config file
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a document and report every problem found
    Check {
        file: PathBuf,
        /// Fail on the first per-item error or dangling reference
        #[arg(long)]
        strict: bool,
        /// Exit non-zero if any diagnostic was reported
        #[arg(long)]
        deny_diagnostics: bool,
        #[arg(long)]
        max_input_bytes: Option<u64>,
    },
    /// Resolve an id or a `::`-separated path
    Lookup {
        file: PathBuf,
        query: String,
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,
        #[arg(long)]
        max_input_bytes: Option<u64>,
    },
}
