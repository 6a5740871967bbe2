use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "terrahash",
    about = "TerraHash: composite SHA-512 / SHA3-512 / BLAKE2b-512 digests",
    version,
)]
pub struct Cli {
    /// Runs the demo when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overrides `output.format` from the config file.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (default: ./terrahash.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Hash the built-in sample string
    Demo,
    /// Compute composite digests of text, files, or stdin
    Hash(HashArgs),
    /// Check input against an expected digest
    Verify(VerifyArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct HashArgs {
    /// Text to hash (UTF-8 bytes). Reads stdin when no text or file is given.
    pub text: Option<String>,
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,
    /// Also print the intermediate digests.
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Expected digest, 128 hex characters.
    pub expected: String,
    pub text: Option<String>,
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}
