use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}
