use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "flysheet",
    about = "Flysheet — short-lived document links from text",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the artifact server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind, e.g. 0.0.0.0:8080
    #[arg(long)]
    pub bind: Option<String>,

    /// Base URL embedded in returned artifact links
    #[arg(long)]
    pub public_url: Option<String>,

    /// Directory for artifact bytes; in-memory when omitted
    #[arg(long)]
    pub storage_root: Option<PathBuf>,

    /// Seconds an artifact stays retrievable
    #[arg(long)]
    pub ttl_secs: Option<u64>,

    /// Seconds between background reclamation sweeps
    #[arg(long)]
    pub reclaim_interval_secs: Option<u64>,
}
