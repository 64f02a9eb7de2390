use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "panvpn-bulk")]
#[command(about = "Bulk-provision IPSec VPN configuration on a PAN-OS firewall")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Build the object graph from a CSV file without touching a device.
    Preview(PreviewArgs),
    /// Build the object graph and push it to a firewall.
    Push(PushArgs),
    /// Print the expected CSV column layout.
    Columns,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// VPN config CSV file.
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Suppress per-row progress lines.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct PushArgs {
    /// VPN config CSV file.
    pub file: PathBuf,
    /// Firewall IP address or FQDN.
    #[arg(long)]
    pub device: String,
    /// API user name.
    #[arg(long)]
    pub username: String,
    /// API password; prompted for interactively when omitted.
    #[arg(long)]
    pub password: Option<String>,
    /// Accept the device's certificate without verification.
    #[arg(long)]
    pub insecure: bool,
    /// Suppress per-row progress lines.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
