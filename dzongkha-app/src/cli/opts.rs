use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_API_URL;

#[derive(Debug, Parser, Clone)]
#[command(name = "dzongkha", version, about = "Dzongkha Master: flashcard API, review loop and TUI")]
pub struct Cli {
    /// Store connection address (memory:, json:[path], sqlite://path, postgres://...).
    /// Overrides STORE_URL.
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Launch the HTTP API
    Serve(ServeCmd),
    /// Replace the stored cards with the sample set
    Init,
    /// List stored cards
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Export stored cards
    #[command(subcommand)]
    Export(ExportCmd),
    /// Replace stored cards with the contents of a file
    #[command(subcommand)]
    Import(ImportCmd),
    /// Review loop (line mode)
    Review(ReviewCmd),
    /// Launch Terminal UI
    Tui(TuiCmd),
}

#[derive(Debug, Args, Clone)]
pub struct ServeCmd {
    /// Bind address (host:port); defaults to 0.0.0.0:$PORT
    #[arg(long)]
    pub addr: Option<SocketAddr>,
}

/// Where review front ends get their cards from.
#[derive(Debug, Args, Clone)]
pub struct ClientArgs {
    /// Base URL of the card service
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Read the configured store directly instead of going through the service
    #[arg(long)]
    pub local: bool,
    /// Request timeout for the card service, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,
}

impl ClientArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    #[command(flatten)]
    pub client: ClientArgs,
    /// Start with this category selected ("All" for every card)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct TuiCmd {
    #[command(flatten)]
    pub client: ClientArgs,
    /// Delay between an action and the card update; 0 disables the animation
    #[arg(long, default_value_t = 300)]
    pub transition_delay_ms: u64,
}

impl TuiCmd {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum ExportCmd {
    Json { path: PathBuf },
    Csv { path: PathBuf },
}

#[derive(Debug, Subcommand, Clone)]
pub enum ImportCmd {
    Json { path: PathBuf },
    Csv { path: PathBuf },
}
