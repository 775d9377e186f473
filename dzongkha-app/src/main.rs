mod cli;
mod client;
mod config;
mod logging;
mod store;
pub mod api;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::sync::Arc;
use tokio::runtime::Runtime;

use cli::commands::{open_provider, run_cli};
use cli::opts::{Cli, Command};
use config::Config;
use tui::app::TuiApp;

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(matches!(args.cmd, Command::Tui(_)))?;
    let config = Config::load()?.with_store_url(args.store_url.clone());

    match &args.cmd {
        // Run TUI on its own thread/runtime (no nested Tokio)
        Command::Tui(cmd) => {
            let rt = Arc::new(Runtime::new()?);
            let provider = rt.block_on(open_provider(&cmd.client, &config))?;
            let mut app = TuiApp::new(provider, rt, cmd.transition_delay());
            app.run()
        }
        _ => {
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args, config))
        }
    }
}
