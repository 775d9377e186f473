use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use dzongkha_json::paths::data_root;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. The TUI owns the terminal, so it logs to a file instead.
pub fn init(to_file: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        let dir = data_root();
        fs::create_dir_all(&dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("dzongkha-tui.log"))?;
        fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
