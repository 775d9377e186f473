use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::client::HttpSource;
use crate::config::Config;
use crate::store::open_store;

use anyhow::{bail, Result};
use dzongkha_core::{
    filter_by_category, sample_cards, CardProvider, CardSource, CardStore, CategoryFilter,
    NewFlashcard, Origin, ReviewSession, StoreSource,
};
use serde::{Deserialize, Serialize};
use std::io::{stdin, stdout, Write};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub type Provider = CardProvider<Arc<dyn CardSource>>;

pub async fn run_cli(args: Cli, config: Config) -> Result<()> {
    match args.cmd {
        Command::Review(cmd) => {
            let provider = open_provider(&cmd.client, &config).await?;
            review_cmd(provider, cmd.category).await
        }
        Command::Serve(cmd) => {
            let store = open_store(&config.store_url).await?;
            let addr = cmd
                .addr
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], config.port)));
            api_server::run(store, addr).await
        }
        // main routes the TUI onto its own runtime
        Command::Tui(_) => bail!("the tui runs outside the async runtime"),
        cmd => {
            let store = open_store(&config.store_url).await?;
            match cmd {
                Command::Init => init_cmd(store).await,
                Command::List { category } => list_cmd(store, category).await,
                Command::Export(cmd) => export_cmd(store, cmd).await,
                Command::Import(cmd) => import_cmd(store, cmd).await,
                _ => unreachable!(),
            }
        }
    }
}

pub async fn open_provider(args: &ClientArgs, config: &Config) -> Result<Provider> {
    let source: Arc<dyn CardSource> = if args.local {
        Arc::new(StoreSource::new(open_store(&config.store_url).await?))
    } else {
        info!("using card service at {}", args.api_url);
        Arc::new(HttpSource::new(args.api_url.clone(), args.timeout())?)
    };
    Ok(CardProvider::new(source))
}

async fn init_cmd(store: Arc<dyn CardStore>) -> Result<()> {
    let cards = store.replace_all(&sample_cards()).await?;
    println!("added {} sample cards", cards.len());
    Ok(())
}

async fn list_cmd(store: Arc<dyn CardStore>, category: Option<String>) -> Result<()> {
    let mut cards = store.list_cards().await?;
    if let Some(c) = category {
        cards = filter_by_category(&cards, &CategoryFilter::parse(&c));
    }
    for c in cards {
        println!("{}\t{}\t{}\t{}\t{}", c.id, c.dzongkha, c.english, c.pronunciation, c.category);
    }
    Ok(())
}

async fn export_cmd(store: Arc<dyn CardStore>, cmd: ExportCmd) -> Result<()> {
    let cards: Vec<NewFlashcard> = store
        .list_cards()
        .await?
        .into_iter()
        .map(NewFlashcard::from)
        .collect();
    let path = match cmd {
        ExportCmd::Json { path } => {
            write_json(&path, cards)?;
            path
        }
        ExportCmd::Csv { path } => {
            write_csv(&path, &cards)?;
            path
        }
    };
    println!("wrote {}", path.display());
    Ok(())
}

async fn import_cmd(store: Arc<dyn CardStore>, cmd: ImportCmd) -> Result<()> {
    let cards = match cmd {
        ImportCmd::Json { path } => read_json(&path)?,
        ImportCmd::Csv { path } => read_csv(&path)?,
    };
    let stored = store.replace_all(&cards).await?;
    println!("imported {}", stored.len());
    Ok(())
}

async fn review_cmd(provider: Provider, category: Option<String>) -> Result<()> {
    let mut session = ReviewSession::default();
    if let Some(c) = category {
        session.set_category(c.as_str());
    }
    load_into(&mut session, &provider).await;
    print_help();

    loop {
        print_card(&session);
        let Some(line) = read_line("> ")? else { break };
        let line = line.trim();
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
        match cmd.to_lowercase().as_str() {
            "" | "f" | "flip" => session.flip(),
            "n" | "next" => session.next(),
            "p" | "prev" => session.previous(),
            "k" | "know" => session.mark_known(),
            "r" | "reset" => session.reset(),
            "c" | "category" => {
                let arg = arg.trim();
                if arg.is_empty() {
                    println!("categories: {}", session.categories().join(", "));
                } else {
                    session.set_category(arg);
                }
            }
            "i" | "init" => {
                let out = provider.reseed().await;
                report_origin(out.origin);
                session.load(out.cards);
                session.reset();
            }
            "?" | "help" => print_help(),
            "q" | "quit" => break,
            _ => println!("unknown command, ? for help"),
        }
    }

    println!(
        "\nmastered {} ({}% of {} cards)",
        session.score(),
        session.mastery_percent(),
        session.len()
    );
    Ok(())
}

async fn load_into(session: &mut ReviewSession, provider: &Provider) {
    let out = provider.load().await;
    report_origin(out.origin);
    session.load(out.cards);
}

fn report_origin(origin: Origin) {
    if origin == Origin::Fallback {
        println!("(card service unavailable, using built-in sample cards)");
    }
}

fn print_card(session: &ReviewSession) {
    let (Some(card), Some(pos)) = (session.current_card(), session.position()) else {
        println!("\nno cards in \"{}\"; i=load sample data, c <category>, q=quit", session.category().label());
        return;
    };
    println!(
        "\n[card {}/{} · {:.0}%] [{}]  mastered {} · {}%",
        pos + 1,
        session.len(),
        session.progress_percent(),
        card.category,
        session.score(),
        session.mastery_percent()
    );
    println!("  {}  ({})", card.dzongkha, card.pronunciation);
    if session.revealed() {
        println!("  = {}", card.english);
    }
}

fn print_help() {
    println!("[enter/f=flip, n=next, p=prev, k=I know this, r=reset, c <category>, i=reload sample data, q=quit]");
}

fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    if stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}

// ===== Import/export helpers =====

#[derive(Serialize, Deserialize)]
struct ExportBundle {
    version: u32,
    cards: Vec<NewFlashcard>,
}

fn write_json(path: &Path, cards: Vec<NewFlashcard>) -> Result<()> {
    let bundle = ExportBundle { version: 1, cards };
    std::fs::write(path, serde_json::to_string_pretty(&bundle)?)?;
    Ok(())
}

fn read_json(path: &Path) -> Result<Vec<NewFlashcard>> {
    let data = std::fs::read_to_string(path)?;
    let bundle: ExportBundle = serde_json::from_str(&data)?;
    if bundle.version != 1 {
        bail!("unsupported export version {}", bundle.version);
    }
    Ok(bundle.cards)
}

fn write_csv(path: &Path, cards: &[NewFlashcard]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for c in cards {
        wtr.serialize(c)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_csv(path: &Path) -> Result<Vec<NewFlashcard>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        let card: NewFlashcard = rec?;
        out.push(card);
    }
    Ok(out)
}
