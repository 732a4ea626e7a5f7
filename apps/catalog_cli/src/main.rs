use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use catalog_core::{
    spawn_fetch, CollectionSource, HttpCollectionSource, InMemoryCollectionSource, ViewCoordinator,
};
use clap::Parser;
use shared::{
    domain::{Collation, PageSize},
    protocol::PhotoRecord,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::info;

mod config;
mod input;
mod render;

use config::{load_settings, Settings};
use input::{parse_line, CliAction, USAGE};

#[derive(Parser, Debug)]
#[command(about = "Browse a paginated photo catalog and keep a cart")]
struct Args {
    /// Settings file (defaults to ./catalog.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    source_url: Option<String>,
    #[arg(long)]
    page_size: Option<PageSize>,
    #[arg(long)]
    collation: Option<Collation>,
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Serve pages from a local JSON array of photo records instead of HTTP.
    #[arg(long)]
    fixture: Option<PathBuf>,
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(v) = &self.source_url {
            settings.source_url = v.clone();
        }
        if let Some(v) = self.page_size {
            settings.page_size = v;
        }
        if let Some(v) = self.collation {
            settings.collation = v;
        }
        if let Some(v) = self.latency_ms {
            settings.simulated_latency_ms = v;
        }
        if let Some(v) = &self.log_filter {
            settings.log_filter = v.clone();
        }
    }
}

fn load_fixture(path: &Path) -> Result<InMemoryCollectionSource> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture '{}'", path.display()))?;
    let records: Vec<PhotoRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("fixture '{}' is not a list of photo records", path.display()))?;
    Ok(InMemoryCollectionSource::from_records(records))
}

fn print(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);

    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter()?)
        .with_writer(io::stderr)
        .init();

    let source: Arc<dyn CollectionSource> = match &args.fixture {
        Some(path) => {
            let source = load_fixture(path)?;
            info!(path = %path.display(), items = source.len(), "serving catalog from fixture");
            Arc::new(source)
        }
        None => {
            let source = HttpCollectionSource::new(&settings.source_url, settings.http_options())?;
            info!(url = %source.base_url(), "serving catalog over http");
            Arc::new(source)
        }
    };

    let mut coordinator = ViewCoordinator::new(settings.page_size, settings.collation);
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    spawn_fetch(source.clone(), coordinator.start(), outcome_tx.clone());

    print(&format!("{USAGE}\n"))?;
    print(&render::render_view(coordinator.view()))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_line(&line, coordinator.view()) {
                    Ok(CliAction::Quit) => break,
                    Ok(CliAction::Help) => print(&format!("{USAGE}\n"))?,
                    Ok(CliAction::ShowCart) => print(&render::render_cart(coordinator.view()))?,
                    Ok(CliAction::Command(command)) => {
                        if let Some(request) = coordinator.dispatch(command) {
                            spawn_fetch(source.clone(), request, outcome_tx.clone());
                        }
                        print(&render::render_view(coordinator.view()))?;
                    }
                    Err(err) => print(&format!("{err}\n{USAGE}\n"))?,
                }
            }
            Some(outcome) = outcome_rx.recv() => {
                if coordinator.apply_fetch(outcome) {
                    print(&render::render_view(coordinator.view()))?;
                }
            }
        }
    }

    Ok(())
}
