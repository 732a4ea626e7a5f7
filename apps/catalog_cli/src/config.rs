use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use catalog_core::{HttpSourceOptions, DEFAULT_SOURCE_URL};
use serde::Deserialize;
use shared::domain::{Collation, PageSize};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_url: String,
    pub page_size: PageSize,
    pub collation: Collation,
    pub simulated_latency_ms: u64,
    pub request_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            page_size: PageSize::Ten,
            collation: Collation::Ordinal,
            simulated_latency_ms: 0,
            request_timeout_secs: 30,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn http_options(&self) -> HttpSourceOptions {
        HttpSourceOptions {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            simulated_latency: Duration::from_millis(self.simulated_latency_ms),
        }
    }

    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter '{}'", self.log_filter))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    source_url: Option<String>,
    page_size: Option<u32>,
    collation: Option<String>,
    simulated_latency_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
    log_filter: Option<String>,
}

/// Defaults, then the TOML file, then the environment.
///
/// An explicit `path` must exist; the default `catalog.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid settings in '{}'", path.display()))?,
        Err(err) if required || err.kind() != std::io::ErrorKind::NotFound => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.source_url {
        settings.source_url = v;
    }
    if let Some(v) = file_cfg.page_size {
        settings.page_size = PageSize::try_from(v)?;
    }
    if let Some(v) = file_cfg.collation {
        settings.collation = v.parse()?;
    }
    if let Some(v) = file_cfg.simulated_latency_ms {
        settings.simulated_latency_ms = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }

    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("CATALOG_SOURCE_URL") {
        settings.source_url = v;
    }
    if let Some(v) = lookup("APP__SOURCE_URL") {
        settings.source_url = v;
    }

    if let Some(v) = lookup("APP__PAGE_SIZE") {
        settings.page_size = v.parse().context("APP__PAGE_SIZE")?;
    }
    if let Some(v) = lookup("APP__COLLATION") {
        settings.collation = v.parse().context("APP__COLLATION")?;
    }
    if let Some(v) = lookup("APP__SIMULATED_LATENCY_MS") {
        settings.simulated_latency_ms = v
            .trim()
            .parse()
            .with_context(|| format!("APP__SIMULATED_LATENCY_MS='{v}' is not a number"))?;
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v
            .trim()
            .parse()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS='{v}' is not a number"))?;
    }

    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
