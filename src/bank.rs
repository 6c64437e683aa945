use crate::domain::constants::{BANK_FETCH_TIMEOUT_MS, ITEMS_FILE_NAME};
use crate::domain::models::Item;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum BankError {
    #[error("failed to fetch item bank {source_ref}: {reason}")]
    Fetch { source_ref: String, reason: String },
    #[error("failed to read item bank {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("item bank {source_ref} is not a JSON array of items: {reason}")]
    Parse { source_ref: String, reason: String },
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn resolve_items_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join(ITEMS_FILE_NAME)
    } else {
        p.to_path_buf()
    }
}

fn fetch_items_text(url: &str, timeout_ms: u64) -> Result<String, BankError> {
    let fetch_err = |e: reqwest::Error| BankError::Fetch {
        source_ref: url.to_string(),
        reason: e.to_string(),
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(fetch_err)?;
    let resp = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;
    resp.text().map_err(fetch_err)
}

pub fn load_items_raw(source: &str) -> Result<String, BankError> {
    if is_remote(source) {
        return fetch_items_text(source, BANK_FETCH_TIMEOUT_MS);
    }
    let file = resolve_items_file(source);
    std::fs::read_to_string(&file).map_err(|e| BankError::Read {
        path: file.to_string_lossy().to_string(),
        reason: e.to_string(),
    })
}

pub fn parse_items(source: &str, raw: &str) -> Result<Vec<Item>, BankError> {
    serde_json::from_str(raw).map_err(|e| BankError::Parse {
        source_ref: source.to_string(),
        reason: e.to_string(),
    })
}

/// Loads the whole bank in one call. No caching, no retry.
pub fn load_items(source: &str) -> Result<Vec<Item>, BankError> {
    let raw = load_items_raw(source)?;
    let items = parse_items(source, &raw)?;
    debug!(source, count = items.len(), "loaded item bank");
    Ok(items)
}
