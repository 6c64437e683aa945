use crate::domain::constants::DEFAULT_CONFIG_FILE;
use crate::domain::models::SurveyConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("invalid config {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Explicit path must exist; the implicit `./survey.toml` is optional.
pub fn config_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(PathBuf::from(p)),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            p.exists().then_some(p)
        }
    }
}

pub fn parse_config(path: &Path, raw: &str) -> Result<SurveyConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::Parse {
        path: path.to_string_lossy().to_string(),
        reason: e.to_string(),
    })
}

pub fn load_config(explicit: Option<&str>) -> Result<SurveyConfig, ConfigError> {
    let Some(path) = config_path(explicit) else {
        return Ok(SurveyConfig::default());
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;
    let cfg = parse_config(&path, &raw)?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

pub fn apply_overrides(cfg: &mut SurveyConfig, items: Option<&str>, endpoint: Option<&str>) {
    if let Some(i) = items {
        cfg.items = i.to_string();
    }
    if let Some(e) = endpoint {
        cfg.endpoint = e.to_string();
    }
}
