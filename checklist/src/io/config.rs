//! Widget configuration (TOML).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::ScrollBehavior;

pub const DEFAULT_STORAGE_KEY: &str = "islensk-mynstraleidangur-v1";
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 24.0;

/// Checklist configuration.
///
/// Missing fields default to the values the widget has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Key of the storage slot holding the persisted snapshot.
    pub storage_key: String,

    /// Gap left above a step scrolled into view by navigation.
    pub scroll_offset_px: f64,

    pub scroll_behavior: ScrollBehavior,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            scroll_offset_px: DEFAULT_SCROLL_OFFSET_PX,
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}

impl ChecklistConfig {
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(anyhow!("storage_key must be non-empty"));
        }
        if !self.scroll_offset_px.is_finite() || self.scroll_offset_px < 0.0 {
            return Err(anyhow!("scroll_offset_px must be a finite value >= 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ChecklistConfig::default()`.
pub fn load_config(path: &Path) -> Result<ChecklistConfig> {
    if !path.exists() {
        let cfg = ChecklistConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ChecklistConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ChecklistConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ChecklistConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("checklist.toml");
        let cfg = ChecklistConfig {
            storage_key: "onboarding-v2".to_string(),
            scroll_offset_px: 64.0,
            scroll_behavior: ScrollBehavior::Instant,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("checklist.toml");
        fs::write(&path, "scroll_behavior = \"instant\"\n").expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(cfg.scroll_offset_px, DEFAULT_SCROLL_OFFSET_PX);
        assert_eq!(cfg.scroll_behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn rejects_invalid_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("checklist.toml");
        fs::write(&path, "storage_key = \"  \"\n").expect("write");
        assert!(load_config(&path).is_err());

        let cfg = ChecklistConfig {
            scroll_offset_px: -1.0,
            ..ChecklistConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(write_config(&path, &cfg).is_err());
    }
}
