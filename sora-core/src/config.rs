//! Configuration file support for SORA assessments
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.sorarc.json` in the working directory
//! 3. `sora.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.
//! Regulatory constants (adjacent area bounds, reference tables) are not
//! configurable; the config only controls how results are gated and shown.

use crate::report::ReportFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_EVIDENCE_MIN_LENGTH: usize = 1;
const MAX_EVIDENCE_MIN_LENGTH: usize = 10_000;

/// SORA configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoraConfig {
    /// Treat OSO compliance gaps as blocking findings (default: true)
    #[serde(default)]
    pub oso_gaps_blocking: Option<bool>,

    /// Warn when a robustness claim above `none` has no evidence (default: true)
    #[serde(default)]
    pub require_evidence: Option<bool>,

    /// Minimum evidence length in characters, after trimming (default: 1)
    #[serde(default)]
    pub evidence_min_length: Option<usize>,

    /// Include objectives whose requirement is optional in text output (default: false)
    #[serde(default)]
    pub show_optional_osos: Option<bool>,

    /// Default output format (default: text)
    #[serde(default)]
    pub format: Option<ReportFormat>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub oso_gaps_blocking: bool,
    pub require_evidence: bool,
    pub evidence_min_length: usize,
    pub show_optional_osos: bool,
    pub format: ReportFormat,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl SoraConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.evidence_min_length {
            if min == 0 {
                anyhow::bail!("evidence_min_length must be at least 1 (got 0)");
            }
            if min > MAX_EVIDENCE_MIN_LENGTH {
                anyhow::bail!(
                    "evidence_min_length must be at most {} (got {})",
                    MAX_EVIDENCE_MIN_LENGTH,
                    min
                );
            }
            if self.require_evidence == Some(false) {
                anyhow::bail!("evidence_min_length has no effect when require_evidence is false");
            }
        }

        Ok(())
    }

    /// Resolve config into the form used by findings and reports
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        Ok(ResolvedConfig {
            oso_gaps_blocking: self.oso_gaps_blocking.unwrap_or(true),
            require_evidence: self.require_evidence.unwrap_or(true),
            evidence_min_length: self
                .evidence_min_length
                .unwrap_or(DEFAULT_EVIDENCE_MIN_LENGTH),
            show_optional_osos: self.show_optional_osos.unwrap_or(false),
            format: self.format.unwrap_or_default(),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        SoraConfig::default().resolve()
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.sorarc.json`
/// 2. `sora.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(root: &Path) -> Result<Option<(SoraConfig, PathBuf)>> {
    for name in [".sorarc.json", "sora.config.json"] {
        let path = root.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<SoraConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: SoraConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config in `root`.
/// Returns default config if nothing is found.
pub fn load_and_resolve(root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(root)? {
            Some((config, path)) => (config, Some(path)),
            None => (SoraConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
