//! Console configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted value for [`GradebookConfig::average_precision`].
pub const MAX_PRECISION: usize = 17;

/// Environment variable that overrides [`GradebookConfig::output_format`].
pub const FORMAT_ENV_VAR: &str = "GRADEBOOK_OUTPUT_FORMAT";

/// How student lists are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected table, plain or json)"
            )),
        }
    }
}

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Format used for student lists.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Decimal places shown for averages.
    #[serde(default = "default_precision")]
    pub average_precision: usize,
    /// Threshold used when the user submits an empty line.
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
}

fn default_precision() -> usize {
    2
}
fn default_threshold() -> f64 {
    4.0
}

impl GradebookConfig {
    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.average_precision > MAX_PRECISION {
            anyhow::bail!(
                "average_precision must be at most {MAX_PRECISION}, got {}",
                self.average_precision
            );
        }
        Ok(())
    }
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            average_precision: default_precision(),
            default_threshold: default_threshold(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_OUTPUT_FORMAT` overrides the output format of whatever was found.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => {
            tracing::info!("no config file found, using defaults");
            GradebookConfig::default()
        }
    };

    apply_format_override(&mut config, std::env::var(FORMAT_ENV_VAR).ok().as_deref())?;
    config.validate()?;

    Ok(config)
}

fn apply_format_override(config: &mut GradebookConfig, value: Option<&str>) -> Result<()> {
    if let Some(value) = value {
        config.output_format = value
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid {FORMAT_ENV_VAR}"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
