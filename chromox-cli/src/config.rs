//! Configuration handling for the ChromoX CLI
//!
//! Loads `chromox.toml` when present; command line flags override file values.

use anyhow::{Context, Result};
use chromox_core::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "chromox.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Title drawn above the chromosome
    #[serde(default = "default_title")]
    pub title: String,

    /// Reserved layer toggle, passed through to the renderer
    #[serde(default = "default_true")]
    pub show_all_regions: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write the stats fragment next to the SVG even without --stats
    #[serde(default)]
    pub write_stats: bool,

    /// Stamp the SVG with tool version and generation time
    #[serde(default)]
    pub provenance: bool,
}

// Default value functions
fn default_title() -> String { "Chromosome Ideogram".to_string() }
fn default_true() -> bool { true }

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_all_regions: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize default configuration")
    }

    /// Renderer options with an optional title override from the command line.
    pub fn render_options(&self, title_override: Option<&str>, provenance: Option<String>) -> RenderOptions {
        RenderOptions {
            show_all_regions: self.render.show_all_regions,
            title: title_override.unwrap_or(self.render.title.as_str()).to_string(),
            provenance_comment: provenance.filter(|_| self.output.provenance),
        }
    }
}
