use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Configuration file structure that mirrors CLI arguments
/// All fields are optional to allow partial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format: text or json
    pub output: Option<String>,

    /// Save the full analysis report to a JSON file
    pub save: Option<String>,

    /// Export all page artifacts to this directory
    pub export: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout: Option<u64>,

    /// Verbose output
    pub verbose: Option<bool>,
}

/// Configuration file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Get the default configuration file paths to check (in order of priority)
    /// Returns paths in order: current directory, user config directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Check current directory first (highest priority)
        for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
            for ext in format.extensions() {
                paths.push(PathBuf::from(format!("pagelens.{}", ext)));
            }
        }

        // Check user config directory (~/.config/pagelens)
        // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .and_then(|p| {
                if p.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(p))
                }
            })
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            let pagelens_config_dir = config_home.join("pagelens");
            for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
                for ext in format.extensions() {
                    paths.push(pagelens_config_dir.join(format!("config.{}", ext)));
                }
            }
        }

        paths
    }

    /// Try to load configuration from default paths
    /// Returns the first configuration file found, or None if no config exists
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Merge this configuration with CLI arguments
    /// CLI arguments take precedence over config file values
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            url: cli.url.clone(),
            output: if cli.output != "text" {
                cli.output.clone()
            } else {
                self.output.clone().unwrap_or_else(|| cli.output.clone())
            },
            save: cli.save.clone().or_else(|| self.save.clone()),
            export: cli.export.clone().or_else(|| self.export.clone()),
            timeout: if cli.timeout != 30 {
                cli.timeout
            } else {
                self.timeout.unwrap_or(cli.timeout)
            },
            verbose: if cli.verbose {
                cli.verbose
            } else {
                self.verbose.unwrap_or(cli.verbose)
            },
            config: cli.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn cli_with_defaults(url: &str) -> Cli {
        Cli {
            url: url.to_string(),
            output: "text".to_string(),
            save: None,
            export: None,
            timeout: 30,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("config.ini")), None);
    }

    #[test]
    fn test_from_file_toml() {
        let file = NamedTempFile::with_suffix(".toml").expect("Failed to create temp file");
        fs::write(file.path(), "output = \"json\"\ntimeout = 10\n")
            .expect("Failed to write config");

        let config = Config::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.output.as_deref(), Some("json"));
        assert_eq!(config.timeout, Some(10));
        assert_eq!(config.verbose, None);
    }

    #[test]
    fn test_merge_config_fills_defaults() {
        let config = Config {
            output: Some("json".to_string()),
            timeout: Some(15),
            verbose: Some(true),
            ..Default::default()
        };
        let merged = config.merge_with_cli(&cli_with_defaults("https://example.com"));

        assert_eq!(merged.output, "json");
        assert_eq!(merged.timeout, 15);
        assert!(merged.verbose);
    }

    #[test]
    fn test_cli_takes_precedence_over_config() {
        let config = Config {
            output: Some("json".to_string()),
            timeout: Some(15),
            ..Default::default()
        };
        let mut cli = cli_with_defaults("https://example.com");
        cli.output = "table".to_string();
        cli.timeout = 5;

        let merged = config.merge_with_cli(&cli);
        assert_eq!(merged.output, "table");
        assert_eq!(merged.timeout, 5);
    }
}
