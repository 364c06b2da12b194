use std::path::Path;

use serde::{Deserialize, Serialize};

use super::dns::RawDnsConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::normalized::NormalizedDnsConfig;
use super::output::OutputConfig;

const LOCAL_CONFIG_PATH: &str = "dnsconf.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsconf/config.toml";
const CONFIG_CANDIDATES: [&str; 2] = [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH];

/// Main configuration structure for dnsconf
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// DNS section to normalize
    #[serde(default)]
    pub dns: RawDnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsconf.toml in current directory
    /// 3. /etc/dnsconf/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_from_candidates(path, &CONFIG_CANDIDATES, cli_overrides)
    }

    fn load_from_candidates(
        path: Option<&str>,
        candidates: &[&str],
        cli_overrides: CliOverrides,
    ) -> Result<Self, ConfigError> {
        let source = path
            .map(str::to_string)
            .or_else(|| first_existing(candidates));

        let mut config = match source {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        if is_json(path) {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(pretty) = overrides.pretty {
            self.output.pretty = pretty;
        }
    }

    /// Validate tool settings. DNS errors are reported by [`Config::build_dns`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn build_dns(&self) -> Result<NormalizedDnsConfig, ConfigError> {
        Ok(self.dns.build()?)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?
        } else {
            toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?
        };
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        first_existing(&CONFIG_CANDIDATES)
    }
}

fn first_existing(candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|path| Path::new(path).exists())
        .map(|path| path.to_string())
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub pretty: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, name: &str, level: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, format!("[logging]\nlevel = \"{}\"\n", level)).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_first_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_config(dir.path(), "dnsconf.toml", "debug");
        let system = write_config(dir.path(), "config.toml", "warn");

        let config =
            Config::load_from_candidates(None, &[&local, &system], CliOverrides::default())
                .unwrap();

        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_candidate_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dnsconf.toml");
        let system = write_config(dir.path(), "config.toml", "warn");

        let config = Config::load_from_candidates(
            None,
            &[missing.to_str().unwrap(), &system],
            CliOverrides::default(),
        )
        .unwrap();

        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_no_candidate_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("dnsconf.toml");

        let config = Config::load_from_candidates(
            None,
            &[missing.to_str().unwrap()],
            CliOverrides::default(),
        )
        .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_beats_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let local = write_config(dir.path(), "dnsconf.toml", "debug");
        let explicit = write_config(dir.path(), "explicit.toml", "error");

        let config = Config::load_from_candidates(
            Some(explicit.as_str()),
            &[&local],
            CliOverrides::default(),
        )
        .unwrap();

        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn test_overrides_apply_to_default_config() {
        let overrides = CliOverrides {
            log_level: Some("trace".to_string()),
            pretty: None,
        };

        let config = Config::load_from_candidates(None, &[], overrides).unwrap();

        assert_eq!(config.logging.level, "trace");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = write_config(dir.path(), "present.toml", "info");

        assert_eq!(
            first_existing(&[missing.to_str().unwrap(), &present]),
            Some(present.clone())
        );
        assert_eq!(first_existing(&[missing.to_str().unwrap()]), None);
        assert_eq!(first_existing(&[]), None);
    }
}
