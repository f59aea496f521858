//! Configuration management for asigen.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`asigen.toml` in the working directory, or `--config`)
//! 3. `ASIGEN_*` environment variables
//! 4. command-line flags (see [`crate::cli::Cli::apply`])

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{AsigenError, Result};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "asigen.toml";

/// Prefix of the environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "ASIGEN_";

/// Configuration for asigen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory stubs are written under
    pub output: PathBuf,

    /// Search directories recursively
    pub recursive: bool,

    /// Leave private members out of the stubs
    pub public_only: bool,

    /// Suppress all console output except errors
    pub silent: bool,

    /// Show progress, a banner and timing
    pub verbose: bool,

    /// Worker threads for scanning; 0 lets rayon decide
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("asi"),
            recursive: false,
            public_only: false,
            silent: false,
            verbose: false,
            jobs: 0,
        }
    }
}

impl Config {
    /// Load configuration from the config file and the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_env(std::env::vars())?;
        Ok(config)
    }

    /// Read a TOML config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AsigenError::io(path, e))?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&content)
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `ASIGEN_*` variables from `vars`, ignoring everything else.
    pub fn merge_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                match name {
                    "OUTPUT" | "RECURSIVE" | "PUBLIC_ONLY" | "SILENT" | "VERBOSE" | "JOBS" => {
                        self.set(&name.to_lowercase().replace('_', "-"), &value)?;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Set a configuration value by its key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => self.output = PathBuf::from(value),
            "recursive" => self.recursive = parse_flag(key, value)?,
            "public-only" => self.public_only = parse_flag(key, value)?,
            "silent" => self.silent = parse_flag(key, value)?,
            "verbose" => self.verbose = parse_flag(key, value)?,
            "jobs" => {
                self.jobs = value.trim().parse().map_err(|_| {
                    AsigenError::Config(format!("{key} must be a number, got '{value}'"))
                })?
            }
            _ => return Err(AsigenError::Config(format!("unknown key '{key}'"))),
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AsigenError::Config(format!(
            "{key} must be true or false, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("asi"));
        assert!(!config.recursive);
        assert!(!config.public_only);
        assert_eq!(config.jobs, 0);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml("output = \"stubs\"\npublic_only = true\n").unwrap();
        assert_eq!(config.output, PathBuf::from("stubs"));
        assert!(config.public_only);
        assert!(!config.recursive);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = Config::from_toml("outptu = \"x\"").unwrap_err();
        assert!(matches!(err, AsigenError::ConfigParse(_)));
    }

    #[test]
    fn test_merge_env() {
        let mut config = Config::default();
        config
            .merge_env(vars(&[
                ("ASIGEN_OUTPUT", "out/asi"),
                ("ASIGEN_RECURSIVE", "true"),
                ("ASIGEN_JOBS", "4"),
                ("ASIGEN_VERBOSE", "yes"),
                ("ASIGEN_COLOR", "never"),
                ("PATH", "/usr/bin"),
            ]))
            .unwrap();

        assert_eq!(config.output, PathBuf::from("out/asi"));
        assert!(config.recursive);
        assert_eq!(config.jobs, 4);
        assert!(config.verbose);
        assert!(!config.silent);
    }

    #[test]
    fn test_merge_env_silent() {
        let mut config = Config::default();
        config
            .merge_env(vars(&[("ASIGEN_SILENT", "1")]))
            .unwrap();
        assert!(config.silent);
    }

    #[test]
    fn test_merge_env_rejects_bad_values() {
        let mut config = Config::default();
        let err = config
            .merge_env(vars(&[("ASIGEN_JOBS", "many")]))
            .unwrap_err();
        assert!(matches!(err, AsigenError::Config(_)));

        let err = config
            .merge_env(vars(&[("ASIGEN_PUBLIC_ONLY", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, AsigenError::Config(_)));
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "recursive = true\njobs = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.recursive);
        assert_eq!(config.jobs, 2);

        let missing = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, AsigenError::Io { .. }));
    }
}
