use std::{
    fs, io,
    path::{Path, PathBuf},
};

use facelets::OddLengthPolicy;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top level configuration, read from TOML.
///
/// ```toml
/// odd_length = "reject"
///
/// [engine]
/// program = "cubex"
/// args = []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub odd_length: OddLengthPolicy,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Defaults to a `cubelink` directory in the user's cache dir
    pub working_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            program: "cubex".to_owned(),
            args: Vec::new(),
            working_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn resolved_working_dir(&self) -> Option<PathBuf> {
        self.working_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("cubelink")))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, falling back to the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Config::from_toml(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(target: "config", "No configuration at {path:?}; using defaults");
                Ok(Config::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_default() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.odd_length, OddLengthPolicy::Reject);
        assert_eq!(config.engine.program, "cubex");
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
            odd_length = "truncate"

            [engine]
            program = "/opt/cubex/bin/cubex"
            args = ["--quiet", "--max-depth", "30"]
            working_dir = "/tmp/cubex"
            "#,
        )
        .unwrap();

        assert_eq!(config.odd_length, OddLengthPolicy::Truncate);
        assert_eq!(config.engine.program, "/opt/cubex/bin/cubex");
        assert_eq!(config.engine.args, ["--quiet", "--max-depth", "30"]);
        assert_eq!(
            config.engine.resolved_working_dir(),
            Some(PathBuf::from("/tmp/cubex"))
        );
    }

    #[test]
    fn bad_values_are_parse_errors() {
        assert!(matches!(
            Config::from_toml(r#"odd_length = "pad""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml("[engine]\nprogramme = \"cubex\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load(&dir.path().join("cubelink.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cubelink.toml");
        fs::write(&path, "[engine]\nprogram = \"twophase\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.engine.program, "twophase");
        assert_eq!(config.odd_length, OddLengthPolicy::Reject);
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory exists but cannot be read as a file.
        assert!(matches!(
            Config::load(dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }
}
