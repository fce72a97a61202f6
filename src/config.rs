use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub static FILE_NAME: &str = "thetawave-assets.toml";

/// Project-level overrides. Every field is optional and the defaults
/// reproduce the standard Thetawave layout.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bucket: String,
    pub local_dir: String,
    pub aws_cli: String,
    /// Appended after the built-in exclusions, never replacing them.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: "assets-thetawave".to_string(),
            local_dir: "assets/".to_string(),
            aws_cli: "aws".to_string(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    pub fn read() -> anyhow::Result<Config> {
        Self::read_from(Path::new(FILE_NAME))
    }

    pub fn read_from(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs_err::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}
