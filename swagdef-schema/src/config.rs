//! `swagdef.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root of swagdef.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the schema document lives
    #[serde(default)]
    pub input: InputConfig,

    /// TypeScript output settings
    #[serde(default)]
    pub typescript: TypeScriptConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("swagger.json")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeScriptConfig {
    /// Spaces per indent level; 0 selects tabs.
    #[serde(default = "default_indent")]
    pub indent: u8,

    /// Prefix declarations with `export`.
    #[serde(default = "default_export")]
    pub export: bool,

    /// Comment placed at the top of the output.
    #[serde(default)]
    pub header: Option<String>,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            export: default_export(),
            header: None,
        }
    }
}

fn default_indent() -> u8 {
    2
}

fn default_export() -> bool {
    true
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "swagdef.toml")
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    toml::from_str(content).map_err(|e| source_ctx.config_error(e))
}

/// A swagdef.toml file on disk.
#[derive(Debug)]
pub struct SwagdefToml {
    path: PathBuf,
    config: Config,
}

impl SwagdefToml {
    /// Open and parse a swagdef.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self { path, config })
    }

    /// Open the file if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The input path, resolved relative to the config file's directory.
    pub fn input_path(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if self.config.input.path.is_relative() => dir.join(&self.config.input.path),
            _ => self.config.input.path.clone(),
        }
    }
}
