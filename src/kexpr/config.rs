//! Configuration loader
//!
//! `defaults/kexpr.default.toml` is embedded into the crate so documented defaults and runtime
//! behavior stay in sync. Callers layer their own files and overrides on top via [`Loader`]
//! before deserializing into [`KexprConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::kexpr::formats::NotationOptions;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/kexpr.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct KexprConfig {
    pub notation: NotationConfig,
    pub cli: CliConfig,
}

/// Layout of serialized kexpr text
#[derive(Debug, Clone, Deserialize)]
pub struct NotationConfig {
    pub indent_string: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub default_format: String,
}

impl From<&NotationConfig> for NotationOptions {
    fn from(config: &NotationConfig) -> Self {
        NotationOptions {
            indent_string: config.indent_string.clone(),
        }
    }
}

impl KexprConfig {
    pub fn notation_options(&self) -> NotationOptions {
        NotationOptions::from(&self.notation)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<KexprConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings taken from the command line, applied over defaults and the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides<'a> {
    /// `--config <file>`, required to exist when given
    pub config_file: Option<&'a Path>,
    /// `--indent <string>`, replaces `notation.indent_string`
    pub indent: Option<&'a str>,
}

/// Build the configuration the `kexpr` binary runs with
pub fn load_for_cli(overrides: &CliOverrides<'_>) -> Result<KexprConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = overrides.config_file {
        loader = loader.with_file(path);
    }
    if let Some(indent) = overrides.indent {
        loader = loader.set_override("notation.indent_string", indent)?;
    }
    loader.build()
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KexprConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.notation.indent_string, "    ");
        assert_eq!(config.cli.default_format, "ast-kexpr");
        assert_eq!(config.notation_options(), NotationOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("cli.default_format", "ast-treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.cli.default_format, "ast-treeviz");
        assert_eq!(config.notation.indent_string, "    ");
    }

    #[test]
    fn cli_indent_overrides_default() {
        let config = load_for_cli(&CliOverrides {
            config_file: None,
            indent: Some("\t"),
        })
        .expect("config to build");
        assert_eq!(config.notation_options().indent_string, "\t");
        assert_eq!(config.cli.default_format, "ast-kexpr");
    }

    #[test]
    fn cli_without_flags_uses_defaults() {
        let config = load_for_cli(&CliOverrides::default()).expect("config to build");
        assert_eq!(config.notation_options(), NotationOptions::default());
    }

    #[test]
    fn cli_missing_config_file_is_an_error() {
        let result = load_for_cli(&CliOverrides {
            config_file: Some(Path::new("does/not/exist.toml")),
            indent: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("does/not/exist.toml").build().is_err());
    }
}
