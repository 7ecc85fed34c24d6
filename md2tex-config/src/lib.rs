//! Shared configuration loader for md2tex.
//!
//! `defaults/md2tex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Md2TexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use md2tex_babel::DocumentOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/md2tex.default.toml");

/// Top-level configuration consumed by md2tex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Md2TexConfig {
    pub document: DocumentConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Preamble and rendering knobs for LaTeX output.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub class: String,
    pub picture_width: String,
    pub packages: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<DocumentConfig> for DocumentOptions {
    fn from(config: DocumentConfig) -> Self {
        DocumentOptions {
            class: config.class,
            picture_width: config.picture_width,
            title: config.title,
            author: config.author,
            date: config.date,
            packages: config.packages,
        }
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        DocumentOptions::from(config.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub pretty_json: bool,
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Md2TexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Md2TexConfig, ConfigError> {
    Loader::new().build()
}
