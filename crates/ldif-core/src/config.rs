use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_LINE_WIDTH, DEFAULT_VERSION, ENV_PREFIX, ENV_SEPARATOR,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub encode: EncodeConfig,
    pub decode: DecodeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodeConfig {
    /// Physical line width for folding; `0` disables folding.
    pub line_width: usize,
    /// Version number for the header line.
    pub version: u32,
    /// Whether to write the `version:` header before the first entry.
    pub version_header: bool,
}

impl EncodeConfig {
    /// ## Summary
    /// Returns the fold width, or `None` when folding is disabled.
    #[must_use]
    pub fn fold_width(&self) -> Option<usize> {
        (self.line_width != 0).then_some(self.line_width)
    }

    /// ## Summary
    /// Returns the header version, or `None` when no header is written.
    #[must_use]
    pub fn header_version(&self) -> Option<u32> {
        self.version_header.then_some(self.version)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeConfig {
    pub skip_version: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// When `file` is `None`, `ldif.toml` in the working directory is used if present.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails, or if
    /// the resulting settings are invalid.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("encode.line_width", i64::try_from(DEFAULT_LINE_WIDTH)?)?
            .set_default("encode.version", i64::from(DEFAULT_VERSION))?
            .set_default("encode.version_header", true)?
            .set_default("decode.skip_version", true)?
            // TOML file
            .add_source(file_source)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        tracing::debug!(settings = ?settings, "Settings loaded");

        Ok(settings)
    }

    /// ## Summary
    /// Checks value ranges that deserialization cannot express.
    ///
    /// ## Errors
    /// Returns an error if the fold width is 1, which leaves no room for content on
    /// continuation lines.
    pub fn validate(&self) -> CoreResult<()> {
        if self.encode.line_width == 1 {
            return Err(CoreError::InvalidConfiguration(
                "encode.line_width must be 0 (no folding) or at least 2".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and `ldif.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(file)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
