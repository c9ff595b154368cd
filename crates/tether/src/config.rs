//! # Configuration
//!
//! Loading of named constraint profiles from a file with environment overrides.
//!
//! ```toml
//! [ranges.score]
//! lower = 0
//! upper = 100
//!
//! [min_lengths]
//! cvv = 3
//! ```
//!
//! Profiles are looked up through an enumeration, the same way the enum-keyed accessor reads
//! any other string-keyed map.

use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tether_keyed::{EnumKey, EnumKeyedExt};
use tether_wrappers::{Constrained, MinLength, WrapperError};
use tracing::info;

const DEFAULT_PATH: &str = "tether";
const ENV_PREFIX: &str = "TETHER";
const ENV_SEPARATOR: &str = "__";

/// Errors raised while loading configuration or building wrappers from it.
#[tether_derive::tether_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The configured bounds of a profile are inverted.
    #[error("Invalid profile{}: {source}", format_context(.context))]
    InvalidProfile { source: WrapperError, context: Option<Cow<'static, str>> },

    #[error("Unknown profile{}: {message}", format_context(.context))]
    UnknownProfile { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Named constraint profiles.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WrappersConfig {
    pub ranges: HashMap<String, BoundsConfig>,
    pub min_lengths: HashMap<String, usize>,
}

/// Inclusive integer bounds of a [`Constrained`] profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BoundsConfig {
    pub lower: i64,
    pub upper: i64,
}

impl BoundsConfig {
    /// Builds a wrapper holding `initial` within these bounds.
    ///
    /// # Errors
    /// * [`WrapperError::InvalidRange`] If `lower > upper`.
    pub fn build(self, initial: i64) -> Result<Constrained<i64>, WrapperError> {
        Constrained::new(initial, self.lower, self.upper)
    }
}

impl WrappersConfig {
    /// Builds a [`Constrained`] from the range profile labelled by `profile`.
    ///
    /// # Errors
    /// * [`ConfigError::UnknownProfile`] If no range is configured under that label.
    /// * [`ConfigError::InvalidProfile`] If the configured bounds are inverted.
    pub fn constrained<E: EnumKey>(&self, profile: E, initial: i64) -> Result<Constrained<i64>, ConfigError> {
        let label = profile.label();
        let bounds = self.ranges.get_by(profile).ok_or_else(|| unknown(label))?;
        bounds.build(initial).context(label)
    }

    /// Builds a [`MinLength`] from the minimum-length profile labelled by `profile`.
    ///
    /// # Errors
    /// * [`ConfigError::UnknownProfile`] If no minimum length is configured under that label.
    pub fn min_length<E: EnumKey>(&self, profile: E, initial: impl Into<String>) -> Result<MinLength, ConfigError> {
        let label = profile.label();
        let min = self.min_lengths.get_by(profile).ok_or_else(|| unknown(label))?;
        Ok(MinLength::new(initial, *min))
    }
}

fn unknown(label: &'static str) -> ConfigError {
    ConfigError::UnknownProfile { message: Cow::Borrowed(label), context: None }
}

/// Loads a configuration structure from a file, overlaid with `TETHER__*` environment variables.
///
/// 1. **Base File**: the file at `path`, or `tether` in the working directory. The format is
///    picked from the extension (`tether.toml`, `tether.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `TETHER__`; nested keys use double
///    underscores (`TETHER__RANGES__SCORE__UPPER` maps to `ranges.score.upper`).
///
/// # Errors
/// * [`ConfigError::Config`] If the file is missing or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use tether::config::{WrappersConfig, load_config};
///
/// let cfg: WrappersConfig = load_config(Some("config/tether.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process environment
/// when given.
///
/// # Errors
/// * [`ConfigError::Config`] If the file is missing or the merged values do not fit `T`.
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from(DEFAULT_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder().add_source(File::from(effective_path.as_path()).required(true)).add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .convert_case(config::Case::Snake)
            .try_parsing(true)
            .source(env),
    );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
