//! Application configuration.
//!
//! Layering, lowest precedence first:
//!
//! 1. the config file (JSON, or YAML for `.yaml`/`.yml`)
//! 2. `CONSENT_*` environment variables, `__` separating nested keys
//!    (`CONSENT_FILTER__QUERY_PURPOSE=billing`)
//! 3. command-line overrides
//!
//! A file without a `filter` section is read as a complete flat parameter
//! file. It becomes the `filter` section under the English key names, so
//! environment variables override it like any other file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use consent_filter::ConsentFilterConfig;
use csv_store_plugin::CsvStorePluginConfig;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Yaml};
use serde::Deserialize;

const ENV_PREFIX: &str = "CONSENT_";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub filter: ConsentFilterConfig,

    #[serde(default)]
    pub csv_store: CsvStorePluginConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values taken from the command line that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub query_purpose: Option<String>,
    pub output_path: Option<PathBuf>,
}

/// Load the layered configuration rooted at `path`.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, or if the merged layers do
/// not form a valid [`AppConfig`].
pub fn load(path: &Path, overrides: &Overrides) -> anyhow::Result<AppConfig> {
    load_with_env(path, overrides, Env::prefixed(ENV_PREFIX).split("__"))
}

fn load_with_env(path: &Path, overrides: &Overrides, env: Env) -> anyhow::Result<AppConfig> {
    if !path.is_file() {
        bail!("config file {} does not exist", path.display());
    }

    let mut figment = file_figment(path);
    if figment.find_value("filter").is_err() {
        let flat: ConsentFilterConfig = figment
            .extract()
            .with_context(|| format!("invalid flat parameter file {}", path.display()))?;
        figment = Figment::from(Serialized::default("filter", flat));
    }

    let mut config: AppConfig = figment
        .merge(env)
        .extract()
        .with_context(|| format!("invalid configuration in {}", path.display()))?;

    if let Some(purpose) = &overrides.query_purpose {
        config.filter.query_purpose.clone_from(purpose);
    }
    if let Some(output) = &overrides.output_path {
        config.filter.output_path.clone_from(output);
    }
    Ok(config)
}

fn file_figment(path: &Path) -> Figment {
    match path.extension().and_then(OsStr::to_str) {
        Some("yaml" | "yml") => Figment::from(Yaml::file(path)),
        _ => Figment::from(Json::file(path)),
    }
}
