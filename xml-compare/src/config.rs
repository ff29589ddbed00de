use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;
use xml_compare_core::{UniquePathOptions, DEFAULT_MAX_TEXT_LEN};

/// Comparison settings as written in a TOML file. Absent keys keep the
/// value of the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub attributes: Option<Vec<String>>,
    pub max_text_len: Option<usize>,
}

/// Errors returned when loading or validating comparison settings.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid comparison settings: {0}")]
    Invalid(String),
}

/// Load comparison settings from a TOML file.
pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&raw, path.display().to_string())
}

/// Built-in settings.
pub fn default_options() -> UniquePathOptions {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml"));
    match parse_config(embedded, "embedded config".to_string()) {
        Ok(file) => apply(fallback_options(), &file),
        Err(_) => fallback_options(),
    }
}

/// Resolve the options for one run: built-in settings, then `config_path`,
/// then command-line overrides. An empty `attributes` slice keeps the
/// configured list.
pub fn resolve_options(
    config_path: Option<&Path>,
    attributes: &[String],
    max_text_len: Option<usize>,
) -> Result<UniquePathOptions, ConfigLoadError> {
    let mut opts = default_options();

    if let Some(path) = config_path {
        let file = load_config(path)?;
        debug!("loaded comparison settings from {}", path.display());
        opts = apply(opts, &file);
    }

    let overrides = ConfigFile {
        attributes: (!attributes.is_empty()).then(|| attributes.to_vec()),
        max_text_len,
    };
    opts = apply(opts, &overrides);

    validate(&opts)?;
    Ok(opts)
}

fn parse_config(raw: &str, path: String) -> Result<ConfigFile, ConfigLoadError> {
    toml::from_str(raw).map_err(|source| ConfigLoadError::Parse { path, source })
}

fn apply(mut opts: UniquePathOptions, file: &ConfigFile) -> UniquePathOptions {
    if let Some(attributes) = &file.attributes {
        opts.attributes = attributes.clone();
    }
    if let Some(max_text_len) = file.max_text_len {
        opts.max_text_len = max_text_len;
    }
    opts
}

fn validate(opts: &UniquePathOptions) -> Result<(), ConfigLoadError> {
    if opts.max_text_len == 0 {
        return Err(ConfigLoadError::Invalid(
            "max_text_len must be at least 1".to_string(),
        ));
    }
    if opts.attributes.iter().any(|name| name.trim().is_empty()) {
        return Err(ConfigLoadError::Invalid(
            "attribute names must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn fallback_options() -> UniquePathOptions {
    UniquePathOptions {
        attributes: [
            "name",
            "simpleValue",
            "os",
            "value",
            "collectionName",
            "methodContext",
            "identity",
            "interfaceType",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
        max_text_len: DEFAULT_MAX_TEXT_LEN,
    }
}
