use std::env;
use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use senusa_vep::consts::{DEFAULT_VEP_API, MAX_CHUNK_SIZE};

/// Environment variable name for setting the annotation endpoint.
///
/// ```bash
/// export SENUSA_VEP_API=https://grch37.rest.ensembl.org/vep/human/region/
/// ```
pub const VEP_API_ENV: &str = "SENUSA_VEP_API";

/// Optional settings file of the `annotate` subcommand.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Settings {
    pub api: Option<String>,
    pub chunk_size: Option<usize>,
}

impl Settings {
    ///
    /// Read settings from a TOML file.
    ///
    /// # Arguments
    /// - path: Path to the config file (a .toml) file.
    pub fn try_from(path: &Path) -> Result<Settings> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: Settings = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(settings)
    }
}

/// Get default annotation endpoint from environment variable
///
/// # Returns
/// - endpoint url
pub fn get_default_vep_api() -> String {
    env::var(VEP_API_ENV).unwrap_or_else(|_| DEFAULT_VEP_API.to_string())
}

/// Endpoint precedence: command line, then config file, then environment, then Ensembl.
pub fn resolve_endpoint(flag: Option<String>, settings: &Settings) -> String {
    flag.or_else(|| settings.api.clone())
        .unwrap_or_else(get_default_vep_api)
}

/// Chunk size precedence: command line, then config file, then the service limit.
pub fn resolve_chunk_size(flag: Option<usize>, settings: &Settings) -> usize {
    flag.or(settings.chunk_size).unwrap_or(MAX_CHUNK_SIZE)
}
