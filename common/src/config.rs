//! Service configuration

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use figment::{
    providers::{Env, Format as _, Toml},
    Figment,
};
use fs_err as fs;
use serde::Deserialize;

use crate::BoxError;

/// Address the API binds to when the config file does not name one.
pub const DEFAULT_API_ADDR: &str = "0.0.0.0:8111";

/// Runtime configuration for the service.
///
/// The data directories are not required to exist at load time: a missing
/// directory is listed as empty rather than treated as a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the source IFC files.
    pub ifc_dir: PathBuf,
    /// Directory holding the converted fragment files.
    pub fragments_dir: PathBuf,
    /// Address to bind the API server to.
    pub api_addr: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    ifc_dir: PathBuf,
    fragments_dir: PathBuf,
    api_addr: Option<SocketAddr>,
}

impl Config {
    /// Loads the configuration from a TOML file. Env vars prefixed with
    /// `FRAGSERVE_CONFIG_` override config values.
    pub fn load(file: impl Into<PathBuf>) -> Result<Self, BoxError> {
        let config_path: PathBuf = fs::canonicalize(file.into())?;
        let contents = fs::read_to_string(&config_path)?;

        let config_file: ConfigFile = Figment::new()
            .merge(Toml::string(&contents))
            .merge(Env::prefixed("FRAGSERVE_CONFIG_"))
            .extract()?;

        // Resolve the data directories relative to the directory of the config file.
        let base = config_path.parent();
        Ok(Self {
            ifc_dir: resolve(config_file.ifc_dir, base),
            fragments_dir: resolve(config_file.fragments_dir, base),
            api_addr: match config_file.api_addr {
                Some(addr) => addr,
                None => DEFAULT_API_ADDR.parse()?,
            },
        })
    }
}

fn resolve(dir: PathBuf, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if dir.is_relative() => base.join(dir),
        _ => dir,
    }
}
