//! Server config loader (strict parsing).

pub mod schema;

use std::env::{self, VarError};
use std::fs;
use std::io::ErrorKind;

use tally_core::error::{Result, TallyError};

pub use schema::{CounterSection, ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TALLY_CONFIG";

/// Config path used when `TALLY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TallyError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| TallyError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, or built-in defaults when that file does not exist.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "no config file, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(TallyError::Internal(format!("read config failed ({path}): {e}"))),
    }
}

/// Resolve config from `TALLY_CONFIG`, falling back to `tally.yaml`.
///
/// A missing default file yields built-in defaults; a missing file that was
/// named explicitly is an error.
pub fn load_from_env() -> Result<ServerConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(VarError::NotPresent) => load_or_default(DEFAULT_CONFIG_PATH),
        Err(VarError::NotUnicode(raw)) => Err(TallyError::BadConfig(format!(
            "{CONFIG_ENV} is not valid unicode: {raw:?}"
        ))),
    }
}
