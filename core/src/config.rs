//! Environment-driven configuration.

use crate::controller::LoadOrdering;
use crate::error::ConfigError;

/// Catalog API root used when `CATALOG_API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.in/api";

pub const BASE_URL_VAR: &str = "CATALOG_API_BASE_URL";
pub const LOAD_ORDERING_VAR: &str = "CATALOG_LOAD_ORDERING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub load_ordering: LoadOrdering,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            load_ordering: LoadOrdering::default(),
        }
    }
}

/// Load configuration from the environment, reading a `.env` file first if
/// one exists.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a variable is set to an
/// unusable value.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Parsing core of [`load_config`], decoupled from the process environment.
fn build_config<F>(lookup: F) -> Result<CatalogConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let set = |var: &str| lookup(var).ok().filter(|v| !v.trim().is_empty());

    let base_url = set(BASE_URL_VAR).map_or_else(
        || DEFAULT_BASE_URL.to_string(),
        |v| v.trim().to_string(),
    );

    let load_ordering = match set(LOAD_ORDERING_VAR) {
        Some(raw) => raw.parse::<LoadOrdering>().map_err(|reason| ConfigError::InvalidEnvVar {
            var: LOAD_ORDERING_VAR.to_string(),
            reason,
        })?,
        None => LoadOrdering::default(),
    };

    Ok(CatalogConfig {
        base_url,
        load_ordering,
    })
}
