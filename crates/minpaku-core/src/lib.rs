mod app_config;
mod config;
pub mod zoning_types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use zoning_types::{
    external_map_url, zoning_by_code, zoning_by_name, PermitStatus, ZoningCategory,
    ZONING_CATEGORIES,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
