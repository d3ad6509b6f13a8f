use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank credentials in `.env` templates count as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("MINPAKU_LOG_LEVEL", "info");
    let user_agent = or_default(
        "MINPAKU_USER_AGENT",
        "MinpakuZoneChecker/1.0 (+https://github.com/ao-magicianED/minpaku-zone-checker)",
    );
    let google_maps_api_key = optional("GOOGLE_MAPS_API_KEY");
    let reinfolib_api_key = optional("REINFOLIB_API_KEY");

    let geocode_timeout_secs = parse_u64("MINPAKU_GEOCODE_TIMEOUT_SECS", "6")?;
    let geocode_inter_request_delay_ms =
        parse_u64("MINPAKU_GEOCODE_INTER_REQUEST_DELAY_MS", "1100")?;
    let zoning_timeout_secs = parse_u64("MINPAKU_ZONING_TIMEOUT_SECS", "8")?;

    let nominatim_base_url = or_default(
        "MINPAKU_NOMINATIM_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let google_geocode_base_url = or_default(
        "MINPAKU_GOOGLE_GEOCODE_BASE_URL",
        "https://maps.googleapis.com",
    );
    let reinfolib_base_url = or_default(
        "MINPAKU_REINFOLIB_BASE_URL",
        "https://www.reinfolib.mlit.go.jp",
    );

    Ok(AppConfig {
        log_level,
        user_agent,
        google_maps_api_key,
        reinfolib_api_key,
        geocode_timeout_secs,
        geocode_inter_request_delay_ms,
        zoning_timeout_secs,
        nominatim_base_url,
        google_geocode_base_url,
        reinfolib_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
