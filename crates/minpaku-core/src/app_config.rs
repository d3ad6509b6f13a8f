#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub user_agent: String,
    /// Primary (Google) geocoding credential. `None` selects Nominatim.
    pub google_maps_api_key: Option<String>,
    pub reinfolib_api_key: Option<String>,
    pub geocode_timeout_secs: u64,
    pub geocode_inter_request_delay_ms: u64,
    pub zoning_timeout_secs: u64,
    pub nominatim_base_url: String,
    pub google_geocode_base_url: String,
    pub reinfolib_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "reinfolib_api_key",
                &self.reinfolib_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field(
                "geocode_inter_request_delay_ms",
                &self.geocode_inter_request_delay_ms,
            )
            .field("zoning_timeout_secs", &self.zoning_timeout_secs)
            .field("nominatim_base_url", &self.nominatim_base_url)
            .field("google_geocode_base_url", &self.google_geocode_base_url)
            .field("reinfolib_base_url", &self.reinfolib_base_url)
            .finish()
    }
}
