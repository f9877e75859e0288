use std::env;
use tracing::warn;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hospital_api_url: String,
    pub hospital_api_key: String,
    pub hospital_id: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            hospital_api_url: env::var("HOSPITAL_API_URL")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_API_URL not set, using empty value");
                    String::new()
                }),
            hospital_api_key: env::var("HOSPITAL_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_API_KEY not set, using empty value");
                    String::new()
                }),
            hospital_id: env::var("HOSPITAL_ID")
                .unwrap_or_else(|_| {
                    warn!("HOSPITAL_ID not set, using empty value");
                    String::new()
                }),
            request_timeout_secs: env::var("HOSPITAL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.hospital_api_url.is_empty()
            && !self.hospital_api_key.is_empty()
            && !self.hospital_id.is_empty()
    }
}
