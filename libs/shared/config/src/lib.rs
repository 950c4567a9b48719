use std::env;

use chrono_tz::Tz;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ZOOM_OAUTH_URL: &str = "https://zoom.us/oauth/token";
pub const DEFAULT_ZOOM_API_BASE_URL: &str = "https://api.zoom.us/v2";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_TIME_ZONE: &str = "America/Guayaquil";
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const REQUIRED_VARS: [&str; 5] = [
    "CLIENT_ID",
    "CLIENT_SECRET",
    "ACCOUNT_ID",
    "EMAIL_SERVICE_USER",
    "EMAIL_SERVICE_PASS",
];

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub zoom_client_id: String,
    pub zoom_client_secret: String,
    pub zoom_account_id: String,
    pub zoom_oauth_url: String,
    pub zoom_api_base_url: String,
    pub email_service_user: String,
    pub email_service_pass: String,
    pub smtp_host: String,
    pub default_time_zone: Tz,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let required = |key: &str| get(key).unwrap_or_default();
        let optional = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                debug!("{} not set, using default {}", key, default);
                default.to_string()
            })
        };

        let time_zone_name = optional("DEFAULT_TIME_ZONE", DEFAULT_TIME_ZONE);
        let default_time_zone = time_zone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "DEFAULT_TIME_ZONE",
                value: time_zone_name.clone(),
            })?;

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let max_body_bytes = match get("MAX_BODY_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue { name: "MAX_BODY_BYTES", value })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            zoom_client_id: required("CLIENT_ID"),
            zoom_client_secret: required("CLIENT_SECRET"),
            zoom_account_id: required("ACCOUNT_ID"),
            zoom_oauth_url: optional("ZOOM_OAUTH_URL", DEFAULT_ZOOM_OAUTH_URL),
            zoom_api_base_url: optional("ZOOM_API_BASE_URL", DEFAULT_ZOOM_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            email_service_user: required("EMAIL_SERVICE_USER"),
            email_service_pass: required("EMAIL_SERVICE_PASS"),
            smtp_host: optional("SMTP_HOST", DEFAULT_SMTP_HOST),
            default_time_zone,
            port,
            max_body_bytes,
        })
    }
}
