//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOCKROOM_API_URL` - Spreadsheet API base URL (the deployed script's
//!   `/exec` URL; treated as a secret because the deployment ID grants access)
//!
//! ## Optional
//! - `STOCKROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `STOCKROOM_PORT` - Listen port (default: 3001)
//! - `STOCKROOM_API_TIMEOUT_SECS` - Per-request timeout (default: none)
//! - `STOCKROOM_FETCH_POLICY` - `last-response` (default) or `latest-request`
//! - `STOCKROOM_LOG_FORMAT` - `text` (default) or `json`
//! - `STOCKROOM_STATIC_DIR` - Stylesheet directory (default: crates/admin/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)
//!
//! ## Optional (TLS)
//! - `STOCKROOM_TLS_CERT` - PEM-encoded certificate chain
//! - `STOCKROOM_TLS_KEY` - PEM-encoded private key

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use crate::view_state::FetchPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    #[default]
    Text,
    /// One JSON object per event for log shippers.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Spreadsheet API configuration
    pub sheets: SheetsConfig,
    /// How overlapping fetches for the same domain are resolved
    pub fetch_policy: FetchPolicy,
    /// Log output format
    pub log_format: LogFormat,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
    /// TLS configuration for HTTPS (optional)
    pub tls: Option<TlsConfig>,
}

/// Spreadsheet API configuration.
///
/// Implements `Debug` manually to redact the deployment URL.
#[derive(Clone)]
pub struct SheetsConfig {
    /// Base URL every query is sent to
    pub api_url: SecretString,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field("api_url", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// TLS configuration for HTTPS.
#[derive(Clone)]
pub struct TlsConfig {
    /// PEM-encoded certificate chain
    pub cert_pem: String,
    /// PEM-encoded private key
    pub key_pem: SecretString,
}

impl std::fmt::Debug for TlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("cert_pem", &"[CERTIFICATE]")
            .field("key_pem", &"[REDACTED]")
            .finish()
    }
}

impl TlsConfig {
    fn from_lookup(env: &impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let cert_pem = get_optional_env(env, "STOCKROOM_TLS_CERT");
        let key_pem = get_optional_env(env, "STOCKROOM_TLS_KEY");

        match (cert_pem, key_pem) {
            (Some(cert), Some(key)) => Ok(Some(Self {
                cert_pem: cert,
                key_pem: SecretString::from(key),
            })),
            (None, None) => Ok(None),
            _ => Err(ConfigError::InvalidEnvVar(
                "STOCKROOM_TLS_*".to_string(),
                "Both STOCKROOM_TLS_CERT and STOCKROOM_TLS_KEY must be set together".to_string(),
            )),
        }
    }
}

impl SheetsConfig {
    fn from_lookup(env: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = get_required_env(env, "STOCKROOM_API_URL")?;
        validate_api_url(&api_url, "STOCKROOM_API_URL")?;

        let timeout = get_optional_env(env, "STOCKROOM_API_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::InvalidEnvVar("STOCKROOM_API_TIMEOUT_SECS".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            api_url: SecretString::from(api_url),
            timeout,
        })
    }

    /// Parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the configured URL is malformed.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_url.expose_secret())
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_env_or_default(&env, "STOCKROOM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default(&env, "STOCKROOM_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_PORT".to_string(), e.to_string()))?;
        let sheets = SheetsConfig::from_lookup(&env)?;
        let fetch_policy = get_env_or_default(&env, "STOCKROOM_FETCH_POLICY", "last-response")
            .parse::<FetchPolicy>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_FETCH_POLICY".to_string(), e))?;
        let log_format = get_env_or_default(&env, "STOCKROOM_LOG_FORMAT", "text")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_LOG_FORMAT".to_string(), e))?;
        let static_dir = get_env_or_default(&env, "STOCKROOM_STATIC_DIR", "crates/admin/static");
        let sentry_dsn = get_optional_env(&env, "SENTRY_DSN");
        let sentry_environment = get_optional_env(&env, "SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env(&env, "SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env(&env, "SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let tls = TlsConfig::from_lookup(&env)?;

        Ok(Self {
            host,
            port,
            sheets,
            fetch_policy,
            log_format,
            static_dir,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            tls,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required variable; blank values count as missing.
fn get_required_env(env: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    get_optional_env(env, key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional variable; blank values count as unset.
fn get_optional_env(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|v| !v.trim().is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default(env: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional_env(env, key).unwrap_or_else(|| default.to_string())
}

/// Validate that the API URL is an absolute http(s) URL.
fn validate_api_url(raw: &str, var_name: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("scheme must be http or https (got {})", url.scheme()),
        ));
    }
    Ok(())
}
