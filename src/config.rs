//! Application configuration loaded from environment variables.
//!
//! API credentials are deliberately not part of [`Config`]: they are read
//! per command invocation through a [`crate::credentials::CredentialProvider`].

use std::env;

/// Default osu! API v2 base URL.
pub const OSU_API_BASE: &str = "https://osu.ppy.sh/api/v2";
/// Default osu! OAuth token endpoint.
pub const OSU_TOKEN_URL: &str = "https://osu.ppy.sh/oauth/token";
/// Default ScoreSaber API base URL.
pub const SCORESABER_API_BASE: &str = "https://scoresaber.com/api";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Shared secret the chat host presents as a bearer token
    pub command_token: String,
    /// osu! API v2 base URL
    pub osu_api_base: String,
    /// osu! OAuth token endpoint
    pub osu_token_url: String,
    /// ScoreSaber API base URL
    pub scoresaber_api_base: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            command_token: "test_command_token".to_string(),
            osu_api_base: OSU_API_BASE.to_string(),
            osu_token_url: OSU_TOKEN_URL.to_string(),
            scoresaber_api_base: SCORESABER_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            command_token: env::var("COMMAND_TOKEN")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("COMMAND_TOKEN"))?,
            osu_api_base: base_url("OSU_API_BASE", OSU_API_BASE),
            osu_token_url: base_url("OSU_TOKEN_URL", OSU_TOKEN_URL),
            scoresaber_api_base: base_url("SCORESABER_API_BASE", SCORESABER_API_BASE),
        })
    }
}

/// Read an optional URL override, without a trailing slash.
fn base_url(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
