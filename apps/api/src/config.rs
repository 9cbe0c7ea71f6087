use anyhow::{Context, Result};

use crate::generation::requester::EmptyCompletionPolicy;
use crate::models::letterhead::{
    Letterhead, DEFAULT_ADDRESS, DEFAULT_COMPANY_NAME, DEFAULT_EMAIL, DEFAULT_PHONE,
    DEFAULT_REGISTRATION_ID, DEFAULT_REGISTRATION_LABEL, DEFAULT_WEBSITE,
};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    pub empty_completion_policy: EmptyCompletionPolicy,
    /// Letterhead used when a request does not supply its own.
    pub letterhead: Letterhead,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_LLM_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            empty_completion_policy: std::env::var("EMPTY_COMPLETION_POLICY")
                .ok()
                .map(|v| v.parse::<EmptyCompletionPolicy>())
                .transpose()
                .map_err(anyhow::Error::msg)
                .context("EMPTY_COMPLETION_POLICY is invalid")?
                .unwrap_or_default(),
            letterhead: letterhead_from_env(),
        })
    }

    /// Fixed configuration for unit and HTTP tests.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            openai_api_key: "test-key".to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            empty_completion_policy: EmptyCompletionPolicy::Placeholder,
            letterhead: Letterhead::default(),
        }
    }
}

/// Every letterhead field may be overridden; an empty value removes an
/// optional field from the header.
fn letterhead_from_env() -> Letterhead {
    Letterhead {
        company_name: env_or("LETTERHEAD_COMPANY_NAME", DEFAULT_COMPANY_NAME),
        registration_label: env_or("LETTERHEAD_REGISTRATION_LABEL", DEFAULT_REGISTRATION_LABEL),
        registration_id: optional_env("LETTERHEAD_REGISTRATION_ID", DEFAULT_REGISTRATION_ID),
        phone: optional_env("LETTERHEAD_PHONE", DEFAULT_PHONE),
        website: optional_env("LETTERHEAD_WEBSITE", DEFAULT_WEBSITE),
        email: optional_env("LETTERHEAD_EMAIL", DEFAULT_EMAIL),
        address: optional_env("LETTERHEAD_ADDRESS", DEFAULT_ADDRESS),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str, default: &str) -> Option<String> {
    let value = env_or(key, default);
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
