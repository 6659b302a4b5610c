use std::env;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_PROXY_LIST_URL: &str =
    "http://pubproxy.com/api/proxy?https=true&country=US,CA&type=http";

/// Settings resolved once at startup and handed to each stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_url: Url,
    pub model: String,
    pub proxy_list_url: Url,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let api_url = get("OPENAI_API_URL").ok_or(ConfigError::Missing("OPENAI_API_URL"))?;
        let openai_api_url = parse_http_url("OPENAI_API_URL", &api_url)?;

        let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let proxy_list_url = match get("PROXY_LIST_URL") {
            Some(url) => parse_http_url("PROXY_LIST_URL", &url)?,
            None => parse_http_url("PROXY_LIST_URL", DEFAULT_PROXY_LIST_URL)?,
        };

        Ok(Config {
            openai_api_key,
            openai_api_url,
            model,
            proxy_list_url,
        })
    }
}

fn parse_http_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("unsupported scheme {other}"),
        }),
    }
}
