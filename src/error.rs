use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Proxy unavailable: {0}")]
    ProxyUnavailable(#[from] ProxyError),

    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    #[error("Completion request failed: {0}")]
    CompletionRequest(#[from] CompletionError),

    #[error("Failed to persist result: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("URL cannot be empty. Please provide a valid URL")]
    EmptyUrl,

    #[error("error reading input: {0}")]
    Read(#[from] io::Error),

    #[error("{0}")]
    Template(#[from] TemplateError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("instruction contains {count} `{{content}}` placeholders, expected at most one")]
    TooManyPlaceholders { count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("failed to fetch proxy list: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to parse proxy list: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("no proxy found in response")]
    Empty,

    #[error("failed to set proxy {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { status: StatusCode, url: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("failed to marshal JSON payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("received non-OK response status: {status}, body: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to unmarshal response: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unexpected format for {field}: {found}")]
    Shape { field: &'static str, found: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to create file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write data to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
