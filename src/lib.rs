pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod proxy;
pub mod scraper;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{ExtractedContent, ProxyCandidate, ScrapeRequest};
pub use pipeline::run;
pub use prompt::PromptTemplate;
