//! Error taxonomy for a bot run.
//!
//! Only setup and delivery failures ever reach `main`. Search failures are
//! absorbed per query by the collector, and an unparsable publish date is a
//! plain `false` from the recency filter rather than an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// A required credential was absent or blank.
    #[error("missing credential: {0} (set the flag or environment variable)")]
    MissingCredential(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search API answered a query with a non-success status.
    #[error("search API returned status {status} for query {query:?}")]
    SearchStatus { query: String, status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("delivery failed: {0}")]
    Delivery(String),
}
