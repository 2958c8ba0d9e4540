//! Documentation query client library (config, HTTP payloads, query client).
//! Used by the `doc-query` command-line binary.

pub mod client;
pub mod config;
pub mod messages;

pub use client::{Client, QueryError, DEFAULT_TIMEOUT};
pub use config::{default_config_path, Config, ConfigError, ServerSection};
