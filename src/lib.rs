//! Settings and client wiring for a Postgres-backed RAG chat server.
//!
//! Everything the backend's ingestion and query services need to come up:
//! fixed model/chunking parameters, explicit logging initialization, the
//! Postgres connection descriptor, and the Azure OpenAI chat-model handle.

pub mod core;
pub mod db;
pub mod llm;

pub use self::core::error::{Result, SettingsError};
pub use self::core::logging::LogSettings;
pub use self::core::settings::ChunkingSettings;
pub use self::db::postgres::PostgresUrl;
pub use self::llm::azure::AzureChatModel;

/// Model identifier the backend reports for token accounting.
pub const MODEL_NAME: &str = "gpt-3.5-turbo";

/// Characters per chunk when documents are split for indexing.
pub const CHUNK_SIZE: usize = 250;

/// Characters shared between adjacent chunks.
pub const CHUNK_OVERLAP: usize = 0;

/// Max concurrency for the model.
pub const MAX_CONCURRENCY: usize = 1;
