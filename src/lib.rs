//! FerrumKV - A minimal in-memory key-value store served over HTTP
//!
//! FerrumKV is split into small, loosely coupled modules:
//! - `store` owns the data and knows nothing about HTTP
//! - `web` maps HTTP verbs and paths to store operations
//! - `config` resolves listen address and log settings

pub mod config;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use store::{MemoryStore, Store, StoreError};
