//! Persistence for generation records
//!
//! One JSON document per generation, keyed by id. Two backends: an
//! in-process map for deployments without a store (and for tests), and
//! Redis for durable deployments. Connections are established lazily so
//! an unreachable store never prevents the gateway from starting.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;
use lotaya_core::{GenerationRecord, TerminalState};
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this id already exists
    #[error("a record with id {0} already exists")]
    DuplicateId(Uuid),
    /// Backend connection or command error
    #[error("store backend: {0}")]
    Backend(String),
    /// Record serialization error
    #[error("serialization: {0}")]
    Serialization(String),
}

/// Persistence contract for generation records
///
/// `create` inserts exactly once per id; `update_terminal` applies a
/// terminal outcome to the stored document (a no-op when the record is
/// already terminal or was never persisted); `find` is a point lookup.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    async fn create(&self, record: &GenerationRecord) -> Result<(), StoreError>;

    async fn update_terminal(&self, id: Uuid, terminal: TerminalState) -> Result<(), StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<GenerationRecord>, StoreError>;
}

/// Build the configured store backend
///
/// # Errors
///
/// Returns an error when the configured connection string is malformed.
/// An unreachable (but well-formed) store is not an error here; failures
/// surface per-operation.
pub fn from_config(config: &lotaya_config::StoreConfig) -> Result<Arc<dyn GenerationStore>, StoreError> {
    match config.url() {
        Some(url) => {
            let store = RedisStore::new(url, config.key_prefix.clone())?;
            tracing::info!("using redis generation store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("no store configured, generation records are held in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
