use async_trait::async_trait;
use lotaya_core::{GenerationRecord, TerminalState};
use redis::AsyncCommands;
use uuid::Uuid;

use crate::{GenerationStore, StoreError};

/// Generation store backed by Redis
///
/// Each record is one JSON document at `{prefix}:{id}`. Connections are
/// opened per call; the client itself never dials at construction time,
/// so a down store does not block startup.
pub struct RedisStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisStore {
    /// Create a new Redis-backed store
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is malformed
    pub fn new(url: &str, key_prefix: String) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::Backend(format!("invalid store URL: {e}")))?;

        Ok(Self { client, key_prefix })
    }

    fn key(&self, id: Uuid) -> String {
        format!("{}:{id}", self.key_prefix)
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Backend(format!("connection failed: {e}")))
    }

    fn encode(record: &GenerationRecord) -> Result<String, StoreError> {
        serde_json::to_string(record).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> Result<GenerationRecord, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl GenerationStore for RedisStore {
    async fn create(&self, record: &GenerationRecord) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let document = Self::encode(record)?;

        // SET NX: nil reply means the key was already present
        let reply: Option<String> = redis::cmd("SET")
            .arg(self.key(record.generation_id))
            .arg(document)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Backend(format!("SET failed: {e}")))?;

        if reply.is_none() {
            return Err(StoreError::DuplicateId(record.generation_id));
        }

        Ok(())
    }

    async fn update_terminal(&self, id: Uuid, terminal: TerminalState) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let key = self.key(id);

        let raw: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| StoreError::Backend(format!("GET failed: {e}")))?;

        let Some(raw) = raw else {
            tracing::debug!(%id, "terminal update for an unknown record ignored");
            return Ok(());
        };

        let mut record = Self::decode(&raw)?;
        if !record.apply_terminal(terminal) {
            tracing::debug!(%id, "terminal update on an already-terminal record ignored");
            return Ok(());
        }

        let document = Self::encode(&record)?;
        let () = conn
            .set(&key, document)
            .await
            .map_err(|e| StoreError::Backend(format!("SET failed: {e}")))?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<GenerationRecord>, StoreError> {
        let mut conn = self.connection().await?;

        let raw: Option<String> = conn
            .get(self.key(id))
            .await
            .map_err(|e| StoreError::Backend(format!("GET failed: {e}")))?;

        raw.as_deref().map(Self::decode).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_rejected() {
        assert!(RedisStore::new("not-a-url", "lotaya:generation".to_owned()).is_err());
    }

    #[test]
    fn keys_carry_the_prefix() {
        let store = RedisStore::new("redis://localhost:6379", "lotaya:generation".to_owned()).unwrap();
        let id = Uuid::new_v4();
        assert_eq!(store.key(id), format!("lotaya:generation:{id}"));
    }
}
