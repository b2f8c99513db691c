use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use lotaya_core::{GenerationRecord, TerminalState};
use uuid::Uuid;

use crate::{GenerationStore, StoreError};

/// In-process generation store backed by a concurrent map
///
/// Default backend when no store URL is configured. Records do not
/// survive a process restart.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<Uuid, GenerationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenerationStore for MemoryStore {
    async fn create(&self, record: &GenerationRecord) -> Result<(), StoreError> {
        match self.records.entry(record.generation_id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId(record.generation_id)),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }

    async fn update_terminal(&self, id: Uuid, terminal: TerminalState) -> Result<(), StoreError> {
        match self.records.get_mut(&id) {
            Some(mut record) => {
                if !record.apply_terminal(terminal) {
                    tracing::debug!(%id, "terminal update on an already-terminal record ignored");
                }
                Ok(())
            }
            None => {
                tracing::debug!(%id, "terminal update for an unknown record ignored");
                Ok(())
            }
        }
    }

    async fn find(&self, id: Uuid) -> Result<Option<GenerationRecord>, StoreError> {
        Ok(self.records.get(&id).map(|record| record.value().clone()))
    }
}
