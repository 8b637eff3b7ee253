//! In-memory backend: the pluggable-store seam for embedding and tests.

use crate::models::event::PunchEvent;
use crate::store::{EventStore, PunchPatch, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<PunchEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryStore {
    fn append(&mut self, event: &PunchEvent) -> Result<(), StoreError> {
        if self.events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::DuplicateId(event.id.clone()));
        }
        self.events.push(event.clone());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<PunchEvent>, StoreError> {
        Ok(self.events.clone())
    }

    fn update_by_id(&mut self, id: &str, patch: &PunchPatch) -> Result<(), StoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(dev) = patch.deviation_min {
            event.deviation_min = dev;
        }
        if let Some(note) = &patch.note {
            event.note = note.clone();
        }
        Ok(())
    }
}
