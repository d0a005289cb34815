// Session-scoped in-memory collection store

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Notification, ReadState};
use crate::record::Record;

/// Ordered collection of records owned by one screen's session.
///
/// There is no persistence: the store is seeded on screen mount and dropped on
/// teardown. Each screen owns its own instance, so collections never alias
/// across screens. All operations run to completion on the caller's thread.
#[derive(Debug)]
pub struct Store<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Store<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Create a store from seed data, checking id uniqueness
    pub fn seeded(records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            validate_id(record.id())?;
            if !seen.insert(record.id().to_string()) {
                return Err(Error::DuplicateId {
                    id: record.id().to_string(),
                });
            }
        }
        debug!(count = records.len(), "seeded store");
        Ok(Self { records })
    }

    /// Current collection in insertion order
    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    /// Atomically swap the held collection for a new one.
    ///
    /// Used to install the output of a filter or toggle transformation.
    pub fn replace(&mut self, records: Vec<T>) {
        debug!(old = self.records.len(), new = records.len(), "replacing collection");
        self.records = records;
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a new record, rejecting invalid or duplicate ids
    pub fn create(&mut self, record: T) -> Result<String> {
        let id = record.id().to_string();
        validate_id(&id)?;
        if self.get(&id).is_some() {
            return Err(Error::DuplicateId { id });
        }
        self.records.push(record);
        Ok(id)
    }

    /// Remove a record permanently for the session
    pub fn remove(&mut self, id: &str) -> Result<T> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;
        Ok(self.records.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Store<Notification> {
    /// Mark one notification as read; already-read targets are a no-op
    pub fn mark_read(&mut self, id: &str) -> Result<()> {
        let notification = self
            .records
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;
        notification.read_state = ReadState::Read;
        Ok(())
    }

    /// Mark every notification as read
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.records {
            notification.read_state = ReadState::Read;
        }
    }

    /// Number of unread notifications, shown as the badge count
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|n| n.is_unread()).count()
    }
}

/// Validate record ID
fn validate_id(id: &str) -> Result<()> {
    // Check not empty or whitespace-only
    if id.trim().is_empty() {
        return Err(Error::InvalidId {
            reason: "id cannot be empty or whitespace-only".to_string(),
        });
    }

    // Check reasonable length (prevent huge IDs)
    if id.len() > 256 {
        return Err(Error::InvalidId {
            reason: format!("id too long: {} chars (max 256)", id.len()),
        });
    }

    Ok(())
}
