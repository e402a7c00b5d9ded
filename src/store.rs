#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::VecDeque;

use crate::types::{StudentId, StudentRecord, StudentRecordInput};

/// In-memory list of the session's records, most recent first.
///
/// The store is a plain owned value: whoever drives the session holds it and
/// passes it around by reference. Identifiers are unique within a store.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records, newest at the front.
    records: VecDeque<StudentRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `input` under a fresh identifier, ahead of every existing
    /// record, and returns the stored record.
    pub fn add(&mut self, input: StudentRecordInput) -> &StudentRecord {
        let mut id = StudentId::new();
        while self.get(id).is_some() {
            id = StudentId::new();
        }

        self.records.push_front(StudentRecord::new(id, input));
        &self.records[0]
    }

    /// Removes the record with identifier `id`. Unknown identifiers are
    /// ignored; the return value says whether anything was removed.
    pub fn remove(&mut self, id: StudentId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => self.records.remove(index).is_some(),
            None => false,
        }
    }

    /// The records in display order. The iterator borrows the store, so the
    /// store cannot change while it is alive.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &StudentRecord> + '_ {
        self.records.iter()
    }

    /// An owned copy of the records in display order.
    pub fn snapshot(&self) -> Vec<StudentRecord> {
        self.records.iter().cloned().collect()
    }

    /// Looks a record up by identifier.
    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Identifier of the record shown at 1-based `position`.
    pub fn id_at(&self, position: usize) -> Option<StudentId> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .map(StudentRecord::id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
