#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    config::GradingConfig,
    grade::{FieldErrors, GradeForm},
    present,
    store::RecordStore,
    types::{StudentId, StudentRecord},
};

/// One user's working session: the grading scale plus the records entered so
/// far. Every action runs to completion before the next one starts.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Grading scale used for validation and classification.
    config: GradingConfig,
    /// Records entered in this session.
    store:  RecordStore,
}

impl Session {
    /// Starts an empty session using `config`.
    pub fn new(config: GradingConfig) -> Self {
        Self {
            config,
            store: RecordStore::new(),
        }
    }

    /// Validates `form` and, if it is acceptable, stores the resulting record
    /// at the top of the list. On failure the store is left untouched.
    pub fn submit(&mut self, form: &GradeForm) -> Result<&StudentRecord, FieldErrors> {
        let input = match form.validate(&self.config) {
            Ok(input) => input,
            Err(errors) => {
                tracing::debug!("Rejected submission: {errors}");
                return Err(errors);
            }
        };

        let record = self.store.add(input);
        tracing::info!(
            "Recorded {} ({}) with final average {}",
            record.name(),
            record.id(),
            record.final_average()
        );
        Ok(record)
    }

    /// Removes the record with identifier `id`, if it exists.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            tracing::info!("Removed record {id}");
        } else {
            tracing::debug!("No record with id {id}; nothing removed");
        }
        removed
    }

    /// Grading scale of this session.
    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Records of this session.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Records in display order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &StudentRecord> + '_ {
        self.store.list()
    }

    /// The results table as shown in the terminal.
    pub fn render(&self) -> String {
        present::render_records(self.store.list(), &self.config)
    }

    /// The records as a JSON array.
    pub fn render_json(&self) -> serde_json::Result<String> {
        present::render_json(self.store.list(), &self.config)
    }
}
