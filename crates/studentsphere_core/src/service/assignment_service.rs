//! Assignment use-case service.

use super::{list_records, replace_record, ServiceResult};
use crate::model::assignment::Assignment;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};
use log::info;

pub struct AssignmentService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> AssignmentService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Assignment>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    /// Replaces the assignment with the same id, keeping its position.
    pub fn update(&self, assignment: Assignment) -> ServiceResult<()> {
        self.store.simulate(LatencyClass::Standard);
        let assignment_id = assignment.id.clone();
        let status = assignment.status;
        replace_record(self.store, assignment)?;
        info!(
            "event=assignment_update module=service status=ok assignment_id={} assignment_status={:?}",
            assignment_id, status
        );
        Ok(())
    }

    /// Applies the completion toggle to `assignment` and persists it.
    ///
    /// Returns the stored copy.
    pub fn toggle_status(&self, assignment: &Assignment) -> ServiceResult<Assignment> {
        let toggled = assignment.with_toggled_status();
        self.update(toggled.clone())?;
        Ok(toggled)
    }

    /// Number of assignments not yet completed.
    pub fn pending_count(&self) -> StoreResult<usize> {
        Ok(self
            .list()?
            .iter()
            .filter(|assignment| !assignment.status.is_completed())
            .count())
    }
}
