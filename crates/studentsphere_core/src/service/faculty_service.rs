use super::list_records;
use crate::model::faculty::FacultyMember;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};

/// Read-only faculty directory.
pub struct FacultyService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> FacultyService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<FacultyMember>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }
}
