//! Lab schedule service. Sessions are only ever added.

use super::{list_records, prepend_records, require, ServiceResult};
use crate::model::id::IdGenerator;
use crate::model::lab::LabSession;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};
use log::info;

pub struct LabService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
    ids: &'s IdGenerator,
}

impl<'s, S: KeyValueStore> LabService<'s, S> {
    pub fn new(store: &'s LocalStore<S>, ids: &'s IdGenerator) -> Self {
        Self { store, ids }
    }

    pub fn list(&self) -> StoreResult<Vec<LabSession>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    pub fn add(&self, lab: LabSession) -> StoreResult<()> {
        self.store.simulate(LatencyClass::Standard);
        let lab_id = lab.id.clone();
        prepend_records(self.store, vec![lab])?;
        info!("event=lab_add module=service status=ok lab_id={lab_id}");
        Ok(())
    }

    /// Assigns a fresh id to form input and prepends it.
    ///
    /// Subject and topic are required; the other fields may be blank.
    pub fn create(&self, mut lab: LabSession) -> ServiceResult<LabSession> {
        require("lab session", "subject", &lab.subject)?;
        require("lab session", "topic", &lab.topic)?;
        lab.id = self.ids.next_id();
        self.add(lab.clone())?;
        Ok(lab)
    }
}
