use super::list_records;
use crate::model::achievement::Achievement;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};

pub struct AchievementService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> AchievementService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Achievement>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }
}
