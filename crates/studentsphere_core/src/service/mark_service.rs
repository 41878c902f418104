use super::list_records;
use crate::model::mark::Mark;
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};

/// Read-only access to marks.
pub struct MarkService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> MarkService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<Mark>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    /// Mean raw score rounded to one decimal; `None` without marks.
    pub fn average_score(&self) -> StoreResult<Option<f64>> {
        Ok(average_score(&self.list()?))
    }
}

pub fn average_score(marks: &[Mark]) -> Option<f64> {
    if marks.is_empty() {
        return None;
    }
    let sum: f64 = marks.iter().map(|mark| mark.score).sum();
    let mean = sum / marks.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
