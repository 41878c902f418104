//! Attendance sheet service.

use super::list_records;
use crate::model::attendance::{rounded_percentage, AttendanceRecord, ELIGIBILITY_THRESHOLD};
use crate::store::{KeyValueStore, LatencyClass, LocalStore, StoreResult};

pub struct AttendanceService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> AttendanceService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> StoreResult<Vec<AttendanceRecord>> {
        self.store.simulate(LatencyClass::Standard);
        list_records(self.store)
    }

    /// Attendance across all subjects, weighted by class count.
    pub fn overall_percentage(&self) -> StoreResult<u32> {
        Ok(overall_percentage(&self.list()?))
    }

    /// Whether overall attendance falls under the eligibility threshold.
    pub fn needs_warning(&self) -> StoreResult<bool> {
        Ok(self.overall_percentage()? < ELIGIBILITY_THRESHOLD)
    }
}

/// Sums attended and held classes across `records`; `0` for no records.
pub fn overall_percentage(records: &[AttendanceRecord]) -> u32 {
    let (attended, total) = records.iter().fold((0u32, 0u32), |(attended, total), record| {
        (
            attended.saturating_add(record.attended_classes),
            total.saturating_add(record.total_classes),
        )
    });
    rounded_percentage(attended, total)
}
