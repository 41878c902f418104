//! Client-side record id generation.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues timestamp-based ids (epoch milliseconds as decimal strings).
///
/// Ids from one generator are strictly increasing, so records created in the
/// same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&self) -> String {
        self.next_millis().to_string()
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IdGenerator;

    #[test]
    fn ids_are_strictly_increasing_within_one_millisecond() {
        let ids = IdGenerator::new();
        let values: Vec<i64> = (0..100)
            .map(|_| ids.next_id().parse::<i64>().expect("numeric id"))
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
