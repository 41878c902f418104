//! Simulated storage latency.
//!
//! Every store call in the portal pauses for a fixed delay so loading states
//! can be exercised. The delay never affects results.

use std::time::Duration;

/// Delay bucket a service call falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyClass {
    /// Plain reads and single-record writes.
    Standard,
    /// Profile writes and student lookups.
    Extended,
    /// Bulk imports and contact submissions.
    Bulk,
}

/// Per-class simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub standard: Duration,
    pub extended: Duration,
    pub bulk: Duration,
}

impl LatencyProfile {
    /// No delay at all. Used by tests and batch tooling.
    pub const fn disabled() -> Self {
        Self {
            standard: Duration::ZERO,
            extended: Duration::ZERO,
            bulk: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, class: LatencyClass) -> Duration {
        match class {
            LatencyClass::Standard => self.standard,
            LatencyClass::Extended => self.extended,
            LatencyClass::Bulk => self.bulk,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.standard.is_zero() && self.extended.is_zero() && self.bulk.is_zero()
    }

    /// Blocks the current thread for the class delay.
    pub fn pause(&self, class: LatencyClass) {
        let delay = self.delay_for(class);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            standard: Duration::from_millis(200),
            extended: Duration::from_millis(300),
            bulk: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LatencyClass, LatencyProfile};
    use std::time::Duration;

    #[test]
    fn default_profile_spans_200_to_500_ms() {
        let profile = LatencyProfile::default();
        assert_eq!(
            profile.delay_for(LatencyClass::Standard),
            Duration::from_millis(200)
        );
        assert_eq!(
            profile.delay_for(LatencyClass::Extended),
            Duration::from_millis(300)
        );
        assert_eq!(
            profile.delay_for(LatencyClass::Bulk),
            Duration::from_millis(500)
        );
        assert!(!profile.is_disabled());
    }

    #[test]
    fn disabled_profile_has_no_delay() {
        let profile = LatencyProfile::disabled();
        assert!(profile.is_disabled());
        assert_eq!(profile.delay_for(LatencyClass::Bulk), Duration::ZERO);
    }
}
