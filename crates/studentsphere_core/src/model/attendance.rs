//! Per-subject class attendance.
//!
//! The attendance percentage is always derived from the class counts and is
//! never stored.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

/// Minimum percentage for exam eligibility.
pub const ELIGIBILITY_THRESHOLD: u32 = 75;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub subject: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub last_updated: String,
}

/// Attendance band used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStanding {
    /// 85 % and above.
    Excellent,
    /// 75 % up to 85 %.
    Good,
    /// 60 % up to 75 %.
    Warning,
    /// Below 60 %.
    Critical,
}

impl AttendanceStanding {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            85.. => Self::Excellent,
            75..=84 => Self::Good,
            60..=74 => Self::Warning,
            _ => Self::Critical,
        }
    }
}

impl AttendanceRecord {
    /// Rounded attended/total percentage; `0` when no classes were held.
    pub fn percentage(&self) -> u32 {
        rounded_percentage(self.attended_classes, self.total_classes)
    }

    pub fn standing(&self) -> AttendanceStanding {
        AttendanceStanding::from_percentage(self.percentage())
    }

    pub fn is_eligible(&self) -> bool {
        self.percentage() >= ELIGIBILITY_THRESHOLD
    }
}

/// Rounded percentage of `attended` over `total`, half away from zero.
pub fn rounded_percentage(attended: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = u64::from(attended) * 100;
    let total = u64::from(total);
    ((scaled * 2 + total) / (total * 2)) as u32
}

impl Record for AttendanceRecord {
    const COLLECTION_KEY: &'static str = keys::ATTENDANCE;
    const COLLECTION_NAME: &'static str = "attendance";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::attendance()
    }
}

#[cfg(test)]
mod tests {
    use super::{rounded_percentage, AttendanceRecord, AttendanceStanding};

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        assert_eq!(rounded_percentage(26, 30), 87);
        assert_eq!(rounded_percentage(20, 28), 71);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(5, 0), 0);
    }

    #[test]
    fn standing_bands_match_thresholds() {
        assert_eq!(AttendanceStanding::from_percentage(100), AttendanceStanding::Excellent);
        assert_eq!(AttendanceStanding::from_percentage(85), AttendanceStanding::Excellent);
        assert_eq!(AttendanceStanding::from_percentage(75), AttendanceStanding::Good);
        assert_eq!(AttendanceStanding::from_percentage(60), AttendanceStanding::Warning);
        assert_eq!(AttendanceStanding::from_percentage(59), AttendanceStanding::Critical);
    }

    #[test]
    fn record_standing_and_eligibility_follow_its_percentage() {
        let record = |attended, total| AttendanceRecord {
            attended_classes: attended,
            total_classes: total,
            ..AttendanceRecord::default()
        };

        assert_eq!(record(26, 30).standing(), AttendanceStanding::Excellent);
        assert!(record(26, 30).is_eligible());

        // 74.5 % rounds up to the threshold.
        assert_eq!(record(149, 200).percentage(), 75);
        assert!(record(149, 200).is_eligible());
        assert_eq!(record(149, 200).standing(), AttendanceStanding::Good);

        assert_eq!(record(20, 28).standing(), AttendanceStanding::Warning);
        assert!(!record(20, 28).is_eligible());
        assert_eq!(record(0, 0).standing(), AttendanceStanding::Critical);
    }
}
