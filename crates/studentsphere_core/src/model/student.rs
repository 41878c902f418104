//! Student roster record.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEMESTER: &str = "5th";
pub const DEFAULT_DEPARTMENT: &str = "Electronics & Communication";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    /// University Seat Number. Matched case-insensitively.
    pub usn: String,
    pub semester: String,
    pub department: String,
    pub email: String,
    /// 0.0 ..= 10.0
    pub cgpa: f64,
    /// Percentage, 0.0 ..= 100.0. The roster form accepts fractions.
    pub attendance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Student {
    /// Blank enrollment form values: default semester and department, zero
    /// CGPA and attendance.
    pub fn enrollment(name: impl Into<String>, usn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usn: usn.into(),
            semester: DEFAULT_SEMESTER.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            ..Self::default()
        }
    }

    /// Whether `key` names this student's USN, ignoring case.
    pub fn matches_usn(&self, key: &str) -> bool {
        self.usn.to_lowercase() == key.to_lowercase()
    }
}

impl Record for Student {
    const COLLECTION_KEY: &'static str = keys::STUDENTS;
    const COLLECTION_NAME: &'static str = "students";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::students()
    }
}
