//! Faculty directory entries. Read-only.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacultyMember {
    pub id: String,
    pub name: String,
    pub department: String,
    pub email: String,
    pub specialization: String,
    /// Portrait URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Record for FacultyMember {
    const COLLECTION_KEY: &'static str = keys::FACULTY;
    const COLLECTION_NAME: &'static str = "faculty";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::faculty()
    }
}
