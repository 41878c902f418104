//! Contact form submissions. Written, never read back by the portal.

use super::Record;
use crate::store::keys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Submission time in epoch milliseconds.
    pub timestamp: i64,
}

impl Record for ContactSubmission {
    const COLLECTION_KEY: &'static str = keys::CONTACTS;
    const COLLECTION_NAME: &'static str = "contacts";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}
