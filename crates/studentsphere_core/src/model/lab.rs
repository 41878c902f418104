//! Scheduled lab sessions. Append-only.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabSession {
    pub id: String,
    pub subject: String,
    pub topic: String,
    /// Free-form slot, e.g. `Tue 02:00 PM`.
    pub time: String,
    pub room: String,
    pub instructor: String,
}

impl Record for LabSession {
    const COLLECTION_KEY: &'static str = keys::LABS;
    const COLLECTION_NAME: &'static str = "labs";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::labs()
    }
}
