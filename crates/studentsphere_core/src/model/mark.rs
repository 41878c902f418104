//! Test and exam scores.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mark {
    pub id: String,
    pub subject: String,
    pub score: f64,
    pub total: f64,
    pub test_name: String,
    pub date: String,
}

impl Mark {
    /// Score as a percentage of the total; `0.0` when the total is zero.
    pub fn percentage(&self) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        self.score / self.total * 100.0
    }
}

impl Record for Mark {
    const COLLECTION_KEY: &'static str = keys::MARKS;
    const COLLECTION_NAME: &'static str = "marks";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::marks()
    }
}
