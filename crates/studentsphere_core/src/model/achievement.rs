use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    /// Single emoji glyph.
    pub icon: String,
}

impl Record for Achievement {
    const COLLECTION_KEY: &'static str = keys::ACHIEVEMENTS;
    const COLLECTION_NAME: &'static str = "achievements";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::achievements()
    }
}
