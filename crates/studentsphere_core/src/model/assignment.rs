//! Course assignments and their completion state.

use super::Record;
use crate::seed;
use crate::store::keys;
use serde::{Deserialize, Serialize};

/// Assignment lifecycle state, stored as `PENDING|IN_PROGRESS|COMPLETED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    /// Status reached by the completion toggle.
    ///
    /// Completed work reopens as pending; anything unfinished (including
    /// in-progress work) becomes completed.
    pub fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::Pending,
            Self::Pending | Self::InProgress => Self::Completed,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub subject: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub status: AssignmentStatus,
    pub description: String,
}

impl Assignment {
    /// Copy of this assignment with the toggled status.
    pub fn with_toggled_status(&self) -> Self {
        Self {
            status: self.status.toggled(),
            ..self.clone()
        }
    }
}

impl Record for Assignment {
    const COLLECTION_KEY: &'static str = keys::ASSIGNMENTS;
    const COLLECTION_NAME: &'static str = "assignments";

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::assignments()
    }
}
