//! Signed-in faculty profile. Stored as a singleton record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub employee_id: String,
    pub bio: String,
    /// Remote URL or `data:` URL of an uploaded picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
