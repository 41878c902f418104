//! Faculty profile singleton.

use crate::model::profile::UserProfile;
use crate::seed;
use crate::store::{keys, KeyValueStore, LatencyClass, LocalStore, StoreResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;

pub struct ProfileService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
}

impl<'s, S: KeyValueStore> ProfileService<'s, S> {
    pub fn new(store: &'s LocalStore<S>) -> Self {
        Self { store }
    }

    /// Returns the stored profile, seeding the default one when absent.
    pub fn get(&self) -> StoreResult<UserProfile> {
        self.store.simulate(LatencyClass::Standard);
        self.store.read_singleton(keys::PROFILE, seed::profile)
    }

    /// Overwrites the stored profile.
    pub fn update(&self, profile: &UserProfile) -> StoreResult<()> {
        self.store.simulate(LatencyClass::Extended);
        self.store.write_singleton(keys::PROFILE, profile)?;
        info!(
            "event=profile_update module=service status=ok profile_id={}",
            profile.id
        );
        Ok(())
    }

    /// Embeds an uploaded picture as a `data:` URL and persists the profile.
    pub fn set_image(&self, mime_type: &str, bytes: &[u8]) -> StoreResult<UserProfile> {
        let mut profile = self.get()?;
        profile.image_url = Some(image_data_url(mime_type, bytes));
        self.update(&profile)?;
        Ok(profile)
    }
}

/// Encodes `bytes` as a base64 `data:` URL.
pub fn image_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type.trim(), STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::image_data_url;

    #[test]
    fn data_url_carries_mime_type_and_base64_payload() {
        assert_eq!(
            image_data_url("image/png", b"\x89PNG"),
            "data:image/png;base64,iVBORw=="
        );
    }
}
