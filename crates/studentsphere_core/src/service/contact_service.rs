//! Contact form sink.

use super::{append_record, require, ServiceResult};
use crate::model::contact::ContactSubmission;
use crate::model::id::IdGenerator;
use crate::store::{KeyValueStore, LatencyClass, LocalStore};
use chrono::Utc;
use log::info;

/// Appends submissions in arrival order. There is no read API.
pub struct ContactService<'s, S: KeyValueStore> {
    store: &'s LocalStore<S>,
    ids: &'s IdGenerator,
}

impl<'s, S: KeyValueStore> ContactService<'s, S> {
    pub fn new(store: &'s LocalStore<S>, ids: &'s IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Stores one message and returns the persisted submission.
    ///
    /// Name, email and message are form-required.
    pub fn submit(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> ServiceResult<ContactSubmission> {
        let submission = ContactSubmission {
            id: self.ids.next_id(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        };
        require("contact submission", "name", &submission.name)?;
        require("contact submission", "email", &submission.email)?;
        require("contact submission", "message", &submission.message)?;

        self.store.simulate(LatencyClass::Bulk);
        append_record(self.store, submission.clone())?;
        info!(
            "event=contact_submit module=service status=ok contact_id={} message_chars={}",
            submission.id,
            submission.message.chars().count()
        );
        Ok(submission)
    }
}
