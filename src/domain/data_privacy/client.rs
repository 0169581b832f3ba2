//! Data privacy sub-client.

use crate::client::KlaviyoClient;
use crate::domain::data_privacy::DeletionTarget;
use crate::error::SdkError;
use crate::request::{HttpMethod, Payload};
use crate::shared::require;
use serde_json::Value;

pub struct DataPrivacy<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> DataPrivacy<'a> {
    /// Queue a profile and all its data for deletion.
    pub async fn request_profile_deletion(
        &self,
        target: &DeletionTarget,
    ) -> Result<Value, SdkError> {
        require(target.value(), "Profile identifier was not provided.")?;
        let (key, value) = target.to_entry();
        let payload = Payload::new().with(key, value);
        self.client
            .http
            .v2(HttpMethod::Post, "data-privacy/deletion-request", payload)
            .await
    }
}
