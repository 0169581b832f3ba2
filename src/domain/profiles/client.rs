//! Profiles sub-client.

use crate::client::KlaviyoClient;
use crate::domain::metrics::TimelineParams;
use crate::domain::profiles::ProfileId;
use crate::error::SdkError;
use crate::request::{HttpMethod, Payload};
use crate::shared::{require, segment};
use serde_json::{Map, Value};

const PERSON_ID_MISSING: &str = "Person ID was not provided.";

pub struct Profiles<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> Profiles<'a> {
    /// All attributes of a person.
    pub async fn get_profile(&self, person_id: &str) -> Result<Value, SdkError> {
        require(person_id, PERSON_ID_MISSING)?;
        self.client
            .http
            .v1(HttpMethod::Get, &person_path(person_id), Payload::new())
            .await
    }

    /// Set or overwrite person properties. Returns the updated person.
    pub async fn update_profile(
        &self,
        person_id: &str,
        properties: &Map<String, Value>,
    ) -> Result<Value, SdkError> {
        require(person_id, PERSON_ID_MISSING)?;
        let payload = Payload::from(properties.clone());
        self.client
            .http
            .v1(HttpMethod::Put, &person_path(person_id), payload)
            .await
    }

    /// Event timeline of a single person.
    pub async fn get_profile_metrics_timeline(
        &self,
        person_id: &str,
        params: &TimelineParams,
    ) -> Result<Value, SdkError> {
        require(person_id, PERSON_ID_MISSING)?;
        let payload = Payload::from_serialize(params)?;
        let resource = format!("{}/metrics/timeline", person_path(person_id));
        self.client.http.v1(HttpMethod::Get, &resource, payload).await
    }

    /// Resolve an email address to a person ID.
    pub async fn get_profile_id_by_email(&self, email: &str) -> Result<String, SdkError> {
        require(email, "Email was not provided.")?;
        let payload = Payload::new().with("email", email);
        let value = self
            .client
            .http
            .v2(HttpMethod::Get, "people/search", payload)
            .await?;
        let found: ProfileId = serde_json::from_value(value)?;
        Ok(found.id)
    }
}

fn person_path(person_id: &str) -> String {
    format!("person/{}", segment(person_id))
}
