//! Lists sub-client — list CRUD, subscriptions, memberships, exclusions.

use crate::client::KlaviyoClient;
use crate::domain::lists::wire::SegmentMembersResponse;
use crate::domain::lists::{
    CreatedList, ExclusionRecord, ListDetails, ListSummary, Member, Page, ProfileInput,
    ProfileLookup, SEGMENT_LOOKUP_LIMIT,
};
use crate::error::SdkError;
use crate::request::{HttpMethod, Payload};
use crate::shared::{require, segment, Marker};
use serde_json::Value;

const LIST_ID_MISSING: &str = "List ID was not provided.";

/// Sub-client for the list endpoints.
pub struct Lists<'a> {
    pub(crate) client: &'a KlaviyoClient,
}

impl<'a> Lists<'a> {
    // ── Lists ────────────────────────────────────────────────────────────

    /// All lists on the account.
    pub async fn get_lists(&self) -> Result<Vec<ListSummary>, SdkError> {
        let value = self
            .client
            .http
            .v2(HttpMethod::Get, "lists", Payload::new())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_list(&self, list_name: &str) -> Result<CreatedList, SdkError> {
        require(list_name, "List name was not provided.")?;
        let payload = Payload::new().with("list_name", list_name);
        let value = self.client.http.v2(HttpMethod::Post, "lists", payload).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_list_by_id(&self, list_id: &str) -> Result<ListDetails, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let value = self
            .client
            .http
            .v2(HttpMethod::Get, &list_path(list_id), Payload::new())
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn update_list_name_by_id(
        &self,
        list_id: &str,
        list_name: &str,
    ) -> Result<(), SdkError> {
        if list_id.trim().is_empty() || list_name.trim().is_empty() {
            return Err(SdkError::validation("List name or ID was not provided."));
        }
        let payload = Payload::new().with("list_name", list_name);
        self.client
            .http
            .v2(HttpMethod::Put, &list_path(list_id), payload)
            .await?;
        Ok(())
    }

    pub async fn delete_list(&self, list_id: &str) -> Result<(), SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        self.client
            .http
            .v2(HttpMethod::Delete, &list_path(list_id), Payload::new())
            .await?;
        Ok(())
    }

    // ── Subscriptions (honor the list's opt-in settings) ─────────────────

    pub async fn add_subscribers_to_list(
        &self,
        list_id: &str,
        profiles: &[ProfileInput],
    ) -> Result<Vec<Member>, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let payload = Payload::new().with("profiles", serde_json::to_value(profiles)?);
        let value = self
            .client
            .http
            .v2(HttpMethod::Post, &list_path_with(list_id, "subscribe"), payload)
            .await?;
        decode_members(value)
    }

    /// Profiles that are on the list and not suppressed. Empty identifier
    /// groups are left out of the query.
    pub async fn get_subscribers_from_list(
        &self,
        list_id: &str,
        lookup: &ProfileLookup,
    ) -> Result<Vec<Member>, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let mut payload = Payload::new();
        payload
            .insert_opt("emails", non_empty(&lookup.emails))
            .insert_opt("phone_numbers", non_empty(&lookup.phone_numbers))
            .insert_opt("push_tokens", non_empty(&lookup.push_tokens));
        let value = self
            .client
            .http
            .v2(HttpMethod::Get, &list_path_with(list_id, "subscribe"), payload)
            .await?;
        decode_members(value)
    }

    pub async fn delete_subscribers_from_list(
        &self,
        list_id: &str,
        emails: &[String],
        phone_numbers: &[String],
    ) -> Result<(), SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let payload = Payload::new()
            .with("emails", emails.to_vec())
            .with("phone_numbers", phone_numbers.to_vec());
        self.client
            .http
            .v2(HttpMethod::Delete, &list_path_with(list_id, "subscribe"), payload)
            .await?;
        Ok(())
    }

    // ── Members (ignore opt-in settings) ─────────────────────────────────

    pub async fn add_members_to_list(
        &self,
        list_id: &str,
        profiles: &[ProfileInput],
    ) -> Result<Vec<Member>, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let payload = Payload::new().with("profiles", serde_json::to_value(profiles)?);
        let value = self
            .client
            .http
            .v2(HttpMethod::Post, &list_path_with(list_id, "members"), payload)
            .await?;
        decode_members(value)
    }

    pub async fn get_members_from_list(
        &self,
        list_id: &str,
        lookup: &ProfileLookup,
    ) -> Result<Vec<Member>, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let value = self
            .client
            .http
            .v2(
                HttpMethod::Get,
                &list_path_with(list_id, "members"),
                lookup_payload(lookup),
            )
            .await?;
        decode_members(value)
    }

    pub async fn remove_members_from_list(
        &self,
        list_id: &str,
        lookup: &ProfileLookup,
    ) -> Result<(), SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        self.client
            .http
            .v2(
                HttpMethod::Delete,
                &list_path_with(list_id, "members"),
                lookup_payload(lookup),
            )
            .await?;
        Ok(())
    }

    // ── Paginated exports ────────────────────────────────────────────────

    /// One page of excluded emails with reason and time. Pass the returned
    /// marker back in to fetch the next page.
    pub async fn get_list_exclusions(
        &self,
        list_id: &str,
        marker: Option<&Marker>,
    ) -> Result<Page<ExclusionRecord>, SdkError> {
        require(list_id, LIST_ID_MISSING)?;
        let value = self
            .client
            .http
            .v2(
                HttpMethod::Get,
                &list_path_with(list_id, "exclusions/all"),
                marker_payload(marker),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// One page of every profile in a list or segment.
    pub async fn get_all_members(
        &self,
        group_id: &str,
        marker: Option<&Marker>,
    ) -> Result<Page<Member>, SdkError> {
        require(group_id, "Group ID was not provided.")?;
        let resource = format!("group/{}/members/all", segment(group_id));
        let value = self
            .client
            .http
            .v2(HttpMethod::Get, &resource, marker_payload(marker))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    // ── Segments ─────────────────────────────────────────────────────────

    /// Which of `emails` are in the segment. Only the first
    /// [`SEGMENT_LOOKUP_LIMIT`] addresses are sent.
    pub async fn get_subscribers_from_segment(
        &self,
        segment_id: &str,
        emails: &[String],
    ) -> Result<Vec<Member>, SdkError> {
        require(segment_id, "Segment ID was not provided.")?;
        let resource = format!("segment/{}/members", segment(segment_id));
        let value = self
            .client
            .http
            .v1(HttpMethod::Get, &resource, segment_lookup_payload(emails))
            .await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        let resp: SegmentMembersResponse = serde_json::from_value(value)?;
        Ok(resp.data)
    }
}

fn list_path(list_id: &str) -> String {
    format!("list/{}", segment(list_id))
}

fn list_path_with(list_id: &str, suffix: &str) -> String {
    format!("list/{}/{}", segment(list_id), suffix)
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn lookup_payload(lookup: &ProfileLookup) -> Payload {
    Payload::new()
        .with("emails", lookup.emails.clone())
        .with("phone_numbers", lookup.phone_numbers.clone())
        .with("push_tokens", lookup.push_tokens.clone())
}

fn segment_lookup_payload(emails: &[String]) -> Payload {
    let emails = &emails[..emails.len().min(SEGMENT_LOOKUP_LIMIT)];
    Payload::new().with("email", emails.to_vec())
}

/// Falsy markers (absent or empty) are not sent.
fn marker_payload(marker: Option<&Marker>) -> Payload {
    let mut payload = Payload::new();
    if let Some(m) = marker.filter(|m| !m.is_empty()) {
        payload.insert("marker", m.to_value());
    }
    payload
}

fn decode_members(value: Value) -> Result<Vec<Member>, SdkError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}
